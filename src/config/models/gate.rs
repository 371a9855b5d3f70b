//! Gate redirect configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where denied requests are sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Destination for callers without a session
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Destination for callers whose role is not allowed
    #[serde(default = "default_forbidden_path")]
    pub forbidden_path: String,
    /// Query parameter carrying the original location on sign-in redirects.
    /// `None` disables it.
    #[serde(default = "default_return_to_param")]
    pub return_to_param: Option<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            sign_in_path: default_sign_in_path(),
            forbidden_path: default_forbidden_path(),
            return_to_param: default_return_to_param(),
        }
    }
}

impl GateConfig {
    /// Validate gate configuration
    pub fn validate(&self) -> Result<(), String> {
        validate_destination("sign_in_path", &self.sign_in_path)?;
        validate_destination("forbidden_path", &self.forbidden_path)?;

        if destination_target(&self.sign_in_path) == destination_target(&self.forbidden_path) {
            return Err(
                "sign_in_path and forbidden_path must be distinct destinations".to_string(),
            );
        }

        if let Some(param) = &self.return_to_param {
            if param.is_empty() || !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(format!(
                    "return_to_param must be a non-empty alphanumeric name, got '{}'",
                    param
                ));
            }
        }

        Ok(())
    }
}

/// Page a destination lands on, ignoring its query and fragment
fn destination_target(value: &str) -> String {
    if value.starts_with('/') {
        let end = value.find(['?', '#']).unwrap_or(value.len());
        return value[..end].to_string();
    }

    match url::Url::parse(value) {
        Ok(mut url) => {
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => value.to_string(),
    }
}

/// Destinations are either site-relative paths or absolute http(s) URLs
fn validate_destination(name: &str, value: &str) -> Result<(), String> {
    if value.starts_with("//") {
        return Err(format!("{} must not be protocol-relative: {}", name, value));
    }
    if value.starts_with('/') {
        return Ok(());
    }

    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(format!(
            "{} must use http:// or https:// scheme, got: {}",
            name,
            url.scheme()
        )),
        Err(e) => Err(format!(
            "{} must be a path starting with '/' or an absolute URL: {}",
            name, e
        )),
    }
}
