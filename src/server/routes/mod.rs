//! HTTP route modules
//!
//! Dashboard pages are gated by role; landing pages are public and are where
//! denied requests end up.

pub mod dashboard;
pub mod landing;

use actix_web::HttpResponse;
use actix_web::http::header::{CACHE_CONTROL, ContentType};

/// Render a minimal HTML page
pub(crate) fn html_page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((CACHE_CONTROL, "private, no-store"))
        .body(format!(
            "<!doctype html>\n<html><head><title>{title}</title></head>\
             <body><h1>{title}</h1>{body}</body></html>\n",
            title = escape_html(title),
            body = body
        ))
}

/// Escape text for inclusion in HTML
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
