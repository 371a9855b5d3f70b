//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes::{dashboard, landing};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::from_config(config.clone())?;
        info!(
            provider = ?state.gate,
            sign_in = %config.gate().sign_in_path,
            forbidden = %config.gate().forbidden_path,
            "Access gate ready"
        );

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.bind_address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server.bind(&bind_addr)?.run();

        info!("HTTP server listening on {}", bind_addr);
        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let routes_state = state.clone();

    App::new()
        .app_data(state)
        .wrap(DefaultHeaders::new().add(("Server", crate::NAME)))
        .wrap(TracingLogger::default())
        .wrap(RequestIdMiddleware)
        .route("/health", web::get().to(health_check))
        .configure(|cfg| landing::configure_routes(cfg, &routes_state))
        .configure(|cfg| dashboard::configure_routes(cfg, &routes_state))
}
