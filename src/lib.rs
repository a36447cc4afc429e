//! Paginated resource browser for the shop admin dashboard.
//!
//! Listing views are driven entirely by the URL query string: the
//! [`query`] codec decodes it, [`services`] fetch and validate the matching
//! [`pagination::PaginatedResult`] from the backend, and the [`table`]
//! controller turns user intents back into query strings. The [`search`]
//! module implements the debounced quick-search box.

pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod search;
pub mod services;
pub mod table;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};

    use crate::models::config::ServerConfig;
    use crate::repository::HttpBackend;
    use crate::routes;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = HttpBackend::new(&server_config.backend_url, server_config.request_timeout())
            .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;

        log::info!(
            "Serving dashboard API on {}:{} against {}",
            server_config.address,
            server_config.port,
            server_config.backend_url
        );

        let backend = web::Data::new(backend);
        let bind_address = (server_config.address.clone(), server_config.port);
        let server_config = web::Data::new(server_config);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .app_data(backend.clone())
                .app_data(server_config.clone())
                .service(web::scope("/api").configure(routes::configure::<HttpBackend>))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
