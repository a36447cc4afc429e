//! Actix-web JSON endpoints of the dashboard.

use actix_web::{HttpResponse, web};

use crate::query::resource::{Categories, Orders, Products, Users, Variants, Vendors};
use crate::repository::BackendApi;
use crate::services::ServiceError;

pub mod resources;
pub mod search;

/// Maps a service failure to the HTTP response shown to the client.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Validation(message) => HttpResponse::BadRequest().body(message.clone()),
        ServiceError::RequestFailed(_) => HttpResponse::BadGateway().finish(),
    }
}

/// Registers the `/v1` routes for every resource against backend `A`.
///
/// Expects `web::Data<A>` and `web::Data<ServerConfig>` in the app data.
pub fn configure<A: BackendApi + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/v1/search", web::get().to(search::search_catalog::<A>));
    resources::register::<Products, A>(cfg);
    resources::register::<Orders, A>(cfg);
    resources::register::<Users, A>(cfg);
    resources::register::<Categories, A>(cfg);
    resources::register::<Vendors, A>(cfg);
    resources::register::<Variants, A>(cfg);
}
