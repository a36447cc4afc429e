use actix_web::{HttpRequest, HttpResponse, Responder, web};

use crate::models::config::ServerConfig;
use crate::query::Resource;
use crate::repository::BackendApi;
use crate::routes::error_response;
use crate::services::listing::{load_detail, load_listing};

/// Adds the listing and detail routes of `R`.
pub fn register<R: Resource, A: BackendApi + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route(
        &format!("/v1/{}", R::NAME),
        web::get().to(list_resource::<R, A>),
    )
    .route(
        &format!("/v1/{}/{{id}}", R::NAME),
        web::get().to(show_resource::<R, A>),
    );
}

/// The raw query string is the listing state, so it is passed through
/// untouched instead of going through a typed extractor.
pub async fn list_resource<R: Resource, A: BackendApi + 'static>(
    req: HttpRequest,
    api: web::Data<A>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match load_listing::<R, A>(api.get_ref(), req.query_string(), server_config.page_size).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}

pub async fn show_resource<R: Resource, A: BackendApi + 'static>(
    id: web::Path<String>,
    api: web::Data<A>,
) -> impl Responder {
    match load_detail::<R, A>(api.get_ref(), &id.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(&err),
    }
}
