use actix_web::{HttpResponse, Responder, web};

use crate::forms::search::SearchForm;
use crate::repository::BackendApi;
use crate::routes::error_response;
use crate::services::search as search_service;

pub async fn search_catalog<A: BackendApi + 'static>(
    web::Query(form): web::Query<SearchForm>,
    api: web::Data<A>,
) -> impl Responder {
    match search_service::search_catalog(api.get_ref(), form).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
