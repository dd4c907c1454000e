//! Analytics API routes

use actix_web::{get, web, HttpResponse, Responder};

use crate::state::AppState;

/// Configure analytics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_analytics);
}

/// GET / (under /analytics) - the summary for the current favorites
#[get("")]
pub async fn get_analytics(state: web::Data<AppState>) -> impl Responder {
    let summary = state.analytics.summary(&state.favorites);
    HttpResponse::Ok().json(&*summary)
}
