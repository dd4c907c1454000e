//! Home API routes - app overview

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::state::AppState;

/// Configure home routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_home);
}

/// GET / (under /home) - the numbers the landing page shows
#[get("")]
pub async fn get_home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "app": "showdeck",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "projects": state.catalog.count(),
        "favorites": state.favorites.count(),
        "theme": state.theme.current(),
    }))
}
