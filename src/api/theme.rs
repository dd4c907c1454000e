//! Theme API routes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::state::AppState;

/// Configure theme routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_theme).service(toggle_theme);
}

#[get("")]
pub async fn get_theme(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({"theme": state.theme.current()}))
}

#[post("/toggle")]
pub async fn toggle_theme(state: web::Data<AppState>) -> impl Responder {
    let theme = state.theme.toggle();
    info!("theme switched to {}", theme);

    HttpResponse::Ok().json(json!({"theme": theme}))
}
