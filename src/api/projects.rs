//! Project catalog API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::serializers::ProjectResponse;
use crate::state::AppState;

/// Configure project routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_projects).service(get_project);
}

/// GET / (under /projects) - the full catalog with favorite flags
#[get("")]
pub async fn get_projects(state: web::Data<AppState>) -> impl Responder {
    // one favorites snapshot so the flags and the counts agree
    let favorites = state.favorites.items();

    let projects: Vec<ProjectResponse> = state
        .catalog
        .get_all()
        .iter()
        .map(|p| ProjectResponse::new(p, favorites.iter().any(|f| f.id == p.id)))
        .collect();

    let favorited = projects.iter().filter(|p| p.is_favorite).count();

    HttpResponse::Ok().json(json!({
        "projects": projects,
        "total": projects.len(),
        "favorited": favorited,
        "unfavorited": projects.len() - favorited,
    }))
}

/// GET /{id} (under /projects) - a single catalog entry
#[get("/{id}")]
pub async fn get_project(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get_by_id(id) {
        Some(project) => {
            let response = ProjectResponse::new(project, state.favorites.contains(id));
            HttpResponse::Ok().json(response)
        }
        None => HttpResponse::NotFound().json(json!({"error": "Project not found"})),
    }
}
