//! Favorites API routes
//!
//! Adds resolve the project from the catalog before touching the store,
//! so the favorites collection can never hold an id the catalog does not
//! know. Requests that change nothing (duplicate add, remove of an absent
//! id, unknown ids) still answer 200 with a message.

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::serializers::ProjectResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FavoriteBody {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteQuery {
    pub id: i64,
}

#[post("/add")]
pub async fn add_favorite(
    state: web::Data<AppState>,
    body: web::Json<FavoriteBody>,
) -> impl Responder {
    let project = match state.catalog.get_by_id(body.id) {
        Some(project) => project.clone(),
        // the UI only sends catalog ids, anything else is dropped
        None => return HttpResponse::Ok().json(json!({"msg": "Nothing to add"})),
    };

    if state.favorites.add(project) {
        info!("favorited project id={}", body.id);
        HttpResponse::Ok().json(json!({"msg": "Added to favorites"}))
    } else {
        HttpResponse::Ok().json(json!({"msg": "Already in favorites"}))
    }
}

#[post("/remove")]
pub async fn remove_favorite(
    state: web::Data<AppState>,
    body: web::Json<FavoriteBody>,
) -> impl Responder {
    if state.favorites.remove(body.id) {
        info!("unfavorited project id={}", body.id);
        HttpResponse::Ok().json(json!({"msg": "Removed from favorites"}))
    } else {
        HttpResponse::Ok().json(json!({"msg": "Nothing to remove"}))
    }
}

#[post("/clear")]
pub async fn clear_favorites(state: web::Data<AppState>) -> impl Responder {
    if state.favorites.clear() {
        info!("cleared favorites");
    }

    HttpResponse::Ok().json(json!({"msg": "Favorites cleared"}))
}

#[get("")]
pub async fn get_all_favorites(state: web::Data<AppState>) -> impl Responder {
    let favorites = state.favorites.items();
    let projects: Vec<ProjectResponse> = favorites
        .iter()
        .map(|p| ProjectResponse::new(p, true))
        .collect();

    HttpResponse::Ok().json(json!({
        "projects": projects,
        "total": projects.len(),
    }))
}

#[get("/check")]
pub async fn check_favorite(
    state: web::Data<AppState>,
    query: web::Query<FavoriteQuery>,
) -> impl Responder {
    let is_favorite = state.favorites.contains(query.id);
    HttpResponse::Ok().json(json!({"is_favorite": is_favorite}))
}

#[get("/count")]
pub async fn count_favorites(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({"count": state.favorites.count()}))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(add_favorite)
        .service(remove_favorite)
        .service(clear_favorites)
        .service(check_favorite)
        .service(count_favorites)
        .service(get_all_favorites);
}
