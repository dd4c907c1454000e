//! REST API routes for Showdeck

pub mod analytics;
pub mod favorites;
pub mod home;
pub mod projects;
pub mod theme;

use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Project catalog routes
        .service(web::scope("/projects").configure(projects::configure))
        // Favorites routes
        .service(web::scope("/favorites").configure(favorites::configure))
        // Analytics routes
        .service(web::scope("/analytics").configure(analytics::configure))
        // Theme routes
        .service(web::scope("/theme").configure(theme::configure))
        // Home routes
        .service(web::scope("/home").configure(home::configure));
}
