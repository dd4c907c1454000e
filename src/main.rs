//! Showdeck - A self-hosted project showcase with favorites and analytics
//!
//! Serves a fixed catalog of sample projects and keeps the favorites
//! collection, its analytics, and the UI theme in process memory.

#![allow(dead_code)]

mod api;
mod catalog;
mod core;
mod models;
mod serializers;
mod state;
mod stores;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::state::AppState;

/// Showdeck - Self-hosted project showcase
#[derive(Parser, Debug)]
#[command(name = "showdeck")]
#[command(version)]
#[command(about = "A self-hosted project showcase with favorites and analytics")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5173)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Showdeck v{} starting...", env!("CARGO_PKG_VERSION"));

    // everything lives in memory, a restart starts a fresh session
    let state = web::Data::new(AppState::with_sample_catalog());
    info!("Loaded {} catalog projects", state.catalog.count());

    let addr = format!("{}:{}", args.host, args.port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
