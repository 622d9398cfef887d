//! # Blog API
//!
//! Actix-web server exposing CRUD over blog posts under `/api`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use actix_web::web;

pub use config::AppConfig;
pub use state::AppState;

/// Register the shared state and every route on an app.
///
/// ```ignore
/// App::new().configure(blog_api::configure_app(state.clone()))
/// ```
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .configure(handlers::configure_routes);
    }
}
