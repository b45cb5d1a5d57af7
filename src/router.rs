use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    controller::{
        entry::{create_entry, get_entries, get_entry},
        user::{confirm_email, login},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/user/login", post(login))
        .route("/api/user/confirm-email/{id}", post(confirm_email))
        .route("/api/entry", post(create_entry).get(get_entries))
        .route("/api/entry/{id}", get(get_entry))
        .layer(CorsLayer::permissive())
}
