mod health;
mod page;
mod post;

use crate::AppState;
use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use health::health_check;
pub use page::post_list;
pub use post::{create_post, delete_post, get_post, get_post_html, get_posts};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(post_list))
        .route("/health", get(health_check))
        .route("/posts", get(get_posts).post(create_post))
        .route("/posts/{id}", get(get_post).delete(delete_post))
        .route("/posts/{id}/html", get(get_post_html))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
