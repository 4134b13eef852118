use crate::{
    AppState,
    dto::CreatePostRequest,
    errors::ApiError,
    extract::{Json as JsonBody, Path},
    models::Post,
};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;

/// POST /posts
/// Body: { "title": "...", "text": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.posts.create(payload.into())?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list())
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let post = state.posts.get(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(post))
}

/// GET /posts/:id/html
/// Response: the post body as rendered by the markdown API
pub async fn get_post_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state.posts.get(&id).ok_or(ApiError::NotFound)?;
    let html = post.render_markup(state.converter.as_ref()).await?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html))
}

/// DELETE /posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.posts.delete(&id) {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
