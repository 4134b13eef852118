use crate::{AppState, errors::ApiError, templates::RenderedPost};
use axum::{extract::State, response::Html};
use tracing::info;

/// GET /
/// Lists every post with its body converted to HTML.
pub async fn post_list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let posts = state.posts.list();

    // One round trip per post, in order
    let mut rendered = Vec::with_capacity(posts.len());
    for post in posts {
        let html = post.render_markup(state.converter.as_ref()).await?;
        rendered.push(RenderedPost {
            id: post.id,
            title: post.title,
            html,
        });
    }

    info!("Rendered listing with {} posts", rendered.len());

    let page = state.templates.post_list(&state.blog_title, &rendered)?;
    Ok(Html(page))
}
