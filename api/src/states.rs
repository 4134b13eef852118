use crate::{markup::MarkupConverter, store::PostStore, templates::TemplateRenderer};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Every field is behind an `Arc`, so cloning per request is cheap.
/// The store and converter are trait objects so tests can swap them out.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub converter: Arc<dyn MarkupConverter>,
    pub templates: Arc<TemplateRenderer>,
    pub blog_title: Arc<str>,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostStore>,
        converter: Arc<dyn MarkupConverter>,
        templates: TemplateRenderer,
        blog_title: &str,
    ) -> Self {
        Self {
            posts,
            converter,
            templates: Arc::new(templates),
            blog_title: Arc::from(blog_title),
        }
    }
}
