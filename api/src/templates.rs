//! HTML pages rendered with Tera. Templates are embedded in the binary.

use serde::Serialize;
use tera::{Context, Tera};
use uuid::Uuid;

/// A post as the listing template sees it: the body is already converted.
#[derive(Debug, Serialize)]
pub struct RenderedPost {
    pub id: Uuid,
    pub title: String,
    pub html: String,
}

pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![(
            "post_list.html",
            include_str!("../templates/post_list.html"),
        )])?;

        Ok(Self { tera })
    }

    /// Titles are autoescaped; `html` is inserted as-is.
    pub fn post_list(&self, title: &str, posts: &[RenderedPost]) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("posts", posts);
        self.tera.render("post_list.html", &context)
    }
}
