use crate::markup::{ConvertError, MarkupConverter};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

pub const MAX_TITLE_CHARS: u64 = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub created_at: i64,
}

impl Post {
    /// Converts the markup body to HTML through `converter`.
    ///
    /// Every call goes out to the converter; nothing is cached on the post.
    pub async fn render_markup(
        &self,
        converter: &dyn MarkupConverter,
    ) -> Result<String, ConvertError> {
        converter.convert(&self.text).await
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Input for `PostStore::create`. The store assigns id and timestamp.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct NewPost {
    // validator counts chars, not bytes
    #[validate(length(max = MAX_TITLE_CHARS, message = "Title must be at most 256 characters"))]
    pub title: String,
    pub text: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}
