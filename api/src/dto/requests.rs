use crate::models::NewPost;
use serde::Deserialize;

/// Title length is checked by the store on create.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub text: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        NewPost::new(req.title, req.text)
    }
}
