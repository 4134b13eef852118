use crate::models::{NewPost, Post};
use chrono::Utc;
use dashmap::DashMap;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
}

/// Storage seam for posts.
///
/// Ordering of `list` is whatever the backing store yields; callers must not
/// rely on it.
pub trait PostStore: Send + Sync {
    fn create(&self, post: NewPost) -> Result<Post, StoreError>;
    fn list(&self) -> Vec<Post>;
    fn get(&self, id: &Uuid) -> Option<Post>;
    fn delete(&self, id: &Uuid) -> bool;
}

/// `DashMap` = Thread-safe HashMap, shared by all request handlers
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: DashMap<Uuid, Post>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostStore for MemoryPostStore {
    fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        post.validate().map_err(|e| StoreError::Validation(e.to_string()))?;

        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            text: post.text,
            created_at: Utc::now().timestamp(),
        };

        self.posts.insert(post.id, post.clone());

        info!("Post created: {}", post.id);

        Ok(post)
    }

    fn list(&self) -> Vec<Post> {
        self.posts
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn get(&self, id: &Uuid) -> Option<Post> {
        self.posts.get(id).map(|entry| entry.value().clone())
    }

    fn delete(&self, id: &Uuid) -> bool {
        let removed = self.posts.remove(id).is_some();
        if removed {
            info!("Post deleted: {}", id);
        }
        removed
    }
}
