mod post;

pub use post::{MAX_TITLE_CHARS, NewPost, Post};
