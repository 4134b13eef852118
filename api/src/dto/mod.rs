mod requests;

pub use requests::CreatePostRequest;
