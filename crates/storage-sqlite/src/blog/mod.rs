//! SQLite storage implementation for blog posts.

mod model;
mod repository;

pub use model::{BlogPostDB, NewBlogPostDB};
pub use repository::BlogRepository;
