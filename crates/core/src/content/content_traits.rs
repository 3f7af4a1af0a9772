use async_trait::async_trait;

use crate::content::blog_model::{BlogPost, NewBlogPost};
use crate::content::lessons::Lesson;
use crate::content::recommendations::StockRecommendation;
use crate::errors::Result;

/// Trait for blog repository operations
#[async_trait]
pub trait BlogRepositoryTrait: Send + Sync {
    /// All posts, oldest first.
    fn list_posts(&self) -> Result<Vec<BlogPost>>;
    async fn insert_post(&self, new_post: NewBlogPost) -> Result<BlogPost>;
}

/// Trait for content service operations
#[async_trait]
pub trait ContentServiceTrait: Send + Sync {
    fn get_lessons(&self) -> Vec<Lesson>;
    fn get_blog_posts(&self) -> Result<Vec<BlogPost>>;
    async fn create_blog_post(&self, new_post: NewBlogPost) -> Result<BlogPost>;
    fn get_recommendations(&self) -> Vec<StockRecommendation>;
}
