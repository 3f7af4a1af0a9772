//! Content module - lessons, blog posts and stock recommendations.

mod blog_model;
mod content_service;
mod content_traits;
mod lessons;
mod recommendations;

pub use blog_model::{BlogPost, NewBlogPost};
pub use content_service::ContentService;
pub use content_traits::{BlogRepositoryTrait, ContentServiceTrait};
pub use lessons::{Lesson, LessonCatalog};
pub use recommendations::{default_recommendations, Recommendation, StockRecommendation};
