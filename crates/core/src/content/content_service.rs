use std::sync::Arc;

use async_trait::async_trait;

use crate::content::blog_model::{BlogPost, NewBlogPost};
use crate::content::content_traits::{BlogRepositoryTrait, ContentServiceTrait};
use crate::content::lessons::{Lesson, LessonCatalog};
use crate::content::recommendations::{default_recommendations, StockRecommendation};
use crate::errors::{Result, ValidationError};

pub struct ContentService {
    catalog: LessonCatalog,
    blog_repository: Arc<dyn BlogRepositoryTrait>,
}

impl ContentService {
    pub fn new(catalog: LessonCatalog, blog_repository: Arc<dyn BlogRepositoryTrait>) -> Self {
        Self {
            catalog,
            blog_repository,
        }
    }
}

#[async_trait]
impl ContentServiceTrait for ContentService {
    fn get_lessons(&self) -> Vec<Lesson> {
        self.catalog.lessons().to_vec()
    }

    fn get_blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.blog_repository.list_posts()
    }

    async fn create_blog_post(&self, new_post: NewBlogPost) -> Result<BlogPost> {
        let title = new_post.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if new_post.content.trim().is_empty() {
            return Err(ValidationError::MissingField("content".to_string()).into());
        }
        let author = new_post
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        self.blog_repository
            .insert_post(NewBlogPost {
                title,
                content: new_post.content,
                author,
            })
            .await
    }

    fn get_recommendations(&self) -> Vec<StockRecommendation> {
        default_recommendations()
    }
}
