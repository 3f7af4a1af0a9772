//! Database models for blog posts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for blog posts
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::blog_posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BlogPostDB {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date_posted: NaiveDateTime,
}

/// Database model for creating a new blog post
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct NewBlogPostDB {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub date_posted: NaiveDateTime,
}

impl From<BlogPostDB> for stocklive_core::content::BlogPost {
    fn from(db: BlogPostDB) -> Self {
        Self {
            id: i64::from(db.id),
            title: db.title,
            content: db.content,
            author: db.author,
            date_posted: db.date_posted,
        }
    }
}
