use stocklive_core::content::{BlogPost, BlogRepositoryTrait, NewBlogPost};
use stocklive_core::Result;

use super::model::{BlogPostDB, NewBlogPostDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::blog_posts;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct BlogRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BlogRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BlogRepository { pool, writer }
    }
}

#[async_trait]
impl BlogRepositoryTrait for BlogRepository {
    fn list_posts(&self) -> Result<Vec<BlogPost>> {
        let mut conn = get_connection(&self.pool)?;
        let posts = blog_posts::table
            .order(blog_posts::id.asc())
            .select(BlogPostDB::as_select())
            .load::<BlogPostDB>(&mut conn)
            .into_core()?;
        Ok(posts.into_iter().map(BlogPost::from).collect())
    }

    async fn insert_post(&self, new_post: NewBlogPost) -> Result<BlogPost> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BlogPost> {
                let row = NewBlogPostDB {
                    title: new_post.title,
                    content: new_post.content,
                    author: new_post.author,
                    date_posted: Utc::now().naive_utc(),
                };
                let result_db = diesel::insert_into(blog_posts::table)
                    .values(&row)
                    .returning(BlogPostDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(BlogPost::from(result_db))
            })
            .await
    }
}
