use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use stocklive_core::content::{BlogPost, Lesson, NewBlogPost, StockRecommendation};

use crate::{
    auth::Claims,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
struct LessonsResponse {
    lessons: Vec<Lesson>,
}

#[derive(Serialize)]
struct BlogPostsResponse {
    posts: Vec<BlogPost>,
}

#[derive(Deserialize)]
struct CreateBlogPostRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

async fn get_lessons(State(state): State<Arc<AppState>>) -> Json<LessonsResponse> {
    Json(LessonsResponse {
        lessons: state.content_service.get_lessons(),
    })
}

async fn get_blog_posts(State(state): State<Arc<AppState>>) -> ApiResult<Json<BlogPostsResponse>> {
    let posts = state.content_service.get_blog_posts()?;
    Ok(Json(BlogPostsResponse { posts }))
}

async fn create_blog_post(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBlogPostRequest>,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    let (Some(title), Some(content)) = (non_empty(payload.title), non_empty(payload.content))
    else {
        return Err(ApiError::BadRequest("title-and-content-required".to_string()));
    };
    // Posts default to the author's account email.
    let author = non_empty(payload.author).or(Some(claims.email));
    let created = state
        .content_service
        .create_blog_post(NewBlogPost {
            title,
            content,
            author,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_recommendations(State(state): State<Arc<AppState>>) -> Json<Vec<StockRecommendation>> {
    Json(state.content_service.get_recommendations())
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lessons", get(get_lessons))
        .route("/blog", get(get_blog_posts))
        .route("/stock-recommendations", get(get_recommendations))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/blog", post(create_blog_post))
}
