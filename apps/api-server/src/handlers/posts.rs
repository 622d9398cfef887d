//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostInput;
use blog_shared::ApiResponse;
use blog_shared::dto::PostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn into_input(body: web::Json<PostRequest>) -> PostInput {
    let req = body.into_inner();
    PostInput {
        title: req.title,
        content: req.content,
        author: req.author,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(into_input(body)).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id}
///
/// An unknown id answers 404 even when the body is unreadable.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Result<web::Json<PostRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            state.posts.get(&path).await.map_err(AppError::from)?;
            return Err(err);
        }
    };

    let post = state
        .posts
        .update(&path, into_input(body))
        .await
        .map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}
