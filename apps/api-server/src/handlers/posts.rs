//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use posts_core::domain::{NewPost, Post, PostPatch};
use posts_shared::dto::{CreatePostRequest, DeletePostResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        contents: post.contents,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
        deleted_at: post.deleted_at.map(|t| t.to_rfc3339()),
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid post id: {}", raw)))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let errors = req.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let post = state
        .posts
        .create(NewPost::new(req.title, req.contents))
        .await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn find_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.find_one(id).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PATCH /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    let errors = req.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let patch = PostPatch {
        title: req.title,
        contents: req.contents,
    };
    let post = state.posts.update(id, patch).await?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let result = state.posts.remove(id).await?;
    tracing::info!(post_id = %id, affected = result.rows_affected, "Post soft-deleted");

    Ok(HttpResponse::Ok().json(DeletePostResponse {
        affected: result.rows_affected,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_and_fetch_post() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "Hello", "contents": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["title"], "Hello");
        assert!(created["deleted_at"].is_null());

        let id = created["id"].as_str().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_rejects_empty_title() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "", "contents": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_create_rejects_missing_field() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "only a title"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_post_is_404() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_400() {
        let app = app!();

        let req = test::TestRequest::delete()
            .uri("/api/posts/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_patch_merges_and_delete_soft_deletes() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "old", "contents": "c"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/posts/{}", created["id"].as_str().unwrap());

        let req = test::TestRequest::patch()
            .uri(&uri)
            .set_json(json!({"title": "new"}))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["title"], "new");
        assert_eq!(updated["contents"], "c");

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["affected"], 1);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert!(fetched["deleted_at"].is_string());
    }

    #[actix_web::test]
    async fn test_empty_patch_is_rejected() {
        let app = app!();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
