use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ArticleData;
use crate::domain::article::models::ArticleTitle;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::ports::ArticleServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_article(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateArticleRequest>,
) -> Result<ApiSuccess<ArticleData>, ApiError> {
    let title = ArticleTitle::new(body.title)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let command = CreateArticleCommand::new(title, body.body);

    state
        .article_service
        .create_article(command, current_user.0.id)
        .await
        .map_err(ApiError::from)
        .map(|ref article| ApiSuccess::new(StatusCode::OK, article.into()))
}

/// HTTP request body for creating an article (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateArticleRequest {
    title: String,
    body: String,
}
