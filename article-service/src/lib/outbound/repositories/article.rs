use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleTitle;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::user::models::UserId;

pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_article(row: &PgRow) -> Result<Article, ArticleError> {
        let id: uuid::Uuid = row
            .try_get("id")
            .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;
        let body: String = row
            .try_get("body")
            .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;
        let author_id: uuid::Uuid = row
            .try_get("author_id")
            .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;
        let created_at: chrono::DateTime<chrono::Utc> = row
            .try_get("created_at")
            .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        Ok(Article {
            id: ArticleId(id),
            title: ArticleTitle::new(title)?,
            body,
            author_id: UserId(author_id),
            created_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn create(&self, article: Article) -> Result<Article, ArticleError> {
        sqlx::query(
            r#"
            INSERT INTO articles (id, title, body, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(article.id.0)
        .bind(article.title.as_str())
        .bind(&article.body)
        .bind(article.author_id.0)
        .bind(article.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        Ok(article)
    }

    async fn list_all(&self) -> Result<Vec<Article>, ArticleError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, body, author_id, created_at
            FROM articles
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ArticleError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_article).collect()
    }
}
