use async_trait::async_trait;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::user::models::UserId;

/// Port for article domain service operations.
#[async_trait]
pub trait ArticleServicePort: Send + Sync + 'static {
    /// Create a new article owned by the given author.
    ///
    /// # Arguments
    /// * `command` - Validated command containing title and body
    /// * `author_id` - ID of the authenticated author
    ///
    /// # Returns
    /// Created article entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_article(
        &self,
        command: CreateArticleCommand,
        author_id: UserId,
    ) -> Result<Article, ArticleError>;

    /// Retrieve all articles, newest first.
    ///
    /// # Returns
    /// Vector of articles ordered by creation time, most recent first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError>;
}

/// Persistence operations for the article aggregate.
#[async_trait]
pub trait ArticleRepository: Send + Sync + 'static {
    /// Persist new article to storage.
    ///
    /// # Arguments
    /// * `article` - Article entity to create
    ///
    /// # Returns
    /// Created article entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, article: Article) -> Result<Article, ArticleError>;

    /// Retrieve all articles from storage, newest first.
    ///
    /// # Returns
    /// Vector of articles ordered by creation time, most recent first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Article>, ArticleError>;
}
