use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::article::ports::ArticleServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for article operations.
pub struct ArticleService<AR>
where
    AR: ArticleRepository,
{
    repository: Arc<AR>,
}

impl<AR> ArticleService<AR>
where
    AR: ArticleRepository,
{
    /// Create a new article service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Article persistence implementation
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> ArticleServicePort for ArticleService<AR>
where
    AR: ArticleRepository,
{
    async fn create_article(
        &self,
        command: CreateArticleCommand,
        author_id: UserId,
    ) -> Result<Article, ArticleError> {
        let article = Article {
            id: ArticleId::new(),
            title: command.title,
            body: command.body,
            author_id,
            created_at: Utc::now(),
        };

        self.repository.create(article).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::article::models::ArticleTitle;

    mock! {
        pub TestArticleRepository {}

        #[async_trait]
        impl ArticleRepository for TestArticleRepository {
            async fn create(&self, article: Article) -> Result<Article, ArticleError>;
            async fn list_all(&self) -> Result<Vec<Article>, ArticleError>;
        }
    }

    #[tokio::test]
    async fn test_create_article_sets_author() {
        let mut repository = MockTestArticleRepository::new();
        let author_id = UserId::new();

        repository
            .expect_create()
            .withf(move |article| {
                article.title.as_str() == "First post" && article.author_id == author_id
            })
            .times(1)
            .returning(|article| Ok(article));

        let service = ArticleService::new(Arc::new(repository));

        let command = CreateArticleCommand {
            title: ArticleTitle::new("First post".to_string()).unwrap(),
            body: "Hello.".to_string(),
        };

        let result = service.create_article(command, author_id).await;
        assert!(result.is_ok());

        let article = result.unwrap();
        assert_eq!(article.author_id, author_id);
        assert_eq!(article.body, "Hello.");
    }

    #[tokio::test]
    async fn test_list_articles_passthrough() {
        let mut repository = MockTestArticleRepository::new();
        let author_id = UserId::new();

        let articles: Vec<Article> = (1..=2)
            .map(|i| Article {
                id: ArticleId::new(),
                title: ArticleTitle::new(format!("Post {}", i)).unwrap(),
                body: "body".to_string(),
                author_id,
                created_at: Utc::now(),
            })
            .collect();

        let returned = articles.clone();
        repository
            .expect_list_all()
            .times(1)
            .returning(move || Ok(returned.clone()));

        let service = ArticleService::new(Arc::new(repository));

        let result = service.list_articles().await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_article_database_error() {
        let mut repository = MockTestArticleRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(ArticleError::DatabaseError("connection reset".to_string())));

        let service = ArticleService::new(Arc::new(repository));

        let command = CreateArticleCommand {
            title: ArticleTitle::new("First post".to_string()).unwrap(),
            body: "Hello.".to_string(),
        };

        let result = service.create_article(command, UserId::new()).await;
        assert!(matches!(result, Err(ArticleError::DatabaseError(_))));
    }
}
