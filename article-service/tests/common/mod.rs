use std::sync::Arc;
use std::sync::Mutex;

use article_service::domain::article::errors::ArticleError;
use article_service::domain::article::models::Article;
use article_service::domain::article::ports::ArticleRepository;
use article_service::domain::article::ports::ArticleServicePort;
use article_service::domain::article::service::ArticleService;
use article_service::domain::user::errors::UserError;
use article_service::domain::user::models::User;
use article_service::domain::user::models::Username;
use article_service::domain::user::ports::UserRepository;
use article_service::domain::user::ports::UserServicePort;
use article_service::domain::user::service::UserService;
use article_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port.
///
/// The router, middleware, and domain services are the production ones; only
/// the repositories are in-memory so the tests run without infrastructure.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let user_repo = Arc::new(InMemoryUserRepository::default());
        let article_repo = Arc::new(InMemoryArticleRepository::default());

        let user_service: Arc<dyn UserServicePort> =
            Arc::new(UserService::new(Arc::clone(&user_repo)));
        let article_service: Arc<dyn ArticleServicePort> =
            Arc::new(ArticleService::new(article_repo));
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(user_service, article_service, authenticator, 24);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users: user_repo,
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn register(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
    ) -> reqwest::Response {
        let mut body = serde_json::json!({
            "username": username,
            "password": password,
        });
        if let Some(email) = email {
            body["email"] = serde_json::json!(email);
        }

        self.post("/users")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign in and return the response
    pub async fn sign_in(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/sign-in")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign in and return the issued token
    pub async fn sign_in_token(&self, username: &str, password: &str) -> String {
        let response = self.sign_in(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in sign-in response")
            .to_string()
    }
}

/// In-memory stand-in for the Postgres user repository. Enforces the same
/// uniqueness rules the database constraints do.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Remove a principal out-of-band, as if deleted behind the service's back
    pub fn remove(&self, username: &str) {
        self.users
            .lock()
            .unwrap()
            .retain(|u| u.username.as_str() != username);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if let Some(email) = &user.email {
            if users.iter().any(|u| u.email.as_ref() == Some(email)) {
                return Err(UserError::EmailAlreadyExists(email.as_str().to_string()));
            }
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// In-memory stand-in for the Postgres article repository.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, article: Article) -> Result<Article, ArticleError> {
        self.articles.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn list_all(&self) -> Result<Vec<Article>, ArticleError> {
        // Newest first by creation order
        let mut articles = self.articles.lock().unwrap().clone();
        articles.reverse();
        Ok(articles)
    }
}
