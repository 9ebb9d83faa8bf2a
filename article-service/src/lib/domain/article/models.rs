use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::article::errors::ArticleTitleError;
use crate::domain::user::models::UserId;

/// Article aggregate entity.
///
/// Created by an authenticated principal; readable by anyone. Articles have
/// no update or delete lifecycle.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Article unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    /// Generate a new random article ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Article title value type
///
/// Ensures the title is non-empty and at most 256 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    const MAX_LENGTH: usize = 256;

    /// Create a new valid article title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 256 characters
    pub fn new(title: String) -> Result<Self, ArticleTitleError> {
        if title.trim().is_empty() {
            return Err(ArticleTitleError::Empty);
        }
        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ArticleTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a new article with domain types
#[derive(Debug)]
pub struct CreateArticleCommand {
    pub title: ArticleTitle,
    pub body: String,
}

impl CreateArticleCommand {
    /// Construct a new create article command.
    ///
    /// # Arguments
    /// * `title` - Validated article title
    /// * `body` - Free-form article body
    pub fn new(title: ArticleTitle, body: String) -> Self {
        Self { title, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_valid() {
        let title = ArticleTitle::new("Hello, world".to_string()).unwrap();
        assert_eq!(title.as_str(), "Hello, world");
    }

    #[test]
    fn test_title_empty() {
        assert!(matches!(
            ArticleTitle::new("   ".to_string()),
            Err(ArticleTitleError::Empty)
        ));
    }

    #[test]
    fn test_title_too_long() {
        let result = ArticleTitle::new("a".repeat(257));
        assert!(matches!(result, Err(ArticleTitleError::TooLong { .. })));
    }
}
