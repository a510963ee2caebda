//! User service - Handles user-related business logic.
//!
//! Sits between the HTTP handlers and the repository: turns missing
//! records into `NotFound` and leaves an audit trail in the logs.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppResult, OptionExt};
use domain::{User, UserRequest};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// List users whose names equal the given values.
    ///
    /// With no filter this is [`UserService::list_users`].
    async fn find_users(
        &self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<Vec<User>>;

    /// Users whose first or last name contains `term`
    async fn search_users(&self, term: &str) -> AppResult<Vec<User>>;

    /// Create a new user from a request
    async fn create_user(&self, request: UserRequest) -> AppResult<User>;

    /// Replace both names of an existing user
    async fn update_user(&self, id: i64, request: UserRequest) -> AppResult<User>;

    /// Delete user (no error if it does not exist)
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        info!("Fetching user with ID: {}", id);
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        info!("Fetching all users");
        self.repo.list().await
    }

    async fn find_users(
        &self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<Vec<User>> {
        match (first_name, last_name) {
            (None, None) => self.list_users().await,
            (Some(first_name), None) => {
                info!("Fetching users with first name: {}", first_name);
                self.repo.find_by_first_name(&first_name).await
            }
            (None, Some(last_name)) => {
                info!("Fetching users with last name: {}", last_name);
                self.repo.find_by_last_name(&last_name).await
            }
            (Some(first_name), Some(last_name)) => {
                info!("Fetching users named: {} {}", first_name, last_name);
                let users = self.repo.find_by_first_name(&first_name).await?;
                Ok(users
                    .into_iter()
                    .filter(|u| u.last_name.as_deref() == Some(last_name.as_str()))
                    .collect())
            }
        }
    }

    async fn search_users(&self, term: &str) -> AppResult<Vec<User>> {
        info!("Searching users with term: {:?}", term);
        self.repo.search(term).await
    }

    async fn create_user(&self, request: UserRequest) -> AppResult<User> {
        info!("Saving user with request: {:?}", request);
        let saved = self
            .repo
            .create(request.first_name, request.last_name)
            .await?;
        info!("User saved with ID: {:?}", saved.id);
        Ok(saved)
    }

    async fn update_user(&self, id: i64, request: UserRequest) -> AppResult<User> {
        info!("Updating user with ID: {} and request: {:?}", id, request);
        let updated = self
            .repo
            .update(id, request.first_name, request.last_name)
            .await?;
        info!("User updated with ID: {:?}", updated.id);
        Ok(updated)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        info!("Deleting user with ID: {}", id);
        self.repo.delete(id).await?;
        info!("User deleted with ID: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use common::AppError;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockUserRepository;

    fn stored(id: i64, first: &str, last: &str) -> User {
        User {
            id: Some(id),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1000))
            .returning(|id| Ok(Some(stored(id, "Alice", "Smith"))));

        let user = service(repo).get_user(1000).await.unwrap();

        assert_eq!(user.id, Some(1000));
        assert_eq!(user.first_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_user(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_create_user_passes_both_names() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(Some("John".to_string())), eq(Some("Doe".to_string())))
            .times(1)
            .returning(|first, last| {
                Ok(User {
                    id: Some(1),
                    first_name: first,
                    last_name: last,
                })
            });

        let user = service(repo)
            .create_user(UserRequest::new("John", "Doe"))
            .await
            .unwrap();

        assert_eq!(user.id, Some(1));
        assert_eq!(user.first_name.as_deref(), Some("John"));
        assert_eq!(user.last_name.as_deref(), Some("Doe"));
    }

    #[tokio::test]
    async fn test_create_user_accepts_absent_names() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(None::<String>), eq(None::<String>))
            .returning(|_, _| Ok(User { id: Some(2), ..User::default() }));

        let user = service(repo)
            .create_user(UserRequest::default())
            .await
            .unwrap();

        assert_eq!(user.id, Some(2));
        assert_eq!(user.first_name, None);
    }

    #[tokio::test]
    async fn test_update_user_not_found_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_, _, _| Err(AppError::NotFound));

        let result = service(repo)
            .update_user(9999, UserRequest::new("Updated", "User"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(1001)).times(1).returning(|_| Ok(()));

        assert!(service(repo).delete_user(1001).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_users_without_filter_lists_all() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                stored(1000, "Alice", "Smith"),
                stored(1001, "Bob", "Jones"),
            ])
        });
        repo.expect_find_by_first_name().never();

        let users = service(repo).find_users(None, None).await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_find_users_by_both_names() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_first_name().times(1).returning(|first| {
            Ok(vec![
                stored(1000, first, "Smith"),
                stored(1003, first, "Brown"),
            ])
        });

        let users = service(repo)
            .find_users(Some("Alice".to_string()), Some("Brown".to_string()))
            .await
            .unwrap();

        assert_eq!(users, vec![stored(1003, "Alice", "Brown")]);
    }

    #[tokio::test]
    async fn test_find_users_by_last_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_last_name()
            .times(1)
            .returning(|last| Ok(vec![stored(1000, "Alice", last)]));

        let users = service(repo)
            .find_users(None, Some("Smith".to_string()))
            .await
            .unwrap();

        assert_eq!(users[0].last_name.as_deref(), Some("Smith"));
    }
}
