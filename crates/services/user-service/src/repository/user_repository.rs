//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::LikeExpr, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use super::entities::user::{self, Entity as UserEntity};
use crate::infra::UnitOfWork;
use crate::with_transaction;
use common::{AppError, AppResult, OptionExt};
use domain::{mapper, User, UserRequest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Escape character used in `LIKE` patterns built by [`UserStore::search`].
const LIKE_ESCAPE: char = '\\';

/// User repository trait for dependency injection.
///
/// Writes run in their own transaction; reads use the pool directly.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find users whose first name equals `first_name`
    async fn find_by_first_name(&self, first_name: &str) -> AppResult<Vec<User>>;

    /// Find users whose last name equals `last_name`
    async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<User>>;

    /// Create a new user; the store assigns the id
    async fn create(
        &self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<User>;

    /// Overwrite both names of an existing user
    async fn update(
        &self,
        id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<User>;

    /// Delete user by ID; deleting a missing user is not an error
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// List all users in id order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Users whose first or last name contains `term` (case-sensitive)
    async fn search(&self, term: &str) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
    uow: UnitOfWork,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        let uow = UnitOfWork::new(db.clone());
        Self { db, uow }
    }
}

/// Build a `LIKE` expression matching `term` anywhere, with wildcards escaped.
fn contains_pattern(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_first_name(&self, first_name: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::FirstName.eq(first_name))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::LastName.eq(last_name))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(
        &self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<User> {
        let user = User::new(first_name, last_name);

        with_transaction!(self.uow, |ctx| ctx.users().insert(user).await)
    }

    async fn update(
        &self,
        id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<User> {
        let request = UserRequest {
            first_name,
            last_name,
        };

        with_transaction!(self.uow, |ctx| {
            let users = ctx.users();
            let existing = users.find_by_id(id).await?;
            let updated = mapper::apply_update(existing, Some(request)).ok_or_not_found()?;
            users.save(updated).await
        })
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = with_transaction!(self.uow, |ctx| ctx.users().delete_by_id(id).await)?;

        if removed == 0 {
            tracing::debug!("No user with ID {} to delete", id);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<User>> {
        let mut query = UserEntity::find().order_by_asc(user::Column::Id);

        if !term.is_empty() {
            query = query.filter(
                Condition::any()
                    .add(user::Column::FirstName.like(contains_pattern(term)))
                    .add(user::Column::LastName.like(contains_pattern(term))),
            );
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;

        // LIKE is case-insensitive on some backends; the final match is exact.
        Ok(models
            .into_iter()
            .map(User::from)
            .filter(|u| u.matches(term))
            .collect())
    }
}

