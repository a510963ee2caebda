//! Unit of Work - transaction lifecycle for write operations.
//!
//! A transaction is begun when [`UnitOfWork::transaction`] is entered,
//! committed when the closure returns `Ok`, and rolled back when it
//! returns `Err`. The connection goes back to the pool on every path.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, TransactionTrait,
};

use common::{AppError, AppResult};
use domain::User;

use crate::repository::entities::{UserActiveModel, UserEntity};

/// Boxed future returned by a transactional closure.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Transaction runner over a connection pool.
#[derive(Clone)]
pub struct UnitOfWork {
    db: DatabaseConnection,
}

impl UnitOfWork {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error;
    /// the closure's error is returned unchanged.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Repository access scoped to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    /// Insert an unsaved user; the store assigns the id.
    pub async fn insert(&self, user: User) -> AppResult<User> {
        let active_model = UserActiveModel {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(User::from(model))
    }

    /// Write both names of a persisted user.
    pub async fn save(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::internal("Cannot save a user without an id"))?;

        let active_model = UserActiveModel {
            id: Unchanged(id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
        };

        match active_model.update(self.txn).await {
            Ok(model) => Ok(User::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(AppError::from(e)),
        }
    }

    /// Delete user by ID, returning the number of rows removed
    pub async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body }))
            .await
    };
}
