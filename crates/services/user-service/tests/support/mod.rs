//! Shared helpers for integration tests (in-memory SQLite).

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ActiveValue::Set};

use common::DatabaseConfig;
use user_service_lib::infra::Database;
use user_service_lib::repository::entities::UserActiveModel;

/// Fresh in-memory database with the `users` table created.
///
/// A single pooled connection keeps the in-memory database alive.
pub async fn test_database() -> Arc<Database> {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };

    Arc::new(Database::connect(&config).await.unwrap())
}

/// Insert the reference users 1000 (Alice Smith), 1001 (Bob Jones) and 1002 (Carol White).
pub async fn seed_users(db: &Database) {
    let rows = [
        (1000, "Alice", "Smith"),
        (1001, "Bob", "Jones"),
        (1002, "Carol", "White"),
    ];

    for (id, first, last) in rows {
        UserActiveModel {
            id: Set(id),
            first_name: Set(Some(first.to_string())),
            last_name: Set(Some(last.to_string())),
        }
        .insert(db.connection())
        .await
        .unwrap();
    }
}
