//! # Client Repository
//!
//! Database operations for the client registry.
//!
//! Clients are create-only: the API exposes listing and insertion, nothing
//! else. Name uniqueness is case-insensitive and enforced here at
//! application level (a lookup before insert), not by a constraint.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use ledger_core::Client;

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }

    /// Lists all clients ordered by name ascending.
    pub async fn list(&self) -> DbResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, address, email
            FROM clients
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    /// Looks up a client id by name, case-insensitively.
    ///
    /// Used for the duplicate check before insert: "Acme" and "ACME" are
    /// the same client.
    pub async fn find_id_by_name(&self, name: &str) -> DbResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM clients
            WHERE LOWER(name) = LOWER(?1)
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    /// Checks whether a client with the given id exists.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM clients WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Inserts a new client and returns the stored record.
    ///
    /// The caller is expected to have validated and trimmed the name and to
    /// have run the duplicate check first.
    pub async fn insert(&self, name: &str) -> DbResult<Client> {
        debug!(name, "Inserting client");

        let result = sqlx::query("INSERT INTO clients (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Client {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            address: None,
            email: None,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_ordered_by_name() {
        let db = test_db().await;
        let repo = db.clients();

        repo.insert("Zenith Corp").await.unwrap();
        repo.insert("Acme Traders").await.unwrap();

        let clients = repo.list().await.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].name, "Acme Traders");
        assert_eq!(clients[1].name, "Zenith Corp");
    }

    #[tokio::test]
    async fn test_find_id_by_name_is_case_insensitive() {
        let db = test_db().await;
        let repo = db.clients();

        let inserted = repo.insert("Acme Traders").await.unwrap();

        let found = repo.find_id_by_name("ACME TRADERS").await.unwrap();
        assert_eq!(found, Some(inserted.id));

        let missing = repo.find_id_by_name("Nobody").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_exists() {
        let db = test_db().await;
        let repo = db.clients();

        let client = repo.insert("Acme Traders").await.unwrap();
        assert!(repo.exists(client.id).await.unwrap());
        assert!(!repo.exists(client.id + 100).await.unwrap());
    }
}
