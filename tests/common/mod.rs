//! Shared helpers for integration tests backed by a throwaway SQLite file.
#![allow(dead_code)]

use customer_registry::db::{DbPool, establish_connection_pool};
use customer_registry::repository::DieselRepository;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated database living in a temporary directory that is removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        {
            let mut pooled = pool.get().expect("get connection");
            let conn: &mut SqliteConnection = &mut pooled;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}
