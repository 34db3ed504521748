use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{debug, info};

use crate::domain::relation::Entity;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const MIGRATIONS_TABLE: &str = "_sqlx_migrations";

/// Children before parents so foreign keys never block a drop or delete.
const TABLES_CHILDREN_FIRST: [Entity; 3] = [Entity::Comment, Entity::Post, Entity::User];

#[derive(Debug, Clone)]
pub(crate) struct SchemaManager {
    pool: PgPool,
    testing: bool,
}

impl SchemaManager {
    pub(crate) fn new(pool: PgPool, testing: bool) -> Self {
        Self { pool, testing }
    }

    /// Applies pending migrations. Safe to call on every start.
    pub(crate) async fn setup(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .context("failed to apply migrations")?;

        info!(migrations = MIGRATOR.iter().count(), "schema ready");
        Ok(())
    }

    /// Drops every table. Returns `false` without touching the database outside test mode.
    pub(crate) async fn teardown(&self) -> Result<bool> {
        if !self.testing {
            debug!("schema teardown skipped outside test mode");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for statement in drop_statements() {
            sqlx::query(&statement)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("failed to run `{statement}`"))?;
        }
        tx.commit().await?;

        info!("schema destroyed");
        Ok(true)
    }

    /// Deletes all rows while keeping the tables. Test mode only.
    #[cfg(test)]
    pub(crate) async fn clear(&self) -> Result<bool> {
        if !self.testing {
            debug!("schema clear skipped outside test mode");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for statement in delete_statements() {
            sqlx::query(&statement)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("failed to run `{statement}`"))?;
        }
        tx.commit().await?;

        debug!("all rows deleted");
        Ok(true)
    }
}

fn drop_statements() -> Vec<String> {
    TABLES_CHILDREN_FIRST
        .iter()
        .map(|entity| entity.table())
        .chain([MIGRATIONS_TABLE])
        .map(|table| format!("DROP TABLE IF EXISTS {table}"))
        .collect()
}

#[cfg(test)]
fn delete_statements() -> Vec<String> {
    TABLES_CHILDREN_FIRST
        .iter()
        .map(|entity| format!("DELETE FROM {}", entity.table()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{MIGRATOR, delete_statements, drop_statements};

    #[test]
    fn tables_are_dropped_children_first() {
        assert_eq!(
            drop_statements(),
            vec![
                "DROP TABLE IF EXISTS comments",
                "DROP TABLE IF EXISTS posts",
                "DROP TABLE IF EXISTS users",
                "DROP TABLE IF EXISTS _sqlx_migrations",
            ]
        );
    }

    #[test]
    fn rows_are_deleted_children_first() {
        assert_eq!(
            delete_statements(),
            vec![
                "DELETE FROM comments",
                "DELETE FROM posts",
                "DELETE FROM users",
            ]
        );
    }

    #[test]
    fn migrations_are_ordered_by_dependency() {
        let descriptions: Vec<_> = MIGRATOR
            .iter()
            .map(|migration| migration.description.to_string())
            .collect();
        assert_eq!(
            descriptions,
            vec!["create users", "create posts", "create comments"]
        );
    }
}
