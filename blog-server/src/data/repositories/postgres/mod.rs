use crate::domain::error::DomainError;
use crate::domain::relation::{Entity, Relation, RelationKind};

pub(crate) mod comment_repository;
pub(crate) mod post_repository;
pub(crate) mod user_repository;

const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Builds the reverse lookup for a has-many relation:
/// `SELECT <columns> FROM <target> WHERE <foreign_key> = $1 ORDER BY id`.
pub(crate) fn has_many_query(
    relation: Relation,
    expected_target: Entity,
    columns: &str,
) -> Result<String, DomainError> {
    if relation.kind != RelationKind::HasMany || relation.target != expected_target {
        return Err(DomainError::Unexpected(format!(
            "relation '{}' does not load rows from {}",
            relation.name,
            expected_target.table()
        )));
    }

    Ok(format!(
        "SELECT {columns} FROM {} WHERE {} = $1 ORDER BY id",
        expected_target.table(),
        relation.foreign_key
    ))
}

pub(crate) fn map_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
    {
        let constraint = db_err.constraint().unwrap_or("unknown");
        return DomainError::Unexpected(format!("foreign key violation: {constraint}"));
    }
    DomainError::Unexpected(err.to_string())
}
