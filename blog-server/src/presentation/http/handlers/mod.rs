use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::error::DomainError;

pub(crate) mod comments;
pub(crate) mod health;
pub(crate) mod posts;
pub(crate) mod users;

/// Body returned by every create endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CreatedDto {
    pub(crate) id: i64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct IncludeQuery {
    /// Comma separated relation names, e.g. `posts,comments`.
    pub(crate) include: Option<String>,
}

pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, DomainError> {
    value.ok_or(DomainError::Validation {
        field,
        message: "is required",
    })
}
