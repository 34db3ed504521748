use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entity {
    User,
    Post,
    Comment,
}

impl Entity {
    pub(crate) const fn table(self) -> &'static str {
        match self {
            Entity::User => "users",
            Entity::Post => "posts",
            Entity::Comment => "comments",
        }
    }

    /// Column name a child row uses to point at this entity unless a relation overrides it.
    pub(crate) const fn default_foreign_key(self) -> &'static str {
        match self {
            Entity::User => "user_id",
            Entity::Post => "post_id",
            Entity::Comment => "comment_id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationKind {
    BelongsTo,
    HasMany,
}

/// Declared link between two entities.
///
/// `foreign_key` always names a column on the child side: for `BelongsTo` that is
/// `source`, for `HasMany` that is `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Relation {
    pub(crate) name: &'static str,
    pub(crate) kind: RelationKind,
    pub(crate) source: Entity,
    pub(crate) target: Entity,
    pub(crate) foreign_key: &'static str,
}

impl Relation {
    pub(crate) const fn belongs_to(
        name: &'static str,
        source: Entity,
        target: Entity,
        foreign_key: Option<&'static str>,
    ) -> Self {
        let foreign_key = match foreign_key {
            Some(column) => column,
            None => target.default_foreign_key(),
        };
        Self {
            name,
            kind: RelationKind::BelongsTo,
            source,
            target,
            foreign_key,
        }
    }

    /// Has-many side of a belongs-to relation, resolved through the same column.
    pub(crate) const fn inverse(self, name: &'static str) -> Self {
        let kind = match self.kind {
            RelationKind::BelongsTo => RelationKind::HasMany,
            RelationKind::HasMany => RelationKind::BelongsTo,
        };
        Self {
            name,
            kind,
            source: self.target,
            target: self.source,
            foreign_key: self.foreign_key,
        }
    }
}

/// Typed set of relations a model can eagerly load.
pub(crate) trait Includable: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn relation(self) -> Relation;
}

/// Parses a comma separated include list such as `author,comments`.
pub(crate) fn parse_includes<T: Includable>(raw: Option<&str>) -> Result<Vec<T>, DomainError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut includes = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let include = T::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.relation().name == name)
            .ok_or_else(|| DomainError::UnknownRelation(name.to_string()))?;
        if !includes.contains(&include) {
            includes.push(include);
        }
    }
    Ok(includes)
}
