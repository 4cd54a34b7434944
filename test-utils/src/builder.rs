use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for the per-test database environment.
///
/// Each `with_table` call schedules one entity's CREATE TABLE statement;
/// `build` opens a fresh in-memory SQLite database and runs them in order.
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Club, Tag};
///
/// let test = TestBuilder::new()
///     .with_table(Club)
///     .with_table(Tag)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registers `entity`'s table for creation.
    ///
    /// Order matters: tables with foreign keys go after the tables they
    /// reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Registers the whole club review schema in dependency order.
    ///
    /// Most tests want all of it, since clubs, tags, favorites, and comments
    /// link to each other.
    pub fn with_club_tables(self) -> Self {
        self.with_table(User)
            .with_table(Club)
            .with_table(Tag)
            .with_table(ClubTag)
            .with_table(UserFavoriteClub)
            .with_table(Comment)
    }

    /// Opens the in-memory database and creates the registered tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::create(self.tables).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
