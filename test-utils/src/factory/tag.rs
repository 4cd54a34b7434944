//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test tags.
///
/// ```rust,ignore
/// use test_utils::factory::tag::TagFactory;
///
/// let tag = TagFactory::new(&db).name("Undergraduate").build().await?;
/// ```
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> TagFactory<'a> {
    /// Starts a factory with a unique default name (`tag{id}`).
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("tag{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Inserts the tag and returns the stored row.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a tag with a generated unique name.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}

/// Inserts a tag with the given name.
pub async fn create_tag_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).name(name).build().await
}
