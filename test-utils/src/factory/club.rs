//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test clubs.
///
/// ```rust,ignore
/// use test_utils::factory::club::ClubFactory;
///
/// let club = ClubFactory::new(&db)
///     .code("pppjo")
///     .name("Penn Pre-Professional Juggling Organization")
///     .build()
///     .await?;
/// ```
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    description: String,
    favorites: i32,
}

impl<'a> ClubFactory<'a> {
    /// Starts a factory with unique defaults.
    ///
    /// Code and name embed an auto-incremented id (`club{id}`, `Club {id}`),
    /// the description is a fixed placeholder, and the favorites counter
    /// starts at zero.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("club{}", id),
            name: format!("Club {}", id),
            description: "A club for testing.".to_string(),
            favorites: 0,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Seeds the stored favorites counter directly, so tests can set up drift
    /// against the favorite link table.
    pub fn favorites(mut self, favorites: i32) -> Self {
        self.favorites = favorites;
        self
    }

    /// Inserts the club and returns the stored row.
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            favorites: ActiveValue::Set(self.favorites),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a club with all defaults.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}

/// Inserts a club with the given code and defaults for everything else.
pub async fn create_club_with_code(
    db: &DatabaseConnection,
    code: impl Into<String>,
) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).code(code).build().await
}
