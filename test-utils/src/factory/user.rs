//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test users.
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("josh")
///     .email("josh@upenn.edu")
///     .grad_year(2026)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password_hash: String,
    grad_year: i32,
}

impl<'a> UserFactory<'a> {
    /// Starts a factory with unique defaults.
    ///
    /// Username, email, and password hash embed an auto-incremented id
    /// (`user{id}`, `user{id}@example.com`, `hash{id}`), so repeated calls
    /// never collide on the unique columns. Graduation year defaults to 2027
    /// and the profile fields get fixed placeholder values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password_hash: format!("hash{}", id),
            grad_year: 2027,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Stored as-is; only tests that verify passwords need a real hash here.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn grad_year(mut self, grad_year: i32) -> Self {
        self.grad_year = grad_year;
        self
    }

    /// Inserts the user and returns the stored row.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("User".to_string()),
            school: ActiveValue::Set("Engineering".to_string()),
            major: ActiveValue::Set("Computer Science".to_string()),
            grad_year: ActiveValue::Set(self.grad_year),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a user with all defaults.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Inserts a user with the given username and defaults for everything else.
pub async fn create_user_with_username(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).username(username).build().await
}
