//! Comment factory for creating test comment entities.
//!
//! Comments always belong to a user and a club, so both ids are required up
//! front.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test comments.
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let reply = CommentFactory::new(&db, user.id, club.id)
///     .parent_comment_id(comment.id)
///     .text("I agree")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    club_id: i32,
    parent_comment_id: Option<i32>,
    text: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Starts a factory for a top-level comment.
    ///
    /// The text defaults to `"Comment {id}"` with an auto-incremented id, the
    /// parent to `None`, and the timestamp to now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            club_id,
            parent_comment_id: None,
            text: format!("Comment {}", id),
            created_at: Utc::now(),
        }
    }

    /// Turns the comment into a reply to `parent_comment_id`.
    pub fn parent_comment_id(mut self, parent_comment_id: i32) -> Self {
        self.parent_comment_id = Some(parent_comment_id);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Overrides the creation timestamp for tests that depend on ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the comment and returns the stored row.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            club_id: ActiveValue::Set(self.club_id),
            parent_comment_id: ActiveValue::Set(self.parent_comment_id),
            text: ActiveValue::Set(self.text),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a top-level comment with default text.
pub async fn create_comment(
    db: &DatabaseConnection,
    user_id: i32,
    club_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user_id, club_id).build().await
}
