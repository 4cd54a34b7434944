//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// Comment enriched with its author's username and club's name.
///
/// Replies carry the id of their parent comment; thread structure is
/// reconstructed by the consumer from those ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub username: String,
    pub club_name: String,
    pub parent_comment_id: Option<i32>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            username: self.username,
            club: self.club_name,
            parent_comment_id: self.parent_comment_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a comment row. Existence and same-club checks on
/// the parent happen before these are built.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub user_id: i32,
    pub club_id: i32,
    pub parent_comment_id: Option<i32>,
    pub text: String,
}

/// Comment row joined with its author row.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: entity::comment::Model,
    pub author: Option<entity::user::Model>,
}

/// Comment row joined with the club it was posted on.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithClub {
    pub comment: entity::comment::Model,
    pub club: Option<entity::club::Model>,
}
