use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub username: String,
    pub club: String,
    pub parent_comment_id: Option<i32>,
    pub text: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Request body for posting a comment on a club. `parent_comment_id` turns
/// the comment into a reply to an existing comment on the same club.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub text: Option<String>,
    pub parent_comment_id: Option<i32>,
}
