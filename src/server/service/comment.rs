use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, comment::CommentRepository, user::UserRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment on a club, optionally as a reply to an existing comment
    ///
    /// A reply's parent must exist and must belong to the same club as the new
    /// comment. Posting a comment touches neither tag links nor favorites.
    pub async fn add_comment(
        &self,
        author: &entity::user::Model,
        club_code: &str,
        text: Option<String>,
        parent_comment_id: Option<i32>,
    ) -> Result<Comment, AppError> {
        let club = ClubRepository::new(self.db)
            .find_by_code(club_code)
            .await?
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))?;

        let text = match text.filter(|text| !text.is_empty()) {
            Some(text) => text,
            None => return Err(AppError::BadRequest("No comment text entered".to_string())),
        };

        if let Some(parent_id) = parent_comment_id {
            let parent = CommentRepository::new(self.db)
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Parent comment not found".to_string()))?;

            if parent.club_id != club.id {
                return Err(AppError::BadRequest(
                    "Parent comment belongs to a different club".to_string(),
                ));
            }
        }

        let comment = CommentRepository::new(self.db)
            .create(CreateCommentParams {
                user_id: author.id,
                club_id: club.id,
                parent_comment_id,
                text,
            })
            .await?;

        Ok(Comment {
            id: comment.id,
            username: author.username.clone(),
            club_name: club.name,
            parent_comment_id: comment.parent_comment_id,
            text: comment.text,
            created_at: comment.created_at,
        })
    }

    /// Gets all comments on a club, including replies, oldest first
    pub async fn get_club_comments(&self, club_code: &str) -> Result<Vec<Comment>, AppError> {
        let club = ClubRepository::new(self.db)
            .find_by_code(club_code)
            .await?
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))?;

        let comments = CommentRepository::new(self.db).get_by_club(club.id).await?;

        Ok(comments
            .into_iter()
            .map(|row| Comment {
                id: row.comment.id,
                // The author is non-null by foreign key; the Option is an
                // artifact of the join shape.
                username: row.author.map(|author| author.username).unwrap_or_default(),
                club_name: club.name.clone(),
                parent_comment_id: row.comment.parent_comment_id,
                text: row.comment.text,
                created_at: row.comment.created_at,
            })
            .collect())
    }

    /// Gets all comments a user has authored across all clubs, oldest first
    pub async fn get_user_comments(&self, user_id: i32) -> Result<Vec<Comment>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let comments = CommentRepository::new(self.db).get_by_user(user_id).await?;

        Ok(comments
            .into_iter()
            .map(|row| Comment {
                id: row.comment.id,
                username: user.username.clone(),
                club_name: row.club.map(|club| club.name).unwrap_or_default(),
                parent_comment_id: row.comment.parent_comment_id,
                text: row.comment.text,
                created_at: row.comment.created_at,
            })
            .collect())
    }
}
