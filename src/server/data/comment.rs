use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{CommentWithAuthor, CommentWithClub, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment stamped with the current server time
    ///
    /// The parent id, when present, has already been validated against the
    /// target club by the service layer.
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            club_id: ActiveValue::Set(params.club_id),
            parent_comment_id: ActiveValue::Set(params.parent_comment_id),
            text: ActiveValue::Set(params.text),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets all comments on a club, oldest first, each with its author
    ///
    /// Replies are included in the flat list; thread structure is recovered
    /// from the parent id by the consumer.
    pub async fn get_by_club(&self, club_id: i32) -> Result<Vec<CommentWithAuthor>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ClubId.eq(club_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(comments
            .into_iter()
            .map(|(comment, author)| CommentWithAuthor { comment, author })
            .collect())
    }

    /// Gets all comments authored by a user across all clubs, oldest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<CommentWithClub>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .find_also_related(entity::prelude::Club)
            .filter(entity::comment::Column::UserId.eq(user_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(comments
            .into_iter()
            .map(|(comment, club)| CommentWithClub { comment, club })
            .collect())
    }
}
