use sea_orm::DatabaseConnection;

use crate::server::{
    data::{club::ClubRepository, favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::favorite::{FavoriteOutcome, UnfavoriteOutcome},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a club to a user's favorites
    ///
    /// Favoriting an already-favorited club is a successful no-op.
    pub async fn favorite(&self, user_id: i32, club_code: &str) -> Result<FavoriteOutcome, AppError> {
        let (user, club) = self.find_user_and_club(user_id, club_code).await?;

        let outcome = FavoriteRepository::new(self.db).add(user.id, club.id).await?;

        Ok(outcome)
    }

    /// Removes a club from a user's favorites
    ///
    /// Unfavoriting a club that is not favorited is a successful no-op.
    pub async fn unfavorite(
        &self,
        user_id: i32,
        club_code: &str,
    ) -> Result<UnfavoriteOutcome, AppError> {
        let (user, club) = self.find_user_and_club(user_id, club_code).await?;

        let outcome = FavoriteRepository::new(self.db)
            .remove(user.id, club.id)
            .await?;

        Ok(outcome)
    }

    async fn find_user_and_club(
        &self,
        user_id: i32,
        club_code: &str,
    ) -> Result<(entity::user::Model, entity::club::Model), AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        let club = ClubRepository::new(self.db).find_by_code(club_code).await?;

        match (user, club) {
            (Some(user), Some(club)) => Ok((user, club)),
            _ => Err(AppError::NotFound("User or Club not found".to_string())),
        }
    }
}
