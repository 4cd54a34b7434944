use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::user::{User, UserProfile},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's public profile, without the favorite club list
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(User::from_entity(user))
    }

    /// Gets a user's own profile, including the favorite club list
    pub async fn get_profile(&self, id: i32) -> Result<UserProfile, AppError> {
        let user = self.get_user(id).await?;

        let fav_clubs = FavoriteRepository::new(self.db)
            .favorite_club_names(id)
            .await?;

        Ok(UserProfile { user, fav_clubs })
    }
}
