use sea_orm::DatabaseConnection;

use crate::server::{
    data::club::ClubRepository,
    error::AppError,
    model::club::{Club, CreateClubParams, UpdateClubParams},
};

pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all clubs with their tags
    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        let repo = ClubRepository::new(self.db);

        let clubs = repo.get_all_with_tags().await?;

        Ok(clubs
            .into_iter()
            .map(|(club, tags)| Club::from_entity_with_tags(club, tags))
            .collect())
    }

    /// Searches clubs whose name contains the query, case-insensitively
    ///
    /// An empty query is rejected before the store is consulted; no matches is
    /// an empty list, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Club>, AppError> {
        if query.is_empty() {
            return Err(AppError::BadRequest("No name entered".to_string()));
        }

        let repo = ClubRepository::new(self.db);

        let clubs = repo.search_by_name(query).await?;

        Ok(clubs
            .into_iter()
            .map(|(club, tags)| Club::from_entity_with_tags(club, tags))
            .collect())
    }

    /// Creates a club with its tags, rejecting duplicate club codes
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, AppError> {
        let repo = ClubRepository::new(self.db);

        if repo.find_by_code(&params.code).await?.is_some() {
            return Err(AppError::Conflict("Club code is taken".to_string()));
        }

        let (club, tags) = repo.create(params).await?;

        Ok(Club::from_entity_with_tags(club, tags))
    }

    /// Updates the club with the given code
    ///
    /// The code itself is immutable and never part of the patch.
    pub async fn update(&self, code: &str, params: UpdateClubParams) -> Result<Club, AppError> {
        let repo = ClubRepository::new(self.db);

        let club = repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Club not found".to_string()))?;

        let (club, tags) = repo.update(club.id, params).await?;

        Ok(Club::from_entity_with_tags(club, tags))
    }
}
