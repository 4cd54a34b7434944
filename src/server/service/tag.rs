use sea_orm::DatabaseConnection;

use crate::server::{data::tag::TagRepository, error::AppError, model::tag::TagClubCount};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the number of clubs linked to every tag
    ///
    /// Tags that no club references any longer are reported with a count of 0.
    pub async fn get_club_counts(&self) -> Result<Vec<TagClubCount>, AppError> {
        let repo = TagRepository::new(self.db);

        let tags = repo.get_all_with_clubs().await?;

        Ok(tags
            .into_iter()
            .map(|(tag, clubs)| TagClubCount {
                tag_name: tag.name,
                num_clubs: clubs.len() as u64,
            })
            .collect())
    }
}
