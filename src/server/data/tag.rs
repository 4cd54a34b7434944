use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every tag with the clubs linked to it
    ///
    /// Tags with no linked clubs are included with an empty club list.
    pub async fn get_all_with_clubs(
        &self,
    ) -> Result<Vec<(entity::tag::Model, Vec<entity::club::Model>)>, DbErr> {
        entity::prelude::Tag::find()
            .find_with_related(entity::prelude::Club)
            .all(self.db)
            .await
    }
}
