//! Repository for club database operations.
//!
//! Clubs own their tag links: tag get-or-create and club_tag junction rows are
//! written here, inside the same transaction as the club row itself. Tag rows
//! orphaned by a tag replacement are left in place.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, TransactionTrait,
};
use std::collections::HashSet;

use crate::server::model::club::{CreateClubParams, UpdateClubParams};

pub struct ClubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a club with its tag links in one transaction and returns it with its tags
    pub async fn create(
        &self,
        params: CreateClubParams,
    ) -> Result<(entity::club::Model, Vec<entity::tag::Model>), DbErr> {
        let txn = self.db.begin().await?;

        let club = entity::club::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            favorites: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        self.link_tags(&txn, club.id, params.tags).await?;

        txn.commit().await?;

        let tags = club.find_related(entity::prelude::Tag).all(self.db).await?;

        Ok((club, tags))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::club::Model>, DbErr> {
        entity::prelude::Club::find()
            .filter(entity::club::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Gets all clubs with their tags in storage order
    pub async fn get_all_with_tags(
        &self,
    ) -> Result<Vec<(entity::club::Model, Vec<entity::tag::Model>)>, DbErr> {
        entity::prelude::Club::find()
            .find_with_related(entity::prelude::Tag)
            .all(self.db)
            .await
    }

    /// Gets all clubs whose name contains the query, case-insensitively
    pub async fn search_by_name(
        &self,
        query: &str,
    ) -> Result<Vec<(entity::club::Model, Vec<entity::tag::Model>)>, DbErr> {
        let query = query.to_lowercase();
        let clubs = self.get_all_with_tags().await?;

        Ok(clubs
            .into_iter()
            .filter(|(club, _)| club.name.to_lowercase().contains(&query))
            .collect())
    }

    /// Applies a partial update to a club and returns it with its tags
    ///
    /// Name and description are only written when present and non-empty in the
    /// params. A tag list replaces the club's tag set wholesale; an empty list
    /// clears it. The club code is never updated.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateClubParams,
    ) -> Result<(entity::club::Model, Vec<entity::tag::Model>), DbErr> {
        let txn = self.db.begin().await?;

        let club = entity::prelude::Club::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Club with id {id} not found")))?;

        let name = params
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| club.name.clone());
        let description = params
            .description
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| club.description.clone());

        let mut active_model: entity::club::ActiveModel = club.into();
        active_model.name = ActiveValue::Set(name);
        active_model.description = ActiveValue::Set(description);
        let club = active_model.update(&txn).await?;

        if let Some(tag_names) = params.tags {
            entity::prelude::ClubTag::delete_many()
                .filter(entity::club_tag::Column::ClubId.eq(id))
                .exec(&txn)
                .await?;

            self.link_tags(&txn, id, tag_names).await?;
        }

        txn.commit().await?;

        let tags = club.find_related(entity::prelude::Tag).all(self.db).await?;

        Ok((club, tags))
    }

    /// Gets or creates each tag by name and links it to the club
    ///
    /// Names are processed in input order; repeated names are linked once.
    async fn link_tags<C: ConnectionTrait>(
        &self,
        conn: &C,
        club_id: i32,
        tag_names: Vec<String>,
    ) -> Result<(), DbErr> {
        let mut seen: HashSet<String> = HashSet::new();

        for tag_name in tag_names {
            if !seen.insert(tag_name.clone()) {
                continue;
            }

            let tag = entity::prelude::Tag::insert(entity::tag::ActiveModel {
                name: ActiveValue::Set(tag_name),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(entity::tag::Column::Name)
                    .update_columns([entity::tag::Column::Name])
                    .to_owned(),
            )
            .exec_with_returning(conn)
            .await?;

            entity::club_tag::ActiveModel {
                club_id: ActiveValue::Set(club_id),
                tag_id: ActiveValue::Set(tag.id),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }

        Ok(())
    }
}
