//! Repository for user favorite club links.
//!
//! The link table is the source of truth; `club.favorites` is a stored counter
//! adjusted alongside every link change in the same transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::model::favorite::{FavoriteOutcome, UnfavoriteOutcome};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite link and increments the club's favorite counter
    ///
    /// Reports `AlreadyFavorited` without touching the counter when the link
    /// exists. The link insert and the counter write commit together.
    pub async fn add(&self, user_id: i32, club_id: i32) -> Result<FavoriteOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::UserFavoriteClub::find()
            .filter(entity::user_favorite_club::Column::UserId.eq(user_id))
            .filter(entity::user_favorite_club::Column::ClubId.eq(club_id))
            .one(&txn)
            .await?;

        if existing.is_some() {
            return Ok(FavoriteOutcome::AlreadyFavorited);
        }

        entity::user_favorite_club::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            club_id: ActiveValue::Set(club_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let club = entity::prelude::Club::find_by_id(club_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Club with id {club_id} not found"
            )))?;

        entity::prelude::Club::update_many()
            .filter(entity::club::Column::Id.eq(club_id))
            .col_expr(
                entity::club::Column::Favorites,
                sea_orm::sea_query::Expr::value(club.favorites + 1),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(FavoriteOutcome::Added)
    }

    /// Removes a favorite link and decrements the club's favorite counter
    ///
    /// Reports `NotFavorited` when no link exists. The counter never goes
    /// below zero, even if it has drifted out of sync with the link table.
    pub async fn remove(&self, user_id: i32, club_id: i32) -> Result<UnfavoriteOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::UserFavoriteClub::find()
            .filter(entity::user_favorite_club::Column::UserId.eq(user_id))
            .filter(entity::user_favorite_club::Column::ClubId.eq(club_id))
            .one(&txn)
            .await?;

        let Some(link) = existing else {
            return Ok(UnfavoriteOutcome::NotFavorited);
        };

        entity::prelude::UserFavoriteClub::delete_by_id(link.id)
            .exec(&txn)
            .await?;

        let club = entity::prelude::Club::find_by_id(club_id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Club with id {club_id} not found"
            )))?;

        entity::prelude::Club::update_many()
            .filter(entity::club::Column::Id.eq(club_id))
            .col_expr(
                entity::club::Column::Favorites,
                sea_orm::sea_query::Expr::value((club.favorites - 1).max(0)),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(UnfavoriteOutcome::Removed)
    }

    /// Gets the names of all clubs a user has favorited
    pub async fn favorite_club_names(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let links = entity::prelude::UserFavoriteClub::find()
            .find_also_related(entity::prelude::Club)
            .filter(entity::user_favorite_club::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(links
            .into_iter()
            .filter_map(|(_, club)| club.map(|club| club.name))
            .collect())
    }
}
