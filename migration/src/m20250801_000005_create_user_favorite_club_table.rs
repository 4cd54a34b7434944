use sea_orm_migration::{prelude::*, schema::*};

use super::m20250801_000001_create_user_table::User;
use super::m20250801_000002_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteClub::Table)
                    .if_not_exists()
                    .col(pk_auto(UserFavoriteClub::Id))
                    .col(integer(UserFavoriteClub::UserId))
                    .col(integer(UserFavoriteClub::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_club_user_id")
                            .from(UserFavoriteClub::Table, UserFavoriteClub::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_club_club_id")
                            .from(UserFavoriteClub::Table, UserFavoriteClub::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_user_favorite_club_unique")
                            .col(UserFavoriteClub::UserId)
                            .col(UserFavoriteClub::ClubId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteClub::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteClub {
    Table,
    Id,
    UserId,
    ClubId,
}
