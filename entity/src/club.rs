use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub favorites: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club_tag::Entity")]
    ClubTag,
    #[sea_orm(has_many = "super::user_favorite_club::Entity")]
    UserFavoriteClub,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::club_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubTag.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::club_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::club_tag::Relation::Club.def().rev())
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_club::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_club::Relation::Club.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
