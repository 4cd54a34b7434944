use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub major: String,
    pub grad_year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_club::Entity")]
    UserFavoriteClub,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user_favorite_club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteClub.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_club::Relation::Club.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_club::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
