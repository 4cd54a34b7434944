pub use super::club::Entity as Club;
pub use super::club_tag::Entity as ClubTag;
pub use super::comment::Entity as Comment;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
pub use super::user_favorite_club::Entity as UserFavoriteClub;
