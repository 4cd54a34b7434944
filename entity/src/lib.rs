pub mod prelude;

pub mod club;
pub mod club_tag;
pub mod comment;
pub mod tag;
pub mod user;
pub mod user_favorite_club;
