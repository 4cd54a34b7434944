use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. Never carries the password hash or the favorite
/// list; those stay on the authenticated profile endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub major: String,
    pub grad_year: i32,
}

/// Private view of a user returned to the account owner, including the names
/// of their favorited clubs.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub major: String,
    pub grad_year: i32,
    pub fav_clubs: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub school: Option<String>,
    pub major: Option<String>,
    pub grad_year: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginUserDto {
    pub username: String,
    pub password: String,
}
