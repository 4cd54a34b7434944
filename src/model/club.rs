use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClubDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub favorites: i32,
}

/// Request body for club creation. All fields are optional at the wire level
/// so that missing keys surface as a validation error instead of a parse
/// failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateClubDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Request body for club updates. Absent fields are left untouched; a present
/// `tags` list (even an empty one) replaces the club's tag set wholesale.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateClubDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}
