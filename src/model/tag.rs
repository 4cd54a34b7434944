use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagClubCountDto {
    pub tag_name: String,
    pub num_clubs: u64,
}
