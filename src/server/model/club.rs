//! Club domain models and parameters.
//!
//! A club aggregates its flattened tag names on top of the stored row, since
//! every read surface serializes clubs together with their tags.

use crate::{
    model::club::{ClubDto, CreateClubDto, UpdateClubDto},
    server::error::AppError,
};

/// Club with its associated tag names.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    /// Business key identifying the club, distinct from the numeric id.
    pub code: String,
    pub name: String,
    pub description: String,
    /// Stored favorites counter. Maintained by increment and decrement, not
    /// derived from the favorite link set.
    pub favorites: i32,
    pub tags: Vec<String>,
}

impl Club {
    /// Builds a club domain model from an entity row and its tag rows.
    pub fn from_entity_with_tags(
        entity: entity::club::Model,
        tags: Vec<entity::tag::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
            favorites: entity.favorites,
            tags: tags.into_iter().map(|tag| tag.name).collect(),
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
            tags: self.tags,
            favorites: self.favorites,
        }
    }
}

/// Parameters for creating a club with its initial tag set.
#[derive(Debug, Clone)]
pub struct CreateClubParams {
    pub code: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl CreateClubParams {
    /// Converts the request DTO, rejecting requests that omit any of the four
    /// required fields.
    pub fn from_dto(dto: CreateClubDto) -> Result<Self, AppError> {
        let (Some(code), Some(name), Some(description), Some(tags)) =
            (dto.code, dto.name, dto.description, dto.tags)
        else {
            return Err(AppError::BadRequest(
                "Request must contain code, name, description, and tags".to_string(),
            ));
        };

        Ok(Self {
            code,
            name,
            description,
            tags,
        })
    }
}

/// Parameters for updating a club.
///
/// `name` and `description` are applied only when present and non-empty. A
/// present `tags` list replaces the club's tag associations wholesale; `None`
/// leaves them untouched. The club code is immutable.
#[derive(Debug, Clone)]
pub struct UpdateClubParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateClubParams {
    pub fn from_dto(dto: UpdateClubDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            tags: dto.tags,
        }
    }
}
