//! User domain models and parameters.
//!
//! The domain `User` drops the stored password hash at the conversion
//! boundary, so nothing above the data layer can serialize it by accident.

use crate::{
    model::user::{RegisterUserDto, UserDto, UserProfileDto},
    server::error::AppError,
};

/// User profile without the credential secret.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub major: String,
    pub grad_year: i32,
}

impl User {
    /// Converts an entity model to a user domain model, discarding the
    /// password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            school: entity.school,
            major: entity.major,
            grad_year: entity.grad_year,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            school: self.school,
            major: self.major,
            grad_year: self.grad_year,
        }
    }
}

/// Private view of a user including the names of their favorited clubs.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub fav_clubs: Vec<String>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.user.id,
            username: self.user.username,
            email: self.user.email,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            school: self.user.school,
            major: self.user.major,
            grad_year: self.user.grad_year,
            fav_clubs: self.fav_clubs,
        }
    }
}

/// Parameters for registering a user, carrying the raw password.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub major: String,
    pub grad_year: i32,
}

impl RegisterUserParams {
    /// Converts the request DTO.
    ///
    /// Username, email, and password must all be present and non-empty, and
    /// the graduation year must be a positive integer. The remaining profile
    /// fields default to empty strings when omitted.
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let (Some(username), Some(email), Some(password)) = (dto.username, dto.email, dto.password)
        else {
            return Err(AppError::BadRequest(
                "Request must contain username, email, and password".to_string(),
            ));
        };

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Request must contain username, email, and password".to_string(),
            ));
        }

        let grad_year = match dto.grad_year {
            Some(grad_year) if grad_year > 0 => grad_year,
            _ => {
                return Err(AppError::BadRequest(
                    "Graduation year must be a positive integer".to_string(),
                ))
            }
        };

        Ok(Self {
            username,
            email,
            password,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            school: dto.school.unwrap_or_default(),
            major: dto.major.unwrap_or_default(),
            grad_year,
        })
    }
}

/// Parameters for inserting a new user row. The password arrives here already
/// hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub major: String,
    pub grad_year: i32,
}
