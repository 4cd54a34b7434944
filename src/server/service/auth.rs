use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, User},
    util::password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user and returns the public view
    ///
    /// Username and email must both be unused. The password is salted and
    /// hashed before it reaches the repository; the raw value is never stored.
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict("Username is taken".to_string()));
        }

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email is taken".to_string()));
        }

        let password_hash = password::hash_password(&params.password);

        let user = repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
                school: params.school,
                major: params.major,
                grad_year: params.grad_year,
            })
            .await?;

        Ok(User::from_entity(user))
    }

    /// Verifies a username and password pair
    ///
    /// An unknown username and a wrong password both surface as the same
    /// `InvalidCredentials` error.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
