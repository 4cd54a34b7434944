//! Factory methods for creating test data.
//!
//! Every entity gets a `Factory` builder for fine-grained control plus a
//! `create_*` shortcut that inserts a row with sensible defaults. Factories
//! for rows that need parents create those parents on the fly, so one call
//! yields a fully linked record.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Defaults
//! let user = factory::user::create_user(&db).await?;
//! let club = factory::club::create_club(&db).await?;
//!
//! // A club with tags already linked
//! let (club, tags) = factory::helpers::create_club_with_tags(&db, &["sports"]).await?;
//!
//! // Custom fields through the builder
//! let user = factory::user::UserFactory::new(&db)
//!     .username("josh")
//!     .email("josh@upenn.edu")
//!     .build()
//!     .await?;
//!
//! // Or the one-off shortcuts
//! let club = factory::create_club_with_code(&db, "pppjo").await?;
//! let tag = factory::create_tag_with_name(&db, "Undergraduate").await?;
//! ```

pub mod club;
pub mod comment;
pub mod helpers;
pub mod tag;
pub mod user;

pub use club::{create_club, create_club_with_code};
pub use comment::create_comment;
pub use tag::{create_tag, create_tag_with_name};
pub use user::{create_user, create_user_with_username};
