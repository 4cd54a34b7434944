//! Shared test utilities for the club review backend.
//!
//! Tests build their environment through [`builder::TestBuilder`], which opens
//! an in-memory SQLite database holding whichever entity tables the test
//! needs, and seed rows through the [`factory`] helpers.
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn reads_clubs() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_club_tables().build().await?;
//!
//!     let club = test_utils::factory::create_club(&test.db).await?;
//!     // exercise the code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
