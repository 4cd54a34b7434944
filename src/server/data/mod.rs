//! Repository layer: one struct per domain, each owning its SeaORM queries.
//!
//! Entity models stay inside this layer. Multi-step writes (club plus tag
//! links, favorite link plus counter) run inside a single transaction so
//! partial updates are never observable.

pub mod club;
pub mod comment;
pub mod favorite;
pub mod tag;
pub mod user;
