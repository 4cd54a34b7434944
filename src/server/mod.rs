//! HTTP backend for the club review API.
//!
//! Everything under `server` follows the same layered shape:
//!
//! - `controller/` - axum handlers: decode the request, resolve the session
//!   principal where a route needs one, convert between DTOs and domain models
//! - `service/` - business rules, validation, and orchestration
//! - `data/` - SeaORM queries; multi-step writes stay transactional here
//! - `model/` - domain models and per-operation parameter structs
//! - `error/` - `AppError` and its mapping onto HTTP responses
//! - `middleware/` - the typed session wrapper and the login guard
//!
//! `config`, `state`, `startup`, and `router` wire the stack together at
//! boot, and `util` holds the password hashing helpers.
//!
//! A request enters through the router, hits a controller, and walks down
//! through service and data; the resulting domain model is converted back
//! into a DTO on the way out.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
