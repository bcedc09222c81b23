//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the hashing primitive.

pub mod auth;

pub use auth::AuthService;
