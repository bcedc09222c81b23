//! Authentication module
//!
//! Provides argon2 password hashing and the session-bound user context.

mod password;
mod session;

pub use password::PasswordService;
pub use session::{CurrentUser, USER_ID_KEY};
