//! Authentication module
//!
//! The `SessionManager` signs in once per run; the resulting `Session`
//! stamps its token on every later request. There is no refresh.

mod session;
mod types;

pub use session::{SessionManager, SIGN_IN_PATH};
pub use types::{Credentials, Session};

#[cfg(test)]
mod tests;
