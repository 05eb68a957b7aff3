//! Client credentials, token models, and authorization-session helpers.

/// Application credentials.
pub mod credentials;
/// Authorize URL construction and `state` handling.
pub mod session;
pub mod token;

pub use credentials::*;
pub use session::*;
pub use token::*;
