//! Request Builders
//!
//! Pure construction of request descriptors. Builders are deterministic
//! functions of the cached endpoint metadata, the client configuration and
//! the caller-supplied parameters; they never perform I/O.

pub mod api;
pub mod authorize;
pub mod token;

pub use authorize::build_authorization_url;
pub use token::{build_biometric_setup_request, build_token_request};
