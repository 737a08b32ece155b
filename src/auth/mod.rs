//! Authentication types.
//!
//! The Admin REST API authenticates with a per-shop access token, carried by
//! [`Session`]. Obtaining that token (OAuth, custom app install) happens
//! outside this crate.

pub mod session;

pub use session::Session;
