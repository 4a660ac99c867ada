//! Request/response middleware.
//!
//! - [`error_envelope::stamp_error_path`] -- Fills the request path into error bodies.

pub mod error_envelope;
