//! Pieces shared by the server crate and the binary: logging setup and
//! small wire types that are not tied to the user resource.

pub mod types;
pub mod utils;
