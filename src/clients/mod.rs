//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod session_client;

pub use session_client::*;
