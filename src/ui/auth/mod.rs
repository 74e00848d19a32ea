//! Session identity consumption.

pub mod context;

pub use context::{provide_auth_context, use_auth_context, AuthContext, AuthState};
