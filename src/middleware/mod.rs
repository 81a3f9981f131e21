// ABOUTME: HTTP middleware for session resolution
// ABOUTME: Resolves the session cookie into a SessionId request extension

/// Session cookie middleware
pub mod session;

pub use session::{session_cookie, session_middleware};
