//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A service name as entered by the user (e.g. "GitHub").
///
/// Lookups compare the lowercase form.
pub type ServiceName = String;

/// A Fernet token: URL-safe base64 text.
pub type Token = String;

/// A transaction category (e.g. "groceries").
pub type Category = String;
