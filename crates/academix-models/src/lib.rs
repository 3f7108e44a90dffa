//! # Academix Models
//!
//! Closed enumerations underpinning Academix access control:
//!
//! - [`Role`]: the identity category assigned to an authenticated user
//! - [`Module`]: a functional area of the application gated by access control
//! - [`Permission`]: an action verb granted globally to a role
//!
//! All three serialize as snake_case slugs and parse back via [`FromStr`],
//! failing with [`ParseError`] on anything unrecognized. Because the
//! enumerations are closed, code that matches on them exhaustively cannot
//! silently ignore a newly added variant.
//!
//! [`FromStr`]: std::str::FromStr

pub mod error;
pub mod modules;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use error::ParseError;
pub use modules::Module;
pub use permissions::Permission;
pub use roles::Role;
