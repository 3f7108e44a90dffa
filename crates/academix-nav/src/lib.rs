//! # Academix Nav
//!
//! Static navigation configuration and role-aware menu resolution.
//!
//! - [`item`]: the [`NavItem`] leaf/group node type
//! - [`config`]: the sidebar tree and the student flat list
//! - [`resolver`]: [`resolve`], which prunes the configuration for a role
//!   by delegating every leaf decision to `academix-core`
//! - [`widgets`]: per-role dashboard widget identifiers
//!
//! # Example
//!
//! ```
//! use academix_models::Role;
//!
//! let menu = academix_nav::resolve(Role::Librarian);
//! let labels: Vec<_> = menu.iter().map(|item| item.label()).collect();
//! assert_eq!(labels, ["Dashboard", "Support Services"]);
//! ```

pub mod config;
pub mod item;
pub mod resolver;
pub mod widgets;

// Re-export commonly used items at crate root
pub use config::{sidebar_navigation, student_navigation};
pub use item::NavItem;
pub use resolver::resolve;
pub use widgets::dashboard_widgets;
