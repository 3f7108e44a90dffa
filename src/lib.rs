//! # Academix
//!
//! Role-based access control and navigation resolution for the Academix
//! school platform front end.
//!
//! This umbrella crate re-exports the workspace members and adds the UI
//! gating adapters:
//!
//! - [`academix_models`]: the closed `Role`, `Module`, and `Permission`
//!   enumerations
//! - [`academix_core`]: the role policy table and access predicates
//! - [`academix_nav`]: navigation configuration and the role-aware resolver
//! - [`guard`]: route guard and conditional-render gate built on the above
//!
//! The whole crate is pure and synchronous: static tables, boolean
//! predicates, and one tree walk. Session handling, HTTP, and rendering
//! live with their own collaborators and only feed a role value in.
//!
//! # Example
//!
//! ```
//! use academix::guard::{GuardOutcome, RouteGuard};
//! use academix::{Module, Permission, Role};
//!
//! // Decide whether the fees page renders for the current session.
//! let guard = RouteGuard::new()
//!     .require_module(Module::Fees)
//!     .require_permission(Permission::View);
//! assert_eq!(guard.evaluate(Some(Role::Bursar)), GuardOutcome::Allow);
//! assert_eq!(guard.evaluate(None), GuardOutcome::RedirectToLogin);
//!
//! // Build the sidebar for that role.
//! let menu = academix::resolve(Role::Bursar);
//! assert!(menu.iter().any(|item| item.label() == "Finance"));
//! ```

pub mod guard;

// Re-export the workspace surface at the crate root
pub use academix_core::{
    RolePolicy, can_access, has_any_permission, has_module_access, has_permission, policy_for,
    role_description, role_label, role_modules, role_permissions,
};
pub use academix_models::{Module, ParseError, Permission, Role};
pub use academix_nav::{
    NavItem, dashboard_widgets, resolve, sidebar_navigation, student_navigation,
};
