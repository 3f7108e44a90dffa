//! # Academix Core
//!
//! The access policy engine for Academix.
//!
//! This crate binds each [`Role`](academix_models::Role) to its static
//! [`RolePolicy`] and exposes the pure predicates UI collaborators consult:
//!
//! - [`access`]: `has_module_access`, `has_permission`, `can_access`, and
//!   role lookup helpers
//! - [`policy`]: the compiled-in role policy table
//!
//! # Example
//!
//! ```
//! use academix_core::{can_access, has_module_access};
//! use academix_models::{Module, Permission, Role};
//!
//! assert!(has_module_access(Role::Bursar, Module::Payments));
//! assert!(can_access(Role::Bursar, Module::Payments, Permission::Approve));
//! assert!(!can_access(Role::Bursar, Module::Exams, Permission::View));
//! ```

pub mod access;
pub mod policy;

// Re-export commonly used items at crate root
pub use access::{
    can_access, has_any_permission, has_module_access, has_permission, role_description,
    role_label, role_modules, role_permissions,
};
pub use policy::{RolePolicy, policy_for};
