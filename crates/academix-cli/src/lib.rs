//! # Academix CLI
//!
//! Inspection tools for the Academix access policy and navigation tables.
//!
//! This library crate provides the reporting functionality used by the CLI
//! binary.
//!
//! ## Usage
//!
//! ```ignore
//! use academix_cli::report;
//! use academix_models::Role;
//!
//! report::print_roles();
//! report::print_navigation(Role::Teacher, false)?;
//! ```

pub mod report;
