//! Role-aware navigation filtering.
//!
//! [`resolve`] produces the menu forest a role is allowed to see. It is a
//! stateless transform over the static configuration: call it fresh on
//! every role change, there is nothing to cache or invalidate.

use crate::config::{sidebar_navigation, student_navigation};
use crate::item::NavItem;
use academix_core::has_module_access;
use academix_models::{Module, Role};
use tracing::debug;

/// Resolve the navigation visible to `role`.
///
/// Students receive their curated flat list; every other role receives the
/// sidebar tree pruned against the access policy. The source configuration
/// is never mutated; the result is a fresh forest in the original sibling
/// order.
pub fn resolve(role: Role) -> Vec<NavItem> {
    let resolved = if role == Role::Student {
        filter_flat(student_navigation(), role)
    } else {
        filter_items(sidebar_navigation(), role)
    };
    debug!(role = %role, items = resolved.len(), "resolved navigation");
    resolved
}

/// Keep a leaf iff its module is absent or reachable by `role`.
fn leaf_visible(role: Role, module: Option<Module>) -> bool {
    match module {
        Some(module) => has_module_access(role, module),
        None => true,
    }
}

/// Recursively filter a forest for `role`.
///
/// Groups are kept only when at least one descendant leaf survives; a
/// heading with nothing under it is dropped, not emitted empty. Written for
/// arbitrary nesting even though the shipped tree is two levels deep.
fn filter_items(items: &[NavItem], role: Role) -> Vec<NavItem> {
    items
        .iter()
        .filter_map(|item| match item {
            NavItem::Leaf { module, .. } => leaf_visible(role, *module).then(|| item.clone()),
            NavItem::Group {
                label,
                icon,
                children,
            } => {
                let kept = filter_items(children, role);
                if kept.is_empty() {
                    None
                } else {
                    Some(NavItem::Group {
                        label: *label,
                        icon: *icon,
                        children: kept,
                    })
                }
            }
        })
        .collect()
}

/// Filter the flat student list: no recursion, only the per-item module
/// check.
fn filter_flat(items: &[NavItem], role: Role) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| leaf_visible(role, item.module()))
        .cloned()
        .collect()
}
