//! Navigation item type.

use academix_models::Module;
use serde::Serialize;

/// A node in the navigation menu.
///
/// A node is either a routable leaf or a group of children; the variant
/// split makes a node with both a path and children unrepresentable, which
/// is exactly the precedence rule the filter would otherwise have to apply
/// (children win). Groups carry no module of their own: they become visible
/// or invisible purely through their children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    /// A routable menu entry, optionally gated by a module.
    Leaf {
        label: &'static str,
        path: &'static str,
        icon: &'static str,
        /// `None` means the entry is visible to every authenticated role.
        #[serde(skip_serializing_if = "Option::is_none")]
        module: Option<Module>,
    },
    /// A heading containing child entries.
    Group {
        label: &'static str,
        icon: &'static str,
        children: Vec<NavItem>,
    },
}

impl NavItem {
    /// A leaf gated by `module`.
    pub fn leaf(
        label: &'static str,
        path: &'static str,
        icon: &'static str,
        module: Module,
    ) -> Self {
        NavItem::Leaf {
            label,
            path,
            icon,
            module: Some(module),
        }
    }

    /// A leaf visible to every authenticated role.
    pub fn open_leaf(label: &'static str, path: &'static str, icon: &'static str) -> Self {
        NavItem::Leaf {
            label,
            path,
            icon,
            module: None,
        }
    }

    /// A group heading over `children`.
    pub fn group(label: &'static str, icon: &'static str, children: Vec<NavItem>) -> Self {
        NavItem::Group {
            label,
            icon,
            children,
        }
    }

    /// The display label of this node.
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Leaf { label, .. } => label,
            NavItem::Group { label, .. } => label,
        }
    }

    /// The module gating this node, if any. Groups are never gated directly.
    pub fn module(&self) -> Option<Module> {
        match self {
            NavItem::Leaf { module, .. } => *module,
            NavItem::Group { .. } => None,
        }
    }
}
