//! Permission verb enumeration.
//!
//! Permissions are action verbs granted globally to a role: a role that
//! holds `Edit` may edit in every module it can reach. There is no
//! per-module permission matrix; module reach and verb grants combine only
//! through the conjunction in `can_access`.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An action verb granted globally to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    View,
    Create,
    Edit,
    Delete,
    Approve,
    Export,
    Print,
}

impl Permission {
    /// Every permission verb, in declaration order.
    pub const ALL: [Permission; 7] = [
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::Approve,
        Permission::Export,
        Permission::Print,
    ];

    /// The snake_case slug for this permission.
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::View => "view",
            Permission::Create => "create",
            Permission::Edit => "edit",
            Permission::Delete => "delete",
            Permission::Approve => "approve",
            Permission::Export => "export",
            Permission::Print => "print",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Permission::View),
            "create" => Ok(Permission::Create),
            "edit" => Ok(Permission::Edit),
            "delete" => Ok(Permission::Delete),
            "approve" => Ok(Permission::Approve),
            "export" => Ok(Permission::Export),
            "print" => Ok(Permission::Print),
            _ => Err(ParseError::UnknownPermission(s.to_string())),
        }
    }
}
