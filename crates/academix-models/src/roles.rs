//! Role enumeration and display labels.
//!
//! A user holds exactly one [`Role`] at a time, assigned by the session
//! layer after authentication. The set of roles is closed: adding a role is
//! a code change, and every `match` on [`Role`] is checked for
//! exhaustiveness by the compiler, so no role can slip through the access
//! policy table unaccounted for.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An identity category assigned to an authenticated user.
///
/// Serialized as the snake_case slug used on the wire by the session
/// collaborator (e.g. `"super_admin"`, `"it_support"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Teacher,
    Student,
    Parent,
    Nurse,
    Librarian,
    Bursar,
    InventoryOfficer,
    Registrar,
    AcademicHead,
    ExaminationOfficer,
    ItSupport,
    SecurityOfficer,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 14] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Teacher,
        Role::Student,
        Role::Parent,
        Role::Nurse,
        Role::Librarian,
        Role::Bursar,
        Role::InventoryOfficer,
        Role::Registrar,
        Role::AcademicHead,
        Role::ExaminationOfficer,
        Role::ItSupport,
        Role::SecurityOfficer,
    ];

    /// The snake_case slug for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Nurse => "nurse",
            Role::Librarian => "librarian",
            Role::Bursar => "bursar",
            Role::InventoryOfficer => "inventory_officer",
            Role::Registrar => "registrar",
            Role::AcademicHead => "academic_head",
            Role::ExaminationOfficer => "examination_officer",
            Role::ItSupport => "it_support",
            Role::SecurityOfficer => "security_officer",
        }
    }

    /// The human-readable label shown in the UI.
    pub const fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "School Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Nurse => "School Nurse",
            Role::Librarian => "Librarian",
            Role::Bursar => "Bursar",
            Role::InventoryOfficer => "Inventory Officer",
            Role::Registrar => "Registrar",
            Role::AcademicHead => "Academic Head / HOD",
            Role::ExaminationOfficer => "Examination Officer",
            Role::ItSupport => "IT Support",
            Role::SecurityOfficer => "Security Officer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            "parent" => Ok(Role::Parent),
            "nurse" => Ok(Role::Nurse),
            "librarian" => Ok(Role::Librarian),
            "bursar" => Ok(Role::Bursar),
            "inventory_officer" => Ok(Role::InventoryOfficer),
            "registrar" => Ok(Role::Registrar),
            "academic_head" => Ok(Role::AcademicHead),
            "examination_officer" => Ok(Role::ExaminationOfficer),
            "it_support" => Ok(Role::ItSupport),
            "security_officer" => Ok(Role::SecurityOfficer),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}
