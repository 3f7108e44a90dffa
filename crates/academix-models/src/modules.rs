//! Module enumeration.
//!
//! A [`Module`] is a functional area of the application gated by access
//! control. The set is closed; registering a new module is a code change
//! that automatically extends the super admin's policy, since that policy
//! is defined over [`Module::ALL`] rather than a copied list.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A functional area of the application gated by access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    // Core
    Dashboard,
    UserManagement,
    RoleManagement,
    StudentManagement,
    StaffManagement,
    SchoolManagement,
    SystemSettings,
    SystemLogs,

    // Academic
    ClassManagement,
    SubjectManagement,
    Attendance,
    Exams,
    Results,
    Timetable,
    Assignments,
    Curriculum,

    // Support
    Medical,
    Library,
    Inventory,
    Transport,
    Hostel,

    // Finance
    Fees,
    Payments,
    Payroll,
    Budgeting,
    FinancialReports,

    // Communication
    Notices,
    Messaging,
    SmsEmail,

    // Admissions
    Admissions,
    Transfers,
    IdGeneration,

    // Security
    VisitorLogs,
    StudentCheckin,
    PickupVerification,
}

impl Module {
    /// Every module, in declaration order.
    pub const ALL: [Module; 35] = [
        Module::Dashboard,
        Module::UserManagement,
        Module::RoleManagement,
        Module::StudentManagement,
        Module::StaffManagement,
        Module::SchoolManagement,
        Module::SystemSettings,
        Module::SystemLogs,
        Module::ClassManagement,
        Module::SubjectManagement,
        Module::Attendance,
        Module::Exams,
        Module::Results,
        Module::Timetable,
        Module::Assignments,
        Module::Curriculum,
        Module::Medical,
        Module::Library,
        Module::Inventory,
        Module::Transport,
        Module::Hostel,
        Module::Fees,
        Module::Payments,
        Module::Payroll,
        Module::Budgeting,
        Module::FinancialReports,
        Module::Notices,
        Module::Messaging,
        Module::SmsEmail,
        Module::Admissions,
        Module::Transfers,
        Module::IdGeneration,
        Module::VisitorLogs,
        Module::StudentCheckin,
        Module::PickupVerification,
    ];

    /// The snake_case slug for this module.
    pub const fn as_str(self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::UserManagement => "user_management",
            Module::RoleManagement => "role_management",
            Module::StudentManagement => "student_management",
            Module::StaffManagement => "staff_management",
            Module::SchoolManagement => "school_management",
            Module::SystemSettings => "system_settings",
            Module::SystemLogs => "system_logs",
            Module::ClassManagement => "class_management",
            Module::SubjectManagement => "subject_management",
            Module::Attendance => "attendance",
            Module::Exams => "exams",
            Module::Results => "results",
            Module::Timetable => "timetable",
            Module::Assignments => "assignments",
            Module::Curriculum => "curriculum",
            Module::Medical => "medical",
            Module::Library => "library",
            Module::Inventory => "inventory",
            Module::Transport => "transport",
            Module::Hostel => "hostel",
            Module::Fees => "fees",
            Module::Payments => "payments",
            Module::Payroll => "payroll",
            Module::Budgeting => "budgeting",
            Module::FinancialReports => "financial_reports",
            Module::Notices => "notices",
            Module::Messaging => "messaging",
            Module::SmsEmail => "sms_email",
            Module::Admissions => "admissions",
            Module::Transfers => "transfers",
            Module::IdGeneration => "id_generation",
            Module::VisitorLogs => "visitor_logs",
            Module::StudentCheckin => "student_checkin",
            Module::PickupVerification => "pickup_verification",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Module {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for module in Module::ALL {
            if module.as_str() == s {
                return Ok(module);
            }
        }
        Err(ParseError::UnknownModule(s.to_string()))
    }
}
