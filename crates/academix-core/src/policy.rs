//! The static role policy table.
//!
//! Each role maps to exactly one [`RolePolicy`]: the modules it can reach,
//! the permission verbs it holds across all of those modules, and a short
//! description for administrative UIs. The table is process-wide constant
//! data; nothing mutates it after startup.
//!
//! [`policy_for`] is an exhaustive match over [`Role`], so a newly added
//! role cannot compile without a policy. The super admin policy references
//! [`Module::ALL`] and [`Permission::ALL`] directly rather than a copied
//! list, so extending either enumeration extends super admin access with no
//! further change here.

use academix_models::{Module, Permission, Role};

/// The access grant for a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePolicy {
    /// Modules this role can reach.
    pub modules: &'static [Module],
    /// Permission verbs this role holds, uniformly across its modules.
    pub permissions: &'static [Permission],
    /// Human-readable summary of the role's purpose.
    pub description: &'static str,
}

/// Full system access - System owner / Head office.
static SUPER_ADMIN: RolePolicy = RolePolicy {
    modules: &Module::ALL,
    permissions: &Permission::ALL,
    description: "Full system access - System owner / Head office",
};

static ADMIN: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::UserManagement,
        Module::StudentManagement,
        Module::StaffManagement,
        Module::ClassManagement,
        Module::SubjectManagement,
        Module::Attendance,
        Module::Exams,
        Module::Results,
        Module::Timetable,
        Module::Assignments,
        Module::Admissions,
        Module::Fees,
        Module::Payments,
        Module::Notices,
        Module::Messaging,
        Module::Medical,
        Module::Library,
        Module::Inventory,
        Module::Transport,
        Module::Hostel,
    ],
    permissions: &Permission::ALL,
    description: "School Admin / Principal - Manages school operations",
};

static TEACHER: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Attendance,
        Module::Exams,
        Module::Results,
        Module::Assignments,
        Module::Timetable,
        Module::Notices,
        Module::Messaging,
        Module::ClassManagement,
    ],
    permissions: &[Permission::View, Permission::Create, Permission::Edit],
    description: "Manages classes, attendance, marks, and assignments",
};

static STUDENT: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Attendance,
        Module::Results,
        Module::Timetable,
        Module::Assignments,
        Module::Notices,
        Module::Library,
        Module::Fees,
    ],
    permissions: &[Permission::View],
    description: "View-only access to personal academics",
};

static PARENT: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Attendance,
        Module::Results,
        Module::Fees,
        Module::Payments,
        Module::Notices,
        Module::Messaging,
    ],
    permissions: &[Permission::View],
    description: "View child academics and communicate with school",
};

static NURSE: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Medical,
        Module::StudentManagement,
    ],
    permissions: &[
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Print,
    ],
    description: "Manages student medical records and clinic visits",
};

static LIBRARIAN: RolePolicy = RolePolicy {
    modules: &[Module::Dashboard, Module::Library],
    permissions: &[
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::Print,
    ],
    description: "Manages library books and transactions",
};

static BURSAR: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Fees,
        Module::Payments,
        Module::Payroll,
        Module::Budgeting,
        Module::FinancialReports,
    ],
    permissions: &[
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Approve,
        Permission::Export,
        Permission::Print,
    ],
    description: "Manages school finances, fees, and payments",
};

static INVENTORY_OFFICER: RolePolicy = RolePolicy {
    modules: &[Module::Dashboard, Module::Inventory],
    permissions: &[
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Delete,
        Permission::Export,
    ],
    description: "Manages school assets and inventory",
};

static REGISTRAR: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Admissions,
        Module::Transfers,
        Module::IdGeneration,
        Module::StudentManagement,
    ],
    permissions: &[
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Approve,
        Permission::Print,
    ],
    description: "Handles admissions, transfers, and student records",
};

static ACADEMIC_HEAD: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::ClassManagement,
        Module::SubjectManagement,
        Module::Curriculum,
        Module::Exams,
        Module::Results,
        Module::Attendance,
        Module::StaffManagement,
    ],
    permissions: &[
        Permission::View,
        Permission::Edit,
        Permission::Approve,
        Permission::Export,
    ],
    description: "Oversees academic operations and teachers",
};

static EXAMINATION_OFFICER: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::Exams,
        Module::Results,
        Module::Timetable,
    ],
    permissions: &[
        Permission::View,
        Permission::Create,
        Permission::Edit,
        Permission::Approve,
        Permission::Print,
    ],
    description: "Manages examinations and grading",
};

static IT_SUPPORT: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::UserManagement,
        Module::SystemLogs,
    ],
    permissions: &[Permission::View, Permission::Edit],
    description: "Provides technical support and password resets",
};

static SECURITY_OFFICER: RolePolicy = RolePolicy {
    modules: &[
        Module::Dashboard,
        Module::VisitorLogs,
        Module::StudentCheckin,
        Module::PickupVerification,
    ],
    permissions: &[Permission::View, Permission::Create, Permission::Edit],
    description: "Manages school security and visitor logs",
};

/// Look up the policy for a role.
///
/// Total over the closed [`Role`] enumeration; the compiler rejects a new
/// role variant until a policy arm is added here.
pub fn policy_for(role: Role) -> &'static RolePolicy {
    match role {
        Role::SuperAdmin => &SUPER_ADMIN,
        Role::Admin => &ADMIN,
        Role::Teacher => &TEACHER,
        Role::Student => &STUDENT,
        Role::Parent => &PARENT,
        Role::Nurse => &NURSE,
        Role::Librarian => &LIBRARIAN,
        Role::Bursar => &BURSAR,
        Role::InventoryOfficer => &INVENTORY_OFFICER,
        Role::Registrar => &REGISTRAR,
        Role::AcademicHead => &ACADEMIC_HEAD,
        Role::ExaminationOfficer => &EXAMINATION_OFFICER,
        Role::ItSupport => &IT_SUPPORT,
        Role::SecurityOfficer => &SECURITY_OFFICER,
    }
}
