//! Static navigation configuration.
//!
//! Two distinct shapes are maintained on purpose: the full sidebar tree
//! used by staff and administrative roles, and a curated flat list for
//! students. The student list is not derived from the tree; its entries and
//! ordering are their own configuration, so the two must be edited
//! independently.
//!
//! Both are built once on first access and never mutated afterwards.

use crate::item::NavItem;
use academix_models::Module;
use std::sync::LazyLock;

static SIDEBAR_NAV: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        // Dashboard is visible to every authenticated role
        NavItem::open_leaf("Dashboard", "/dashboard", "home"),
        NavItem::group(
            "User Management",
            "users",
            vec![
                NavItem::leaf("All Users", "/users", "users", Module::UserManagement),
                NavItem::leaf(
                    "Roles & Permissions",
                    "/users/roles",
                    "shield-alt",
                    Module::RoleManagement,
                ),
            ],
        ),
        NavItem::group(
            "Students",
            "user-graduate",
            vec![
                NavItem::leaf(
                    "All Students",
                    "/students",
                    "user-graduate",
                    Module::StudentManagement,
                ),
                NavItem::leaf(
                    "Admissions",
                    "/students/admissions",
                    "user-plus",
                    Module::Admissions,
                ),
                NavItem::leaf(
                    "Transfers",
                    "/students/transfers",
                    "exchange-alt",
                    Module::Transfers,
                ),
                NavItem::leaf(
                    "ID Generation",
                    "/students/id-cards",
                    "id-card",
                    Module::IdGeneration,
                ),
            ],
        ),
        NavItem::group(
            "Staff",
            "chalkboard-teacher",
            vec![
                NavItem::leaf(
                    "All Staff",
                    "/staff",
                    "chalkboard-teacher",
                    Module::StaffManagement,
                ),
                NavItem::leaf(
                    "Teachers",
                    "/staff/teachers",
                    "chalkboard-teacher",
                    Module::StaffManagement,
                ),
            ],
        ),
        NavItem::group(
            "Academics",
            "graduation-cap",
            vec![
                NavItem::leaf(
                    "Classes",
                    "/academics/classes",
                    "book",
                    Module::ClassManagement,
                ),
                NavItem::leaf(
                    "Subjects",
                    "/academics/subjects",
                    "book-open",
                    Module::SubjectManagement,
                ),
                NavItem::leaf(
                    "Timetable",
                    "/academics/timetable",
                    "calendar-alt",
                    Module::Timetable,
                ),
                NavItem::leaf(
                    "Curriculum",
                    "/academics/curriculum",
                    "file-alt",
                    Module::Curriculum,
                ),
            ],
        ),
        NavItem::group(
            "Attendance & Exams",
            "clipboard-list",
            vec![
                NavItem::leaf("Attendance", "/attendance", "clipboard-list", Module::Attendance),
                NavItem::leaf("Examinations", "/exams", "file-alt", Module::Exams),
                NavItem::leaf("Results", "/results", "chart-bar", Module::Results),
                NavItem::leaf("Assignments", "/assignments", "book", Module::Assignments),
            ],
        ),
        NavItem::group(
            "Finance",
            "money-bill-wave",
            vec![
                NavItem::leaf(
                    "Fees Structure",
                    "/finance/fees",
                    "money-bill-wave",
                    Module::Fees,
                ),
                NavItem::leaf(
                    "Payments",
                    "/finance/payments",
                    "money-bill-wave",
                    Module::Payments,
                ),
                NavItem::leaf(
                    "Payroll",
                    "/finance/payroll",
                    "money-bill-wave",
                    Module::Payroll,
                ),
                NavItem::leaf(
                    "Budgeting",
                    "/finance/budgeting",
                    "chart-bar",
                    Module::Budgeting,
                ),
                NavItem::leaf(
                    "Reports",
                    "/finance/reports",
                    "chart-bar",
                    Module::FinancialReports,
                ),
            ],
        ),
        NavItem::group(
            "Support Services",
            "hospital",
            vec![
                NavItem::leaf("Medical / Clinic", "/medical", "hospital", Module::Medical),
                NavItem::leaf("Library", "/library", "book-open", Module::Library),
                NavItem::leaf("Inventory", "/inventory", "boxes", Module::Inventory),
                NavItem::leaf("Transport", "/transport", "bus", Module::Transport),
                NavItem::leaf("Hostel", "/hostel", "bed", Module::Hostel),
            ],
        ),
        NavItem::group(
            "Communication",
            "bullhorn",
            vec![
                NavItem::leaf("Notices", "/notices", "bullhorn", Module::Notices),
                NavItem::leaf("Messages", "/messages", "envelope", Module::Messaging),
            ],
        ),
        NavItem::group(
            "Security",
            "shield-alt",
            vec![
                NavItem::leaf(
                    "Visitor Logs",
                    "/security/visitors",
                    "door-open",
                    Module::VisitorLogs,
                ),
                NavItem::leaf(
                    "Student Check-in",
                    "/security/checkin",
                    "id-card",
                    Module::StudentCheckin,
                ),
                NavItem::leaf(
                    "Pickup Verification",
                    "/security/pickup",
                    "shield-alt",
                    Module::PickupVerification,
                ),
            ],
        ),
        NavItem::group(
            "Settings",
            "cog",
            vec![
                NavItem::leaf(
                    "School Settings",
                    "/settings/school",
                    "cog",
                    Module::SchoolManagement,
                ),
                NavItem::leaf(
                    "System Settings",
                    "/settings/system",
                    "user-cog",
                    Module::SystemSettings,
                ),
                NavItem::leaf("System Logs", "/settings/logs", "history", Module::SystemLogs),
            ],
        ),
    ]
});

static STUDENT_NAV: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        NavItem::open_leaf("Dashboard", "/dashboard", "home"),
        NavItem::leaf("Exams & Results", "/results", "chart-bar", Module::Results),
        NavItem::leaf("Assignments", "/assignments", "book", Module::Assignments),
        NavItem::leaf(
            "Timetable",
            "/academics/timetable",
            "calendar-alt",
            Module::Timetable,
        ),
        NavItem::leaf("Library", "/library", "book-open", Module::Library),
        NavItem::leaf("Notices", "/notices", "bullhorn", Module::Notices),
    ]
});

/// The full sidebar tree used by staff and administrative roles.
pub fn sidebar_navigation() -> &'static [NavItem] {
    &SIDEBAR_NAV
}

/// The curated flat navigation used by students.
pub fn student_navigation() -> &'static [NavItem] {
    &STUDENT_NAV
}
