//! Per-role dashboard widget configuration.
//!
//! Each role lands on a dashboard assembled from a fixed list of widget
//! identifiers. Like the navigation tree this is compiled-in configuration;
//! the identifiers are resolved to actual widgets by the rendering layer.

use academix_models::Role;

/// The dashboard widget identifiers shown to `role`, in display order.
pub fn dashboard_widgets(role: Role) -> &'static [&'static str] {
    match role {
        Role::SuperAdmin => &["schools", "users", "systemHealth", "logs"],
        Role::Admin => &["students", "teachers", "attendance", "fees", "notices"],
        Role::Teacher => &["myClasses", "attendance", "assignments", "notices"],
        Role::Student => &["profile", "attendance", "results", "assignments", "timetable"],
        Role::Parent => &["childProfile", "attendance", "results", "fees", "notices"],
        Role::Nurse => &["todayVisits", "pendingFollowups", "emergencyContacts"],
        Role::Librarian => &["issuedBooks", "overdueBooks", "todayReturns"],
        Role::Bursar => &[
            "todayPayments",
            "outstanding",
            "feeSummary",
            "recentTransactions",
        ],
        Role::InventoryOfficer => &["lowStock", "recentIssues", "inventorySummary"],
        Role::Registrar => &["pendingAdmissions", "recentAdmissions", "idCards"],
        Role::AcademicHead => &["teacherPerformance", "examResults", "curriculumProgress"],
        Role::ExaminationOfficer => &["upcomingExams", "pendingResults", "examSchedule"],
        Role::ItSupport => &["systemStatus", "pendingTickets", "userActivities"],
        Role::SecurityOfficer => &["todayVisitors", "todayCheckins", "pendingPickups"],
    }
}
