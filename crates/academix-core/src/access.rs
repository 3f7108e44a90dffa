//! Pure access-check predicates over the role policy table.
//!
//! Every function here is total and side-effect free: a table lookup and a
//! slice scan, cheap enough to call once per render. Denial is expressed as
//! `false`, never as an error; how to react (hide a control, redirect to an
//! unauthorized page) is the caller's concern.

use crate::policy::policy_for;
use academix_models::{Module, Permission, Role};

/// True iff `role`'s policy includes `module`.
pub fn has_module_access(role: Role, module: Module) -> bool {
    policy_for(role).modules.contains(&module)
}

/// True iff `role`'s policy grants the `permission` verb.
///
/// Permission verbs are global to the role, not scoped per module.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    policy_for(role).permissions.contains(&permission)
}

/// True iff `role` holds at least one of `permissions`.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    let granted = policy_for(role).permissions;
    permissions.iter().any(|p| granted.contains(p))
}

/// True iff `role` can reach `module` *and* holds `permission`.
///
/// A conjunction, not an independent check: a role that can view the fees
/// module but holds no `edit` verb anywhere fails
/// `can_access(role, Fees, Edit)`.
pub fn can_access(role: Role, module: Module, permission: Permission) -> bool {
    has_module_access(role, module) && has_permission(role, permission)
}

/// The modules `role` can reach.
pub fn role_modules(role: Role) -> &'static [Module] {
    policy_for(role).modules
}

/// The permission verbs `role` holds.
pub fn role_permissions(role: Role) -> &'static [Permission] {
    policy_for(role).permissions
}

/// The human-readable label for `role`.
pub fn role_label(role: Role) -> &'static str {
    role.label()
}

/// The administrative description of `role`.
pub fn role_description(role: Role) -> &'static str {
    policy_for(role).description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_scenario() {
        assert!(can_access(Role::Teacher, Module::Attendance, Permission::Create));
        assert!(!can_access(Role::Teacher, Module::Fees, Permission::View));
        assert!(!has_permission(Role::Teacher, Permission::Delete));
    }

    #[test]
    fn test_can_access_is_conjunctive() {
        for role in Role::ALL {
            for module in Module::ALL {
                for permission in Permission::ALL {
                    assert_eq!(
                        can_access(role, module, permission),
                        has_module_access(role, module) && has_permission(role, permission)
                    );
                }
            }
        }
    }

    #[test]
    fn test_module_access_without_permission_denies() {
        // Students reach the fees module but hold only the view verb.
        assert!(has_module_access(Role::Student, Module::Fees));
        assert!(!has_permission(Role::Student, Permission::Edit));
        assert!(!can_access(Role::Student, Module::Fees, Permission::Edit));
    }

    #[test]
    fn test_super_admin_is_universal() {
        for module in Module::ALL {
            for permission in Permission::ALL {
                assert!(can_access(Role::SuperAdmin, module, permission));
            }
        }
        assert_eq!(role_modules(Role::SuperAdmin), &Module::ALL);
    }

    #[test]
    fn test_has_any_permission() {
        assert!(has_any_permission(
            Role::Student,
            &[Permission::Delete, Permission::View]
        ));
        assert!(!has_any_permission(
            Role::Student,
            &[Permission::Delete, Permission::Approve]
        ));
        assert!(!has_any_permission(Role::Student, &[]));
    }

    #[test]
    fn test_role_lookups() {
        assert_eq!(role_label(Role::Bursar), "Bursar");
        assert_eq!(
            role_description(Role::Bursar),
            "Manages school finances, fees, and payments"
        );
        assert_eq!(
            role_permissions(Role::ItSupport),
            &[Permission::View, Permission::Edit]
        );
    }
}
