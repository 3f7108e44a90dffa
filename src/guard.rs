//! UI gating adapters over the access policy.
//!
//! Two thin collaborators sit between the policy engine and the rendering
//! layer:
//!
//! - [`RouteGuard`] decides whether a protected route renders, redirects to
//!   login, or redirects to the unauthorized page.
//! - [`RenderGate`] answers a plain yes/no for conditional rendering of an
//!   action control; on `false` the caller shows its fallback (usually
//!   nothing).
//!
//! Both accept the session role as supplied by the auth collaborator. The
//! raw-string entry points fail closed: a garbled role value degrades to
//! zero entitlements, it never panics and never elevates.

use academix_models::{Module, Permission, Role};
use tracing::warn;

/// The decision a route guard hands back to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content.
    Allow,
    /// No session; send the user to the login page.
    RedirectToLogin,
    /// Authenticated but not entitled; send to the unauthorized page.
    RedirectToUnauthorized,
}

/// Declarative access requirements for a protected route.
///
/// An empty guard requires only an authenticated session. Requirements
/// combine conjunctively: every configured check must pass.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    allowed_roles: Vec<Role>,
    required_module: Option<Module>,
    required_permission: Option<Permission>,
}

impl RouteGuard {
    /// A guard that requires only an authenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the route to the given roles.
    pub fn allow_roles(mut self, roles: &[Role]) -> Self {
        self.allowed_roles.extend_from_slice(roles);
        self
    }

    /// Require module access.
    pub fn require_module(mut self, module: Module) -> Self {
        self.required_module = Some(module);
        self
    }

    /// Require a permission verb.
    pub fn require_permission(mut self, permission: Permission) -> Self {
        self.required_permission = Some(permission);
        self
    }

    fn is_gated(&self) -> bool {
        !self.allowed_roles.is_empty()
            || self.required_module.is_some()
            || self.required_permission.is_some()
    }

    /// Evaluate the guard for a session role.
    ///
    /// `None` means no authenticated session.
    pub fn evaluate(&self, session_role: Option<Role>) -> GuardOutcome {
        let Some(role) = session_role else {
            return GuardOutcome::RedirectToLogin;
        };

        if !self.allowed_roles.is_empty() && !self.allowed_roles.contains(&role) {
            warn!(role = %role, "route denied: role not in allow list");
            return GuardOutcome::RedirectToUnauthorized;
        }

        if let Some(module) = self.required_module
            && !academix_core::has_module_access(role, module)
        {
            warn!(role = %role, module = %module, "route denied: no module access");
            return GuardOutcome::RedirectToUnauthorized;
        }

        if let Some(permission) = self.required_permission
            && !academix_core::has_permission(role, permission)
        {
            warn!(role = %role, permission = %permission, "route denied: missing permission");
            return GuardOutcome::RedirectToUnauthorized;
        }

        GuardOutcome::Allow
    }

    /// Evaluate the guard for the raw role string from the session store.
    ///
    /// A value that does not parse to a known role is treated as a role
    /// with no entitlements: any gated route is denied, an ungated route
    /// (authentication only) still renders.
    pub fn evaluate_raw(&self, session_role: Option<&str>) -> GuardOutcome {
        let Some(raw) = session_role else {
            return GuardOutcome::RedirectToLogin;
        };

        match raw.parse::<Role>() {
            Ok(role) => self.evaluate(Some(role)),
            Err(err) => {
                if self.is_gated() {
                    warn!(%err, "route denied: unrecognized session role");
                    GuardOutcome::RedirectToUnauthorized
                } else {
                    GuardOutcome::Allow
                }
            }
        }
    }
}

/// Conditional-render check for a single action control.
///
/// Mirrors [`RouteGuard`] but collapses to a boolean: the caller renders
/// its children on `true` and its fallback on `false`.
#[derive(Debug, Clone, Default)]
pub struct RenderGate {
    roles: Vec<Role>,
    module: Option<Module>,
    permission: Option<Permission>,
}

impl RenderGate {
    /// A gate that requires only an authenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict rendering to the given roles.
    pub fn for_roles(mut self, roles: &[Role]) -> Self {
        self.roles.extend_from_slice(roles);
        self
    }

    /// Require module access.
    pub fn with_module(mut self, module: Module) -> Self {
        self.module = Some(module);
        self
    }

    /// Require a permission verb.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Whether the control should render for the session role.
    pub fn allows(&self, session_role: Option<Role>) -> bool {
        let Some(role) = session_role else {
            return false;
        };

        if !self.roles.is_empty() && !self.roles.contains(&role) {
            return false;
        }

        if let Some(module) = self.module
            && !academix_core::has_module_access(role, module)
        {
            return false;
        }

        if let Some(permission) = self.permission
            && !academix_core::has_permission(role, permission)
        {
            return false;
        }

        true
    }

    /// [`allows`](Self::allows) over the raw session role string,
    /// fail-closed on anything unrecognized.
    pub fn allows_raw(&self, session_role: Option<&str>) -> bool {
        match session_role.map(str::parse::<Role>) {
            Some(Ok(role)) => self.allows(Some(role)),
            // A gate always has at least the authentication requirement for
            // rendering an action, so an unparseable role renders nothing.
            Some(Err(_)) | None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let guard = RouteGuard::new().require_module(Module::Fees);
        assert_eq!(guard.evaluate(None), GuardOutcome::RedirectToLogin);
        assert_eq!(guard.evaluate_raw(None), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn test_ungated_guard_only_needs_a_session() {
        let guard = RouteGuard::new();
        for role in Role::ALL {
            assert_eq!(guard.evaluate(Some(role)), GuardOutcome::Allow);
        }
    }

    #[test]
    fn test_role_allow_list() {
        let guard = RouteGuard::new().allow_roles(&[Role::SuperAdmin, Role::Admin]);
        assert_eq!(guard.evaluate(Some(Role::Admin)), GuardOutcome::Allow);
        assert_eq!(
            guard.evaluate(Some(Role::Teacher)),
            GuardOutcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn test_module_and_permission_requirements() {
        let guard = RouteGuard::new()
            .require_module(Module::Fees)
            .require_permission(Permission::Approve);
        assert_eq!(guard.evaluate(Some(Role::Bursar)), GuardOutcome::Allow);
        // Students reach fees but cannot approve
        assert_eq!(
            guard.evaluate(Some(Role::Student)),
            GuardOutcome::RedirectToUnauthorized
        );
        // Examination officers can approve but cannot reach fees
        assert_eq!(
            guard.evaluate(Some(Role::ExaminationOfficer)),
            GuardOutcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn test_garbled_role_fails_closed() {
        let gated = RouteGuard::new().require_module(Module::Dashboard);
        assert_eq!(
            gated.evaluate_raw(Some("sup3r_admin")),
            GuardOutcome::RedirectToUnauthorized
        );

        // Authentication-only routes still render for a corrupted session
        // role; the user sees the unconditional chrome and nothing else.
        let ungated = RouteGuard::new();
        assert_eq!(ungated.evaluate_raw(Some("sup3r_admin")), GuardOutcome::Allow);
    }

    #[test]
    fn test_evaluate_raw_parses_known_roles() {
        let guard = RouteGuard::new().require_module(Module::Medical);
        assert_eq!(guard.evaluate_raw(Some("nurse")), GuardOutcome::Allow);
        assert_eq!(
            guard.evaluate_raw(Some("librarian")),
            GuardOutcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn test_render_gate_requires_session() {
        let gate = RenderGate::new();
        assert!(!gate.allows(None));
        assert!(gate.allows(Some(Role::Parent)));
    }

    #[test]
    fn test_render_gate_combined_check() {
        let delete_student_button = RenderGate::new()
            .with_module(Module::StudentManagement)
            .with_permission(Permission::Delete);
        assert!(delete_student_button.allows(Some(Role::SuperAdmin)));
        assert!(delete_student_button.allows(Some(Role::Admin)));
        // Registrars manage students but hold no delete verb
        assert!(!delete_student_button.allows(Some(Role::Registrar)));
        assert!(!delete_student_button.allows(Some(Role::Teacher)));
    }

    #[test]
    fn test_render_gate_role_list() {
        let gate = RenderGate::new()
            .for_roles(&[Role::Bursar])
            .with_module(Module::Payments);
        assert!(gate.allows(Some(Role::Bursar)));
        // Admin reaches payments but is not in the role list
        assert!(!gate.allows(Some(Role::Admin)));
    }

    #[test]
    fn test_render_gate_raw_fails_closed() {
        let gate = RenderGate::new();
        assert!(!gate.allows_raw(Some("intruder")));
        assert!(!gate.allows_raw(None));
        assert!(gate.allows_raw(Some("teacher")));
    }
}
