//! Report rendering for the CLI subcommands.

use academix_core::{policy_for, role_label};
use academix_models::{Module, Permission, Role};
use academix_nav::{NavItem, dashboard_widgets, resolve};
use anyhow::Result;
use serde_json::json;

/// Print every role with its label and grant summary.
pub fn print_roles() {
    println!(
        "{:<22} {:<22} {:>7} {:>11}  {}",
        "ROLE", "LABEL", "MODULES", "PERMISSIONS", "DESCRIPTION"
    );
    for role in Role::ALL {
        let policy = policy_for(role);
        println!(
            "{:<22} {:<22} {:>7} {:>11}  {}",
            role.as_str(),
            role_label(role),
            policy.modules.len(),
            policy.permissions.len(),
            policy.description
        );
    }
}

/// Print the full policy for one role.
pub fn print_policy(role: Role, as_json: bool) -> Result<()> {
    let policy = policy_for(role);

    if as_json {
        let value = json!({
            "role": role,
            "label": role_label(role),
            "description": policy.description,
            "modules": policy.modules,
            "permissions": policy.permissions,
            "dashboard_widgets": dashboard_widgets(role),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} ({})", role_label(role), role.as_str());
    println!("  {}", policy.description);
    println!("  modules:");
    for module in policy.modules {
        println!("    - {}", module);
    }
    println!("  permissions:");
    for permission in policy.permissions {
        println!("    - {}", permission);
    }
    println!("  dashboard widgets:");
    for widget in dashboard_widgets(role) {
        println!("    - {}", widget);
    }
    Ok(())
}

/// Print the navigation a role sees, as an indented tree or JSON.
pub fn print_navigation(role: Role, as_json: bool) -> Result<()> {
    let nav = resolve(role);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&nav)?);
        return Ok(());
    }

    println!("Navigation for {} ({})", role_label(role), role.as_str());
    print_items(&nav, 1);
    Ok(())
}

fn print_items(items: &[NavItem], depth: usize) {
    let indent = "  ".repeat(depth);
    for item in items {
        match item {
            NavItem::Leaf { label, path, .. } => println!("{indent}{label}  ->  {path}"),
            NavItem::Group {
                label, children, ..
            } => {
                println!("{indent}{label}/");
                print_items(children, depth + 1);
            }
        }
    }
}

/// Print the verdict for an access triple; returns whether it is allowed.
pub fn check(role: Role, module: Module, permission: Permission) -> bool {
    let allowed = academix_core::can_access(role, module, permission);
    let verdict = if allowed { "ALLOWED" } else { "DENIED" };
    println!("{verdict}: {} {} {}", role.as_str(), permission, module);
    if !allowed {
        // Explain which half of the conjunction failed
        if !academix_core::has_module_access(role, module) {
            println!("  {} has no access to the {} module", role.as_str(), module);
        }
        if !academix_core::has_permission(role, permission) {
            println!("  {} does not hold the '{}' permission", role.as_str(), permission);
        }
    }
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_verdicts() {
        assert!(check(Role::Bursar, Module::Fees, Permission::Approve));
        assert!(!check(Role::Teacher, Module::Fees, Permission::View));
        assert!(!check(Role::Student, Module::Results, Permission::Edit));
    }

    #[test]
    fn test_reports_do_not_fail() {
        print_roles();
        for role in Role::ALL {
            print_policy(role, false).unwrap();
            print_policy(role, true).unwrap();
            print_navigation(role, false).unwrap();
            print_navigation(role, true).unwrap();
        }
    }
}
