use academix_cli::report;
use academix_models::{Module, Permission, Role};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "academix-cli")]
#[command(about = "Academix CLI - Inspect roles, access policies, and navigation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role with its label and grant summary
    Roles,
    /// Show the full policy for a role
    Policy {
        /// Role slug (e.g. "teacher", "academic_head")
        role: Role,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation a role sees
    Nav {
        /// Role slug (e.g. "teacher", "academic_head")
        role: Role,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a role can perform a permission in a module
    ///
    /// Exits non-zero when access is denied, so the command can back
    /// scripted assertions.
    Check {
        /// Role slug (e.g. "bursar")
        role: Role,

        /// Module slug (e.g. "fees")
        module: Module,

        /// Permission verb (e.g. "approve")
        permission: Permission,
    },
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Roles => report::print_roles(),
        Commands::Policy { role, json } => report::print_policy(role, json)?,
        Commands::Nav { role, json } => report::print_navigation(role, json)?,
        Commands::Check {
            role,
            module,
            permission,
        } => {
            if !report::check(role, module, permission) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
