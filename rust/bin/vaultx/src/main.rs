//! `vaultx` — the VaultX society admin dashboard in a terminal.
//!
//! Every subcommand opens the headless dashboard, drives it with the same
//! requests a graphical front end would emit, and prints the resulting
//! screen.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use vaultx_admin::{DashboardConfig, SocietyUpdateRoute};

/// VaultX admin CLI.
#[derive(Parser, Debug)]
#[command(name = "vaultx", about = "VaultX society admin dashboard")]
struct Cli {
    /// Base URL of the VaultX backend.
    #[arg(long, global = true, env = "VAULTX_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Directory for client state (default: ~/.vaultx).
    #[arg(long, global = true, env = "VAULTX_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Credential file (default: <data-dir>/token.toml).
    #[arg(long = "token-file", global = true, env = "VAULTX_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Society update endpoint: by-id or latest.
    #[arg(long, global = true, env = "VAULTX_SOCIETY_UPDATE", default_value = "by-id")]
    society_update: SocietyUpdateRoute,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with a bearer token.
    Login {
        /// Token (prompted for if omitted).
        #[arg(long)]
        token: Option<String>,
    },

    /// Sign out and forget the stored token.
    Logout,

    /// Show who is signed in.
    Whoami,

    /// Dashboard home.
    Dashboard,

    /// Pending resident approvals.
    Approvals {
        #[command(flatten)]
        list: ListArgs,
        /// Approve this resident.
        #[arg(long, conflicts_with = "reject")]
        approve: Option<String>,
        /// Reject this resident (local only).
        #[arg(long)]
        reject: Option<String>,
    },

    /// Society employees.
    Employees {
        #[command(subcommand)]
        action: Option<EmployeeAction>,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Registered guests.
    Guests {
        #[command(flatten)]
        list: ListArgs,
        /// Only guests whose visit is verified.
        #[arg(long)]
        verified_only: bool,
    },

    /// Approved residents.
    Users {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Resident vehicles.
    Vehicles {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Society profile.
    Society {
        #[command(subcommand)]
        action: Option<SocietyAction>,
    },
}

/// Search and selection shared by every list screen.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter rows by text.
    #[arg(long)]
    pub search: Option<String>,
    /// Show the detail pane for this id.
    #[arg(long)]
    pub select: Option<String>,
}

#[derive(Subcommand, Debug)]
enum EmployeeAction {
    /// Add an employee.
    Add(commands::employees::AddArgs),
}

#[derive(Subcommand, Debug)]
enum SocietyAction {
    /// Register the society.
    Register(commands::society::SocietyArgs),
    /// Edit the registered society. Omitted fields keep their value.
    Edit(commands::society::SocietyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DashboardConfig {
        api_url: cli.api_url,
        data_dir: cli.data_dir,
        token_path: cli.token_file,
        society_update: cli.society_update,
    };
    debug!(api_url = %config.api_url, society_update = %config.society_update, "config");

    match cli.command {
        Commands::Login { token } => {
            let token = match token {
                Some(t) => t,
                None => rpassword::prompt_password("Token: ")?,
            };
            commands::auth::login(config, &token).await?;
        }
        Commands::Logout => commands::auth::logout(config).await?,
        Commands::Whoami => commands::auth::whoami(config).await?,
        Commands::Dashboard => commands::pages::home(config).await?,
        Commands::Approvals { list, approve, reject } => {
            commands::pages::approvals(config, &list, approve, reject).await?;
        }
        Commands::Employees { action, list } => match action {
            Some(EmployeeAction::Add(args)) => commands::employees::add(config, args).await?,
            None => commands::pages::employees(config, &list).await?,
        },
        Commands::Guests { list, verified_only } => {
            commands::pages::guests(config, &list, verified_only).await?;
        }
        Commands::Users { list } => commands::pages::users(config, &list).await?,
        Commands::Vehicles { list } => commands::pages::vehicles(config, &list).await?,
        Commands::Society { action } => match action {
            None => commands::society::show(config).await?,
            Some(SocietyAction::Register(args)) => commands::society::register(config, args).await?,
            Some(SocietyAction::Edit(args)) => commands::society::edit(config, args).await?,
        },
    }

    Ok(())
}
