use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with username and password.
    Login(AuthLoginArgs),
    /// Forget tokens, user and all cached study data.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account name.
    pub username: String,
    /// Password. Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
