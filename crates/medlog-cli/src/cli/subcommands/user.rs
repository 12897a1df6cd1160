use clap::Subcommand;

/// Current user.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Fetch the logged-in user and their admin status.
    Me,
}
