use std::io::BufRead;

use anyhow::{Context, bail};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    user_name: String,
    display_name: String,
    is_admin: bool,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password(std::io::stdin().lock())?,
    };

    let user = ctx.client.login(&args.username, &password).await?;
    let is_admin = ctx.state.user.read().await.is_admin;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: user.id.clone(),
            user_name: user.user_name.clone(),
            display_name: user.label().to_string(),
            is_admin,
        },
        flags.format,
    )
}

/// First line of `input`, without the line terminator.
fn read_password(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("auth login: no password given (pass --password or pipe it on stdin)");
    }
    Ok(password)
}
