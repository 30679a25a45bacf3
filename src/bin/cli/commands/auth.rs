use anyhow::{Context, Result};
use chrono::Utc;

use vocards_lib::auth::token::token_expiry;
use vocards_lib::auth::{AuthError, UserRecord};

use crate::app::auth_session;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run_status(format: &OutputFormat, use_color: bool) -> Result<()> {
    let mut session = auth_session()?;

    let status = match session.init(Utc::now()) {
        Ok(status) => status,
        Err(AuthError::Expired) => {
            match format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "isAuthenticated": false,
                        "expired": true,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Plain => {
                    println!(
                        "{}",
                        terminal::paint(
                            "Session expired; you have been signed out.",
                            Color::YELLOW,
                            use_color
                        )
                    );
                }
            }
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read session"),
    };

    let expires_at = status.token.as_deref().and_then(token_expiry);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "isAuthenticated": status.is_authenticated,
                "expired": false,
                "user": status.user,
                "expiresAt": expires_at.map(|t| t.to_rfc3339()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match status.user.filter(|_| status.is_authenticated) {
            Some(user) => {
                for line in terminal::render_user(&user, use_color) {
                    println!("{}", line);
                }
                if let Some(expiry) = expires_at {
                    println!("  Expires: {}", expiry.format("%Y-%m-%d %H:%M UTC"));
                }
            }
            None => println!("Not signed in."),
        },
    }

    Ok(())
}

pub fn run_login(token: &str, user_json: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Token must not be empty");
    }
    let user: UserRecord =
        serde_json::from_str(user_json.trim()).context("Failed to parse user record")?;

    let mut session = auth_session()?;
    session.login(token, &user).context("Failed to store session")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "isAuthenticated": true,
                "user": user,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for line in terminal::render_user(&user, use_color) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

pub fn run_logout(format: &OutputFormat) -> Result<()> {
    let mut session = auth_session()?;
    let landing = session.logout().context("Failed to clear session")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "redirect": landing });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("Signed out."),
    }

    Ok(())
}
