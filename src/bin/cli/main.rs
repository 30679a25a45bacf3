mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vocards_lib::flashcards::LanguagePair;

#[derive(Parser)]
#[command(name = "vocards", about = "Russian/English flashcards with AI-assisted card creation", version)]
struct Cli {
    /// Config file (default: <config dir>/vocards/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a batch of cards on a topic and print them
    Generate {
        /// Topic to generate vocabulary for
        topic: String,
        /// Number of cards (5-20, default from config)
        #[arg(long, short)]
        count: Option<u8>,
        /// Translation direction: ru-en or en-ru
        #[arg(long, short)]
        direction: Option<LanguagePair>,
    },

    /// Translate a single word
    Translate {
        /// Word to translate
        word: String,
        /// Translation direction: ru-en or en-ru
        #[arg(long, short)]
        direction: Option<LanguagePair>,
    },

    /// Launch the interactive study TUI
    #[cfg(feature = "tui")]
    Study,

    /// Sign-in session
    #[command(subcommand)]
    Auth(AuthCommand),
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Show the stored session (expired sessions are signed out)
    Status,

    /// Store a token and user record
    Login {
        /// Bearer token issued by the server
        #[arg(long)]
        token: String,
        /// User record as JSON (use "-" to read from stdin)
        #[arg(long)]
        user: String,
    },

    /// Clear the stored session
    Logout,
}

/// Resolve "-" as stdin
fn resolve_content(content: String) -> anyhow::Result<String> {
    if content != "-" {
        return Ok(content);
    }
    let mut buf = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let config_path = cli.config.as_deref();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(config_path)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Study) => {
            tui::run(config_path)?;
        }
        Some(Command::Generate { topic, count, direction }) => {
            let app = app::App::new(config_path)?;
            commands::generate::run(&app, &topic, count, direction, &cli.format, use_color)?;
        }
        Some(Command::Translate { word, direction }) => {
            let app = app::App::new(config_path)?;
            commands::translate::run(&app, &word, direction, &cli.format, use_color)?;
        }
        Some(Command::Auth(subcmd)) => match subcmd {
            AuthCommand::Status => {
                commands::auth::run_status(&cli.format, use_color)?;
            }
            AuthCommand::Login { token, user } => {
                let user = resolve_content(user)?;
                commands::auth::run_login(&token, &user, &cli.format, use_color)?;
            }
            AuthCommand::Logout => {
                commands::auth::run_logout(&cli.format)?;
            }
        },
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
