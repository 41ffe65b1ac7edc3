//! Wedding invitation CLI
//!
//! Terminal companion to the desktop invitation, built on invite-core.
//!
//! ## Usage
//!
//! ```bash
//! # How long until the wedding
//! invite countdown
//!
//! # Couple, date, venue and contact
//! invite details
//!
//! # Confirm attendance
//! invite rsvp submit --name "María Santos" --attending --comment "¡Ahí estaremos!"
//!
//! # Attendance totals
//! invite rsvp stats
//!
//! # Effective configuration as JSON
//! invite --config invite.json config show
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use invite_core::countdown::ARRIVED_MESSAGE;
use invite_core::logging::LoggingBuilder;
use invite_core::{InviteConfig, RsvpClient, RsvpDraft, RsvpError, TimeLeft};

/// Wedding invitation - countdown, details and RSVP
#[derive(Parser)]
#[command(name = "invite")]
#[command(version = "0.1.0")]
#[command(about = "Wedding invitation - countdown, details and RSVP")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file (default: built-in invitation)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// RSVP backend URL, without the /api prefix
    #[arg(long, env = "INVITE_BACKEND_URL", global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time left until the ceremony
    Countdown {
        /// Count from this local time instead of now (e.g. 2026-04-01T10:00:00)
        #[arg(long, value_parser = parse_local_datetime)]
        now: Option<NaiveDateTime>,
    },

    /// Couple, date, venue and contact
    Details,

    /// Confirm attendance
    Rsvp {
        #[command(subcommand)]
        action: RsvpAction,
    },

    /// Configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RsvpAction {
    /// Send an RSVP to the backend
    Submit {
        /// Guest name (2-100 characters)
        #[arg(short, long)]
        name: String,

        /// Will attend
        #[arg(long, conflicts_with = "declining")]
        attending: bool,

        /// Will not attend
        #[arg(long)]
        declining: bool,

        /// Optional message for the couple (up to 500 characters)
        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Show attendance totals
    Stats,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
}

fn setup_logging(verbosity: u8, configured: &str) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => configured,
        2 => "debug",
        _ => "trace",
    };
    LoggingBuilder::new(level).init()?;
    Ok(())
}

fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

fn attendance(attending: bool, declining: bool) -> Option<bool> {
    match (attending, declining) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn print_countdown(config: &InviteConfig, now: NaiveDateTime) {
    let details = &config.wedding;
    let left = TimeLeft::until_local(details.ceremony_start(), now);

    println!("{}", details.couple.display_names());
    println!("{}, {}", details.weekday_name(), details.formatted_date());
    println!();
    if left.is_zero() {
        println!("{}", ARRIVED_MESSAGE);
    } else {
        for (value, label) in left.units() {
            println!("  {:>3} {}", format!("{:02}", value), label);
        }
    }
}

fn print_details(config: &InviteConfig) {
    let details = &config.wedding;

    println!("{}", details.couple.display_names());
    println!();
    println!("Fecha:");
    println!("  {}, {}", details.weekday_name(), details.formatted_date());
    println!("  Hora: {}", details.ceremony_time.format("%H:%M"));
    println!();
    println!("Lugar:");
    println!("  {}", details.venue.name);
    println!("  {}", details.venue.address);
    println!();
    println!("Contacto:");
    println!("  Email: {}", details.contact.email);
    println!("  Teléfono: {}", details.contact.phone);
    println!();
    println!("Nuestra Historia:");
    for milestone in &config.story {
        println!("  {} {} - {}", milestone.icon, milestone.year, milestone.title);
    }
    println!();
    println!("Galería: {} elementos", config.gallery.len());
}

fn describe_rsvp_error(err: &RsvpError) -> String {
    match err.toast_description() {
        Some(description) => format!("{}: {}", err.toast_title(), description),
        None => err.toast_title(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = InviteConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.backend_url, None);
    config.validate().context("Invalid configuration")?;

    setup_logging(cli.verbose, &config.log_level)?;

    match cli.command {
        Commands::Countdown { now } => {
            let now = now.unwrap_or_else(|| Local::now().naive_local());
            print_countdown(&config, now);
        }

        Commands::Details => print_details(&config),

        Commands::Rsvp { action } => match action {
            RsvpAction::Submit {
                name,
                attending,
                declining,
                comment,
            } => {
                let draft = RsvpDraft {
                    name,
                    attending: attendance(attending, declining),
                    comment,
                };
                // Nothing goes over the wire until the draft is valid.
                let request = draft.validate().map_err(|e| anyhow::anyhow!(e.to_string()))?;

                let client = RsvpClient::new(&config.backend_url)?;
                match client.submit(&request).await {
                    Ok(receipt) => {
                        println!("{}", receipt.toast_title());
                        println!("{}", receipt.toast_description());
                        if receipt.is_update() {
                            println!("(Se actualizó tu confirmación anterior)");
                        }
                    }
                    Err(e) => anyhow::bail!(describe_rsvp_error(&e)),
                }
            }

            RsvpAction::Stats => {
                let client = RsvpClient::new(&config.backend_url)?;
                let stats = client
                    .stats()
                    .await
                    .map_err(|e| anyhow::anyhow!(describe_rsvp_error(&e)))?;

                println!("Confirmaciones: {}", stats.total);
                println!("  Asistirán: {}", stats.attending);
                println!("  No asistirán: {}", stats.not_attending);
                if let Some(rate) = stats.response_rate {
                    println!("  Tasa de respuesta: {}", rate);
                }
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_datetime_accepts_both_separators() {
        assert!(parse_local_datetime("2026-04-01T10:00:00").is_ok());
        assert!(parse_local_datetime("2026-04-01 10:00:00").is_ok());
        assert!(parse_local_datetime("April first").is_err());
    }

    #[test]
    fn test_attendance_flags() {
        assert_eq!(attendance(true, false), Some(true));
        assert_eq!(attendance(false, true), Some(false));
        assert_eq!(attendance(false, false), None);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
