//! Command-line surface of the `barberbook` binary.
//!
//! Every command stands in for a screen of the booking site: it mounts the
//! matching page controller, applies the requested action and prints the
//! resulting page.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "barberbook")]
#[command(author, version, about = "Barbershop booking client", long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and {RUN_ENV}.toml
    #[arg(short, long, env = "CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. https://api.example.com (overrides the config)
    #[arg(long, env = "BARBERBOOK_API_URL")]
    pub api_url: Option<String>,

    /// Override log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Go to the page for the current role
    Home,

    /// Log in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Register as a barber
        #[arg(long)]
        provider: bool,
    },

    /// Clear the stored session
    Logout,

    /// Show the header for the current session
    Whoami,

    /// Customer dashboard: appointments and the booking card
    Dashboard(SlotArgs),

    /// Book a slot, on the dashboard or with a given barber
    Book {
        /// Barber id; the first listed barber when omitted
        #[arg(long)]
        provider: Option<String>,
        /// Slot instant exactly as listed
        #[arg(long)]
        slot: String,
        #[command(flatten)]
        selection: SlotArgs,
    },

    /// Barber tools
    #[command(subcommand)]
    Provider(ProviderCommands),

    /// Open a route such as /dashboard or /book/{providerId}
    Open {
        path: String,
        #[command(flatten)]
        selection: SlotArgs,
    },
}

/// Service and date selection of a booking form.
#[derive(Args, Debug, Default, Clone)]
pub struct SlotArgs {
    /// Service id; the first service when omitted
    #[arg(long)]
    pub service: Option<String>,
    /// Date (YYYY-MM-DD); tomorrow when omitted
    #[arg(long)]
    pub date: Option<String>,
    /// Also list the free slots
    #[arg(long)]
    pub slots: bool,
}

#[derive(Subcommand, Debug)]
pub enum ProviderCommands {
    /// Agenda, services, availability and blocks
    Dashboard {
        /// Agenda day (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<String>,
    },

    /// Weekly availability
    #[command(subcommand)]
    Availability(AvailabilityCommands),

    /// Time off
    #[command(subcommand)]
    Block(BlockCommands),

    /// Service catalogue
    #[command(subcommand)]
    Service(ServiceCommands),

    /// Booking limits, services and slot preview
    Settings,

    /// Booking limits
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Preview the slots customers will see
    Slots(SlotArgs),
}

#[derive(Subcommand, Debug)]
pub enum AvailabilityCommands {
    Add {
        /// 0 (Sunday) to 6
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=6))]
        weekday: u8,
        #[arg(long, default_value = "09:00")]
        start: String,
        #[arg(long, default_value = "18:00")]
        end: String,
    },
    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum BlockCommands {
    Add {
        /// Start, YYYY-MM-DDTHH:MM
        #[arg(long)]
        start: String,
        /// End, YYYY-MM-DDTHH:MM
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    Add {
        #[arg(long)]
        name: String,
        /// Minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,
        /// Price in R$
        #[arg(long, default_value_t = 50.0)]
        price: f64,
    },
    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Set {
        #[arg(long)]
        max_booking_days: Option<u32>,
        #[arg(long)]
        cancel_booking_hours: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_book_with_selection() {
        let cli = Cli::try_parse_from([
            "barberbook",
            "--api-url",
            "http://localhost:3000",
            "book",
            "--slot",
            "2025-05-06T12:00:00.000Z",
            "--service",
            "s1",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
        match cli.command {
            Commands::Book {
                provider,
                slot,
                selection,
            } => {
                assert!(provider.is_none());
                assert_eq!(slot, "2025-05-06T12:00:00.000Z");
                assert_eq!(selection.service.as_deref(), Some("s1"));
                assert!(selection.date.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_availability_defaults_and_range() {
        let cli = Cli::try_parse_from(["barberbook", "provider", "availability", "add"]).unwrap();
        match cli.command {
            Commands::Provider(ProviderCommands::Availability(AvailabilityCommands::Add {
                weekday,
                start,
                end,
            })) => {
                assert_eq!(weekday, 1);
                assert_eq!(start, "09:00");
                assert_eq!(end, "18:00");
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Cli::try_parse_from([
            "barberbook",
            "provider",
            "availability",
            "add",
            "--weekday",
            "7"
        ])
        .is_err());
    }
}
