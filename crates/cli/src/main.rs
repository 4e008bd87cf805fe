//! Encontro CLI - command-line front end for the event-registration backend.
//!
//! Each invocation is one app launch: the startup checks run first and a
//! sign-in is required for authenticated commands, exactly as in the mobile
//! front end (no session is read back from disk).
//!
//! # Usage
//!
//! ```bash
//! # Run the startup checks and report readiness
//! encontro bootstrap
//!
//! # Sign in and persist the session mirror
//! encontro login -e ana@example.com -p s3nh4
//!
//! # Browse events
//! encontro events list
//!
//! # Register for an event with a guest
//! encontro register --event 3 -e ana@example.com -p s3nh4 \
//!     --participant "Ana Souza:31" --participant "João"
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "encontro")]
#[command(author, version, about = "Encontro event-registration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the startup checks (version gate + update check)
    Bootstrap,
    /// Sign in and persist the session mirror
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session mirror
    Logout,
    /// Create a new account
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Browse and manage events
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },
    /// Register for an event
    Register {
        /// Event ID
        #[arg(long)]
        event: i64,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Participant as "name" or "name:age"; repeatable
        #[arg(long = "participant", required = true)]
        participants: Vec<String>,
    },
    /// Cancel a registration
    Cancel {
        /// Event ID
        #[arg(long)]
        event: i64,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum EventsAction {
    /// List all events
    List,
    /// Create a new event (admin accounts only)
    Create {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Event title
        #[arg(long)]
        title: String,

        /// Display date, e.g. "18/03/2025"
        #[arg(long)]
        date: String,

        /// Venue, e.g. "São Paulo - SP"
        #[arg(long)]
        location: String,

        /// Display price; empty means free
        #[arg(long, default_value = "")]
        price: String,

        /// Cover image URL
        #[arg(long)]
        image_url: String,

        /// Long-form description
        #[arg(long)]
        description: Option<String>,

        /// Headline attractions
        #[arg(long)]
        attractions: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let ctx = commands::Context::from_env()?;

    match cli.command {
        Commands::Bootstrap => commands::bootstrap::check(&ctx).await,
        Commands::Login { email, password } => {
            commands::auth::login(&ctx, &email, password).await
        }
        Commands::Logout => commands::auth::logout(&ctx).await,
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::signup(&ctx, &name, &email, password).await,
        Commands::Events { action } => match action {
            EventsAction::List => commands::events::list(&ctx).await,
            EventsAction::Create {
                email,
                password,
                title,
                date,
                location,
                price,
                image_url,
                description,
                attractions,
            } => {
                commands::events::create(
                    &ctx,
                    &email,
                    password,
                    commands::events::CreateArgs {
                        title,
                        date,
                        location,
                        price,
                        image_url,
                        description,
                        attractions,
                    },
                )
                .await
            }
        },
        Commands::Register {
            event,
            email,
            password,
            participants,
        } => commands::events::register(&ctx, event, &email, password, &participants).await,
        Commands::Cancel {
            event,
            email,
            password,
        } => commands::events::cancel(&ctx, event, &email, password).await,
    }
}
