// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MoneyMate - personal finance from the terminal.
//!
//! This is the binary entry point. Every command drives one screen of
//! `moneymate-app` and prints its final view state.

mod categories;
mod output;
mod planning;
mod reports;
mod session;
mod wallets;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use moneymate_app::AppContainer;
use moneymate_config::MoneyMateConfig;
use moneymate_core::Outcome;

use crate::categories::KindArg;
use crate::output::Output;
use crate::planning::LimitCommand;
use crate::reports::{PeriodArg, ReportOptions};
use crate::session::Registration;
use crate::wallets::WalletCommand;

/// MoneyMate - personal finance from the terminal.
#[derive(Parser, Debug)]
#[command(name = "moneymate", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the raw view state as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colours.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<String>,
    },
    /// Sign out and forget the stored session.
    Logout,
    /// Show the stored session without contacting the server.
    Whoami,
    /// Show the signed-in user's profile.
    Profile,
    /// Upload a new avatar image, or remove the current one.
    Avatar {
        #[arg(required_unless_present = "remove")]
        image: Option<PathBuf>,
        #[arg(long, conflicts_with = "image")]
        remove: bool,
    },
    /// Wallets and balances.
    Wallets {
        #[command(subcommand)]
        command: Option<WalletCommand>,
    },
    /// List transactions.
    Transactions {
        #[arg(long, conflicts_with = "tag")]
        wallet: Option<i64>,
        #[arg(long)]
        tag: Option<i64>,
    },
    /// Move money between two wallets.
    Transfer {
        #[arg(long)]
        from: i64,
        #[arg(long)]
        to: i64,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// List categories.
    Categories {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// List tags, or create one.
    Tags {
        #[arg(long)]
        create: Option<String>,
    },
    /// Show this month's budget; pass limits to change them.
    Budget {
        #[arg(long)]
        monthly: Option<String>,
        #[arg(long)]
        daily: Option<String>,
    },
    /// Manage per-category monthly limits.
    Limit {
        #[command(subcommand)]
        command: LimitCommand,
    },
    /// Long-term goals and the monthly savings target.
    Goals,
    /// Show the monthly savings target, or set it.
    Savings {
        #[arg(long)]
        target: Option<String>,
    },
    /// Monthly summary, trends and category reports.
    Report {
        /// Months covered by the trend charts (1-12).
        #[arg(long, default_value_t = moneymate_app::screens::DEFAULT_TREND_MONTHS)]
        months: u32,
        /// Category breakdown from this day (YYYY-MM-DD).
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Compare a month (YYYY-MM) with the one before.
        #[arg(long)]
        compare: Option<String>,
        /// Average spending per category.
        #[arg(long, value_enum)]
        average: Option<PeriodArg>,
    },
    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate configuration and print the effective values.
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => moneymate_config::load_and_validate_path(path),
        None => moneymate_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            moneymate_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.app.log_level);
    let out = Output::new(cli.json, cli.plain);

    if let Commands::Config {
        command: ConfigCommand::Check,
    } = &cli.command
    {
        print_config(&out, &config);
        return ExitCode::SUCCESS;
    }

    let container = match AppContainer::open(&config).await {
        Ok(container) => container,
        Err(e) => {
            eprintln!("moneymate: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &container, &out).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("moneymate: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, container: &AppContainer, out: &Output) -> Outcome<bool> {
    let ok = match command {
        Commands::Login { email } => session::run_login(container, out, email).await?,
        Commands::Register {
            email,
            full_name,
            currency,
            phone,
            birth_date,
        } => {
            let registration = Registration {
                email,
                full_name,
                currency,
                phone_number: phone,
                date_of_birth: birth_date,
            };
            session::run_register(container, out, registration).await?
        }
        Commands::Logout => session::run_logout(container, out).await,
        Commands::Whoami => session::run_whoami(container, out),
        Commands::Profile => session::run_profile(container, out).await,
        Commands::Avatar { image, .. } => {
            session::run_avatar(container, out, image).await?
        }
        Commands::Wallets { command } => {
            wallets::run_wallets(container, out, command.unwrap_or(WalletCommand::List)).await
        }
        Commands::Transactions { wallet, tag } => {
            wallets::run_transactions(container, out, wallet, tag).await
        }
        Commands::Transfer {
            from,
            to,
            amount,
            note,
        } => wallets::run_transfer(container, out, from, to, amount, note).await,
        Commands::Categories { kind } => categories::run_categories(container, out, kind).await,
        Commands::Tags { create } => categories::run_tags(container, out, create).await,
        Commands::Budget { monthly, daily } => {
            planning::run_budget(container, out, monthly, daily).await
        }
        Commands::Limit { command } => planning::run_limit(container, out, command).await,
        Commands::Goals => planning::run_goals(container, out).await,
        Commands::Savings { target } => planning::run_savings(container, out, target).await,
        Commands::Report {
            months,
            from,
            to,
            compare,
            average,
        } => {
            let options = ReportOptions {
                months,
                period: from.zip(to),
                compare,
                average: average.map(Into::into),
            };
            reports::run_report(container, out, options).await
        }
        Commands::Config { .. } => true,
    };
    Ok(ok)
}

fn print_config(out: &Output, config: &MoneyMateConfig) {
    out.header("config");
    out.line(out.ok("configuration is valid"));
    out.row("Base URL", &config.api.base_url);
    out.row("Refresh path", &config.api.refresh_path);
    out.row(
        "Timeouts",
        format!(
            "connect {}s, request {}s",
            config.api.connect_timeout_secs, config.api.request_timeout_secs
        ),
    );
    if config.storage.in_memory {
        out.row("Token store", "in memory");
    } else {
        out.row("Token store", &config.storage.token_store_path);
    }
    out.row("Currency", &config.app.default_currency);
    out.row("Log level", &config.app.log_level);
    println!();
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moneymate={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
