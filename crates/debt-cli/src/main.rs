//! Debt lookup and reporting CLI.
//!
//! Each subcommand is one interaction: a blocking sequence of API
//! calls that either prints its report or surfaces a single plain
//! error message. Nothing is retried automatically and no state
//! survives between invocations.

mod config;
mod error;
mod service;

use bitable::BitableClient;
use clap::{Parser, Subcommand, ValueEnum};
use debt_core::{totals_by_month, unpaid_by_debtor, DebtRow, DebtStatus};
use tracing::error;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::service::{DebtService, LookupReport};

#[derive(Debug, Parser)]
#[command(name = "debt-cli")]
#[command(about = "Look up and report debt records from a Lark Bitable base")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a person's debts by phone number
    Lookup {
        /// Phone number to look up (Vietnamese mobile format)
        #[arg(long)]
        phone: String,

        /// Which rows to show
        #[arg(long, value_enum, default_value = "unpaid")]
        status: StatusFilter,

        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Monthly owed/owing totals for one person
    Monthly {
        /// Phone number to look up (Vietnamese mobile format)
        #[arg(long)]
        phone: String,
    },

    /// Full debt table with per-debtor ranking (requires admin login)
    Admin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },
}

/// Row filter applied for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatusFilter {
    Unpaid,
    Paid,
    All,
}

impl StatusFilter {
    fn keeps(&self, row: &DebtRow) -> bool {
        match self {
            StatusFilter::Unpaid => row.status == DebtStatus::Unpaid,
            StatusFilter::Paid => row.status == DebtStatus::Paid,
            StatusFilter::All => true,
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Interaction failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let client = BitableClient::new(config.bitable.clone())?;
    let service = DebtService::new(client, &config.config_table, &config.debt_table);

    match cli.command {
        Command::Lookup {
            phone,
            status,
            json,
        } => match service.lookup(&phone, &config.payment).await? {
            Some(report) if json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Some(report) => print_report(&report, status, config.contact_url.as_deref()),
            None => println!("No debt information found for this phone number."),
        },
        Command::Monthly { phone } => match service.lookup(&phone, &config.payment).await? {
            Some(report) => print_monthly(&report),
            None => println!("No debt information found for this phone number."),
        },
        Command::Admin { username, password } => {
            if !config.admin.verify(&username, &password) {
                return Err(AppError::LoginFailed);
            }

            let rows = service.all_debts().await?;
            print_admin(&rows);
        }
    }

    Ok(())
}

fn print_report(report: &LookupReport, status: StatusFilter, contact_url: Option<&str>) {
    println!("Hello {}!", report.debtor.display_name);
    println!();

    let shown: Vec<&DebtRow> = report.rows.iter().filter(|r| status.keeps(r)).collect();
    if shown.is_empty() {
        println!("No matching debt records.");
    } else {
        for row in &shown {
            print_row(row);
        }
    }

    println!();
    println!("Remaining to pay: {}", format_vnd(report.total_unpaid));

    if let Some(payment) = &report.payment {
        println!();
        println!("QR code: {}", payment.qr_url());
        println!("Payment details:");
        println!("- Bank: {}", payment.bank);
        println!("- Account: {}", payment.account);
        println!("- Amount: {}", format_vnd(payment.amount as f64));
        println!("- Description: {}", payment.description);
        if let Some(url) = contact_url {
            println!("- Contact: {}", url);
        }
    }
}

fn print_row(row: &DebtRow) {
    println!(
        "- {} | {} | {} [{}]",
        row.debt_date_display(),
        format_vnd(row.amount),
        row.name,
        row.status
    );
    if !row.note.is_empty() {
        println!("    note: {}", row.note);
    }
}

fn print_monthly(report: &LookupReport) {
    println!("Monthly totals for {}:", report.debtor.display_name);
    println!();

    let months = totals_by_month(&report.rows);
    if months.is_empty() {
        println!("No dated debt records.");
        return;
    }

    for (month, totals) in &months {
        println!(
            "{}  owed to me: {:>16}  I owe: {:>16}",
            month,
            format_vnd(totals.owed_to_me),
            format_vnd(totals.i_owe)
        );
    }
}

fn print_admin(rows: &[DebtRow]) {
    println!("Debt table ({} records):", rows.len());
    println!();

    for row in rows {
        println!(
            "- {} | {} | {} | {} [{}]",
            row.debt_date_display(),
            row.debtor,
            format_vnd(row.amount),
            row.name,
            row.status
        );
    }

    println!();
    println!("Remaining to pay: {}", format_vnd(debt_core::total_unpaid(rows)));

    let ranking = unpaid_by_debtor(rows);
    if !ranking.is_empty() {
        println!();
        println!("Outstanding by debtor (largest last):");
        for entry in &ranking {
            println!("  {:<12} {}", entry.debtor, format_vnd(entry.total));
        }
    }
}

/// Format an amount as whole VNĐ with thousands separators.
fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{} VNĐ", grouped)
    } else {
        format!("{} VNĐ", grouped)
    }
}
