//! Command-line definition and dispatch.

use std::io::Write;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rentroll_core::lease::{
    Frequency, LeaseContract, PaymentSchedule, ScheduleGenerator, SchedulePolicy,
};
use rentroll_shared::{AppConfig, AppError, AppResult};
use rust_decimal::Decimal;
use tracing::info;

use crate::output;

#[derive(Parser, Debug)]
#[command(name = "rentroll")]
#[command(about = "Lease payment schedule generator.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the payment schedule for a lease
    #[command(alias = "s")]
    Schedule {
        #[command(flatten)]
        contract: ContractArgs,
        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show what is due and overdue on a lease as of a date
    Status {
        #[command(flatten)]
        contract: ContractArgs,
        /// Date to evaluate the lease at (YYYY-MM-DD)
        #[arg(long)]
        as_of: NaiveDate,
        /// Amount paid so far
        #[arg(long, default_value = "0")]
        paid: Decimal,
    },
    /// List accepted payment frequency tokens
    Frequencies,
}

/// Raw lease terms as typed by the user.
#[derive(Args, Debug)]
pub struct ContractArgs {
    /// Total contract amount
    #[arg(long, allow_negative_numbers = true)]
    pub total: Decimal,
    /// First day of the lease (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day of the lease, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
    /// Payment frequency, e.g. monthly, quarterly, one-time
    #[arg(long, short)]
    pub frequency: String,
}

impl ContractArgs {
    fn generate(&self, config: &AppConfig) -> AppResult<PaymentSchedule> {
        let contract = LeaseContract::parse(self.total, self.start, self.end, &self.frequency)?;
        let generator = ScheduleGenerator::new(SchedulePolicy::try_from(&config.schedule)?);
        let schedule = generator.generate(&contract)?;
        info!(
            frequency = %contract.frequency,
            payments = schedule.len(),
            total = %contract.total_amount,
            "Payment schedule generated"
        );
        Ok(schedule)
    }
}

/// Runs a command, writing its report to `out`.
pub fn run(command: Commands, config: &AppConfig, out: &mut impl Write) -> AppResult<()> {
    match command {
        Commands::Schedule { contract, json } => {
            let schedule = contract.generate(config)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &schedule)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                writeln!(out)?;
            } else {
                write!(out, "{}", output::ScheduleTable(&schedule))?;
            }
        }
        Commands::Status {
            contract,
            as_of,
            paid,
        } => {
            let schedule = contract.generate(config)?;
            write!(
                out,
                "{}",
                output::StatusReport {
                    schedule: &schedule,
                    as_of,
                    paid,
                }
            )?;
        }
        Commands::Frequencies => {
            write!(out, "{}", output::FrequencyList(&Frequency::ALL))?;
        }
    }
    Ok(())
}
