//! Run a projection for one plan and print the selected-year summary
//!
//! Plan fields come from an optional JSON file, then individual flags override them.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;
use wealth_projection::{
    display::{annual_breakdown, write_breakdown_csv, DisplaySummary, MarketShock},
    plan::{load_input, save_input},
    projection::estimate_future_value,
    project, AccountType, ContributionFrequency, ProjectionInput,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFrequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Annually,
}

impl From<CliFrequency> for ContributionFrequency {
    fn from(value: CliFrequency) -> Self {
        match value {
            CliFrequency::Weekly => ContributionFrequency::Weekly,
            CliFrequency::BiWeekly => ContributionFrequency::BiWeekly,
            CliFrequency::Monthly => ContributionFrequency::Monthly,
            CliFrequency::Quarterly => ContributionFrequency::Quarterly,
            CliFrequency::Annually => ContributionFrequency::Annually,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliAccountType {
    Roth,
    Traditional,
}

impl From<CliAccountType> for AccountType {
    fn from(value: CliAccountType) -> Self {
        match value {
            CliAccountType::Roth => AccountType::Roth,
            CliAccountType::Traditional => AccountType::Traditional,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Project the growth of a recurring investment plan")]
struct Args {
    /// JSON plan file; missing fields use the calculator defaults
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long)]
    starting_balance: Option<f64>,
    #[arg(long)]
    contribution: Option<f64>,
    #[arg(long, value_enum)]
    frequency: Option<CliFrequency>,
    /// Annual return in percent
    #[arg(long)]
    annual_return: Option<f64>,
    /// Annual fees in percent
    #[arg(long)]
    annual_fee: Option<f64>,
    #[arg(long)]
    years: Option<u32>,
    #[arg(long, value_enum)]
    account_type: Option<CliAccountType>,
    /// Marginal tax rate in percent (traditional accounts)
    #[arg(long)]
    tax_rate: Option<f64>,
    /// Report values in today's dollars (true/false)
    #[arg(long)]
    adjust_for_inflation: Option<bool>,
    #[arg(long)]
    inflation_rate: Option<f64>,

    /// Year to summarize (defaults to the last year)
    #[arg(long)]
    year: Option<u32>,
    /// Simulate a market drop on the summarized year
    #[arg(long, num_args = 0..=1, default_missing_value = "0.2")]
    shock: Option<f64>,
    /// Write the annual breakdown to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the full series as JSON instead of the summary
    #[arg(long)]
    json: bool,
    /// Save the resolved plan to this file for later runs
    #[arg(long)]
    save: Option<PathBuf>,
}

impl Args {
    fn resolve_input(&self) -> Result<ProjectionInput> {
        let mut input = match &self.input {
            Some(path) => load_input(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("Failed to load plan from {}", path.display()))?,
            None => ProjectionInput::default(),
        };

        if let Some(v) = self.starting_balance { input.starting_balance = v; }
        if let Some(v) = self.contribution { input.contribution_amount = v; }
        if let Some(v) = self.frequency { input.contribution_frequency = v.into(); }
        if let Some(v) = self.annual_return { input.annual_return_percent = v; }
        if let Some(v) = self.annual_fee { input.annual_fee_percent = v; }
        if let Some(v) = self.years { input.years = v; }
        if let Some(v) = self.account_type { input.account_type = v.into(); }
        if let Some(v) = self.tax_rate { input.marginal_tax_rate = v; }
        if let Some(v) = self.adjust_for_inflation { input.adjust_for_inflation = v; }
        if let Some(v) = self.inflation_rate { input.inflation_rate = v; }

        Ok(input)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = args.resolve_input()?;
    input.validate().context("Invalid plan")?;

    if let Some(path) = &args.save {
        save_input(path, &input)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Failed to save plan to {}", path.display()))?;
        log::info!("Saved plan to {}", path.display());
    }

    let start = Instant::now();
    let points = project(&input);
    log::info!("Projected {} years in {:?}", input.years, start.elapsed());

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let rows = annual_breakdown(&points, input.adjust_for_inflation);
        write_breakdown_csv(BufWriter::new(file), &rows)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("Failed to write breakdown")?;
        println!("Breakdown written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    let year = args.year.unwrap_or(input.years);
    let shock = args.shock.map(MarketShock::new);
    let summary = DisplaySummary::for_year(&points, &input, year, shock)
        .with_context(|| format!("Year {} is outside the 0..={} horizon", year, input.years))?;

    println!(
        "Projected growth for {}{}",
        input.account_type.display_name(),
        if summary.inflation_adjusted { " (adjusted for inflation)" } else { "" }
    );
    println!("  Year {}", summary.year);
    println!("  Projected value: ${:.0}", summary.headline_value());
    println!("  Total invested:  ${:.0}", summary.total_investment);
    println!("  Market growth:   ${:.0}", summary.headline_returns());
    println!("  Lost to taxes:   ${:.0}", summary.lost_to_taxes);
    println!("  Lost to fees:    ${:.0}", summary.lost_to_fees);
    if let Some(fraction) = args.shock {
        println!(
            "  (simulated {:.0}% market drop; unshocked value ${:.0})",
            fraction * 100.0,
            summary.projected_value
        );
    }

    let estimate = estimate_future_value(
        input.starting_balance,
        input.monthly_contribution(),
        input.annual_return_percent,
        input.years,
    );
    println!("\nClosed-form estimate (no fees or taxes): ${:.0}", estimate.future_value);

    println!("\n{:<6} {:>14} {:>14} {:>16}", "Year", "Contributions", "Returns", "End value");
    for row in annual_breakdown(&points, input.adjust_for_inflation) {
        println!(
            "{:<6} {:>14.2} {:>14.2} {:>16.2}",
            row.year, row.contributions, row.returns, row.end_value
        );
    }

    Ok(())
}
