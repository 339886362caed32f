//! CashIQ CLI
//!
//! Command-line front end for the SIP, step-up SIP, SWP and HRA calculators

use anyhow::{anyhow, Context, Result};
use cashiq::config::FieldRange;
use cashiq::form::{self, HraForm, Period};
use cashiq::projection::{sip, step_up, swp};
use cashiq::report::{
    exemption_shares, format_compact, format_inr, format_large, investment_shares, swp_return_percentage,
    withdrawal_shares, write_series_csv, Share,
};
use cashiq::{
    CalculatorConfig, HraBreakdown, ProjectionSummary, SipInput, SipMode, StepUpSipInput, SwpInput, SwpSummary,
};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cashiq", version, about = "SIP, step-up SIP, SWP and HRA exemption calculators")]
struct Cli {
    /// JSON file with calculator defaults and input ranges
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the engine result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly SIP projection
    Sip(SipArgs),
    /// One-time investment projection
    Lumpsum(SipArgs),
    /// SIP whose contribution rises every year
    StepUp(StepUpArgs),
    /// Systematic withdrawal plan
    Swp(SwpArgs),
    /// HRA tax exemption
    Hra(HraArgs),
}

#[derive(Args)]
struct SipArgs {
    /// Monthly contribution, or principal for lumpsum
    #[arg(long)]
    amount: Option<String>,
    /// Expected return, percent per annum
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    years: Option<String>,
    /// Also write the yearly series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct StepUpArgs {
    /// Monthly contribution in year 1
    #[arg(long)]
    amount: Option<String>,
    /// Yearly increase of the contribution, percent
    #[arg(long)]
    step_up: Option<String>,
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    years: Option<String>,
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct SwpArgs {
    /// Initial corpus
    #[arg(long)]
    corpus: Option<String>,
    /// Monthly withdrawal
    #[arg(long)]
    withdrawal: Option<String>,
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    years: Option<String>,
}

#[derive(Args)]
struct HraArgs {
    /// Basic salary
    #[arg(long)]
    basic: Option<String>,
    /// Dearness allowance
    #[arg(long)]
    da: Option<String>,
    /// HRA received
    #[arg(long)]
    hra: Option<String>,
    /// Rent paid
    #[arg(long)]
    rent: Option<String>,
    /// Amounts are yearly rather than monthly
    #[arg(long)]
    yearly: bool,
    /// Living in a metro city (true/false)
    #[arg(long)]
    metro: Option<bool>,
}

fn amount_or(text: &Option<String>, default: f64, range: &FieldRange) -> f64 {
    text.as_deref().map(|t| form::parse_in_range(t, range)).unwrap_or(default)
}

fn years_or(text: &Option<String>, default: u32, range: &FieldRange) -> u32 {
    text.as_deref().map(|t| form::parse_years(t, range)).unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .map_err(|e| anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => CalculatorConfig::default(),
    };

    match &cli.command {
        Command::Sip(args) => run_sip(&config, args, SipMode::Periodic, cli.json),
        Command::Lumpsum(args) => run_sip(&config, args, SipMode::Lumpsum, cli.json),
        Command::StepUp(args) => run_step_up(&config, args, cli.json),
        Command::Swp(args) => run_swp(&config, args, cli.json),
        Command::Hra(args) => run_hra(&config, args, cli.json),
    }
}

fn run_sip(config: &CalculatorConfig, args: &SipArgs, mode: SipMode, json: bool) -> Result<()> {
    let sip_config = &config.sip;
    let defaults = sip_config.defaults_for(mode);
    let amount_range = match mode {
        SipMode::Periodic => &sip_config.contribution,
        SipMode::Lumpsum => &sip_config.principal,
    };

    let input = SipInput {
        periodic_contribution: amount_or(&args.amount, defaults.periodic_contribution, amount_range),
        annual_rate_percent: amount_or(&args.rate, defaults.annual_rate_percent, &sip_config.rate),
        years: years_or(&args.years, defaults.years, &sip_config.years),
        mode,
    };

    let summary = sip::project(&input)?;
    write_csv_if_requested(&summary, &args.csv)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let title = match mode {
        SipMode::Periodic => "Monthly SIP",
        SipMode::Lumpsum => "Lumpsum Investment",
    };
    println!("{} - {} at {}% for {} years", title, format_inr(input.periodic_contribution), input.annual_rate_percent, input.years);
    print_projection(&summary, format_large);
    Ok(())
}

fn run_step_up(config: &CalculatorConfig, args: &StepUpArgs, json: bool) -> Result<()> {
    let step_config = &config.step_up;
    let defaults = step_config.defaults;

    let input = StepUpSipInput::new(
        amount_or(&args.amount, defaults.initial_monthly_contribution, &step_config.contribution),
        amount_or(&args.step_up, defaults.annual_step_up_percent, &step_config.step_up),
        amount_or(&args.rate, defaults.annual_rate_percent, &step_config.rate),
        years_or(&args.years, defaults.years, &step_config.years),
    );

    let summary = step_up::project(&input)?;
    write_csv_if_requested(&summary, &args.csv)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Step-up SIP - {} monthly, +{}% yearly, {}% return, {} years",
        format_inr(input.initial_monthly_contribution),
        input.annual_step_up_percent,
        input.annual_rate_percent,
        input.years
    );
    print_projection(&summary, format_compact);
    Ok(())
}

fn run_swp(config: &CalculatorConfig, args: &SwpArgs, json: bool) -> Result<()> {
    let swp_config = &config.swp;
    let defaults = swp_config.defaults;

    let input = SwpInput::new(
        amount_or(&args.corpus, defaults.initial_corpus, &swp_config.corpus),
        amount_or(&args.withdrawal, defaults.monthly_withdrawal, &swp_config.withdrawal),
        amount_or(&args.rate, defaults.annual_rate_percent, &swp_config.rate),
        years_or(&args.years, defaults.years, &swp_config.years),
    );

    let summary = swp::project(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "SWP - {} corpus, {} monthly withdrawal, {}% return, {} years",
        format_inr(input.initial_corpus),
        format_inr(input.monthly_withdrawal),
        input.annual_rate_percent,
        input.years
    );
    print_swp(&summary);
    Ok(())
}

fn run_hra(config: &CalculatorConfig, args: &HraArgs, json: bool) -> Result<()> {
    let period = if args.yearly { Period::Yearly } else { Period::Monthly };
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let hra_form = HraForm::from_text(
        &text(&args.basic),
        &text(&args.da),
        &text(&args.hra),
        &text(&args.rent),
        period,
        args.metro.unwrap_or(config.hra.is_metro_city),
    );

    let breakdown = hra_form.compute()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    match breakdown {
        Some(breakdown) => print_hra(&breakdown),
        None => println!("Provide basic salary, HRA received and rent paid to calculate the HRA exemption"),
    }
    Ok(())
}

fn write_csv_if_requested(summary: &ProjectionSummary, path: &Option<PathBuf>) -> Result<()> {
    if let Some(path) = path {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        write_series_csv(summary, file).with_context(|| format!("Unable to write {}", path.display()))?;
        println!("Yearly series written to: {}", path.display());
    }
    Ok(())
}

fn print_shares(shares: &[Share]) {
    for share in shares {
        println!("  {:<16} {:>16} {:>4}%", share.label, format_inr(share.value), share.percent);
    }
}

fn print_projection(summary: &ProjectionSummary, headline: fn(f64) -> String) {
    println!("{:>5} {:>18} {:>18} {:>18}", "Year", "Invested", "Value", "Returns");
    println!("{}", "-".repeat(62));
    for point in &summary.series {
        println!(
            "{:>5} {:>18} {:>18} {:>18}",
            point.period_index,
            format_inr(point.contributed),
            format_inr(point.value),
            format_inr(point.gain)
        );
    }

    println!("\nSummary:");
    println!("  Invested Amount: {}", headline(summary.total_contributed));
    println!("  Est. Returns:    {}", headline(summary.total_gain));
    println!("  Total Value:     {}", headline(summary.total_value));
    print_shares(&investment_shares(summary));
}

fn print_swp(summary: &SwpSummary) {
    println!("\nSummary:");
    println!("  Total Investment: {}", format_inr(summary.total_invested));
    println!("  Total Withdrawal: {}", format_inr(summary.total_withdrawn));
    println!("  Final Value:      {}", format_inr(summary.final_value));
    println!("  Final Value vs Investment: {}%", swp_return_percentage(summary));
    print_shares(&withdrawal_shares(summary));
}

fn print_hra(breakdown: &HraBreakdown) {
    let rows = [
        ("Actual HRA received", breakdown.monthly.components.actual_hra, breakdown.yearly.components.actual_hra),
        ("Salary % limit", breakdown.monthly.components.salary_percent_limit, breakdown.yearly.components.salary_percent_limit),
        ("Rent - 10% salary", breakdown.monthly.components.rent_excess, breakdown.yearly.components.rent_excess),
        ("Exempted HRA", breakdown.monthly.exempted_hra, breakdown.yearly.exempted_hra),
        ("Taxable HRA", breakdown.monthly.taxable_hra, breakdown.yearly.taxable_hra),
    ];

    println!("{:<22} {:>14} {:>16}", "Component", "Monthly", "Yearly");
    println!("{}", "-".repeat(54));
    for (label, monthly, yearly) in rows {
        println!("{:<22} {:>14} {:>16}", label, format_inr(monthly), format_inr(yearly));
    }
    println!();
    print_shares(&exemption_shares(&breakdown.monthly));
}
