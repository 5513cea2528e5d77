use cidr_calc::config::Config;
use cidr_calc::evaluate;
use cidr_calc::output::{render_json, render_ranges, render_report};
use cidr_calc::processing::Step;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// IPv4 CIDR calculator: netmask, wildcard, network, broadcast and block size.
#[derive(Parser, Debug)]
#[command(name = "cidr-calc", version, about)]
struct Cli {
    /// CIDR blocks such as 192.168.1.0/24 (defaults to CIDR_CALC_DEFAULT_CIDR)
    cidrs: Vec<String>,

    /// Display base for addresses: 10 or 2 (defaults to CIDR_CALC_BASE)
    #[arg(short, long)]
    base: Option<u32>,

    /// Apply a stepping operation before display; repeat to chain
    #[arg(short, long = "step", value_name = "OP")]
    steps: Vec<Step>,

    /// Print JSON instead of the terminal summary
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:5})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::warn!("Log config {path} not found, logging warnings to stderr");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");
    log::debug!("config: {config:?}");

    let base = config.resolve_base(cli.base)?;
    log::debug!("display base: {base}");
    if cli.no_color {
        colored::control::set_override(false);
    }
    let inputs = if cli.cidrs.is_empty() {
        vec![config.default_cidr.clone()]
    } else {
        cli.cidrs.clone()
    };

    let evaluation = evaluate(&inputs, &cli.steps, base);

    if cli.json {
        println!(
            "{}",
            render_json(&evaluation.reports, &evaluation.ranges, &evaluation.overlaps)?
        );
    } else {
        let color = !cli.no_color;
        for report in &evaluation.reports {
            println!("{}", render_report(report, color));
        }
        if evaluation.ranges.len() > 1 {
            print!("{}", render_ranges(&evaluation.ranges, &evaluation.overlaps, color));
        }
    }

    for (input, e) in &evaluation.failures {
        eprintln!("{} {input}: {e}", "error".red());
    }
    if !evaluation.failures.is_empty() {
        return Err(format!("{} input(s) rejected", evaluation.failures.len()).into());
    }
    Ok(())
}
