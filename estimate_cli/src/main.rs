//! # estimate
//!
//! Command line front end for `estimate_core`. Results are printed to stdout
//! as JSON; logs and errors go to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use estimate_core::conversion::{Quantity, Unit};
use estimate_core::input::parse_number;
use estimate_core::materials::{MasonryUnit, MixGrade, MortarBag};
use estimate_core::{load_settings, CalcError, CalcResult, CalculationItem, EstimateSettings, UnitSystem};

#[derive(Parser)]
#[command(name = "estimate")]
#[command(about = "Construction quantity and cost estimator", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Unit system, overrides the settings file
    #[arg(long, global = true)]
    units: Option<UnitsArg>,

    /// Default wastage percent for inputs that leave it unset
    #[arg(long, global = true, allow_hyphen_values = true)]
    wastage: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => UnitSystem::Metric,
            UnitsArg::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a calculation described by a JSON file
    Run {
        /// Input file, or "-" for stdin
        file: String,
    },

    /// Convert a value between two units of the same family
    Convert {
        /// Read with the settings' parse policy
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit (e.g., "ft", "m3", "lb")
        from: String,
        /// Target unit
        to: String,
    },

    /// List the nominal concrete mix grades
    Mixes,

    /// List mortar yields per bag for each masonry unit
    Yields,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Ok(details) = serde_json::to_string_pretty(&e) {
            eprintln!("{}", details);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CalcResult<()> {
    let mut settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => EstimateSettings::default(),
    };
    if let Some(units) = cli.units {
        settings.unit_system = units.into();
    }
    if let Some(text) = &cli.wastage {
        settings = settings.with_wastage_text(text);
    }
    tracing::info!(unit_system = %settings.unit_system, "settings ready");

    let output = match &cli.command {
        Commands::Run { file } => run_calculation(file, &settings)?,
        Commands::Convert { value, from, to } => {
            let value = parse_number(value, "value", settings.parse_policy)?;
            convert_value(value, from, to)?
        }
        Commands::Mixes => mix_table(),
        Commands::Yields => yield_table(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_calculation(file: &str, settings: &EstimateSettings) -> CalcResult<serde_json::Value> {
    let text = read_input(file)?;
    let item: CalculationItem = serde_json::from_str(&text)?;
    tracing::info!(calc_type = item.calc_type(), label = item.label(), "running");
    let output = item.run(settings)?;
    Ok(serde_json::to_value(&output)?)
}

fn read_input(file: &str) -> CalcResult<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        Ok(text)
    } else {
        std::fs::read_to_string(Path::new(file)).map_err(|e| CalcError::file_error("read", file, e.to_string()))
    }
}

fn convert_value(value: f64, from: &str, to: &str) -> CalcResult<serde_json::Value> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    let converted = Quantity::new(value, from).convert_to(to)?;
    Ok(json!({
        "from": Quantity::new(value, from),
        "to": converted,
        "display": converted.to_string(),
    }))
}

fn mix_table() -> serde_json::Value {
    let rows: Vec<_> = MixGrade::ALL
        .iter()
        .map(|grade| {
            let spec = grade.spec();
            json!({
                "grade": grade,
                "ratio": grade.ratio_label(),
                "water_cement_ratio": spec.water_cement_ratio,
            })
        })
        .collect();
    json!(rows)
}

fn yield_table() -> serde_json::Value {
    let rows: Vec<_> = MasonryUnit::ALL
        .iter()
        .map(|unit| {
            let per_bag: serde_json::Map<String, serde_json::Value> = MortarBag::ALL
                .iter()
                .map(|bag| {
                    let y = unit.mortar_yield(*bag);
                    (
                        bag.display_name().to_string(),
                        json!({ "range": y.range_label(), "average": y.average }),
                    )
                })
                .collect();
            json!({ "unit": unit, "name": unit.display_name(), "yield_per_bag": per_bag })
        })
        .collect();
    json!(rows)
}
