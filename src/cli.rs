//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_instrument_adapter::JsonInstrumentAdapter;
use crate::adapters::json_period_adapter::JsonPeriodAdapter;
use crate::adapters::svg_chart::SvgChart;
use crate::domain::chart::panels_for;
use crate::domain::config_validation::{validate_chart_config, validate_data_config};
use crate::domain::dataset::Dataset;
use crate::domain::error::CotError;
use crate::domain::highlight::{self, HighlightStyle};
use crate::domain::period::{parse_periods, PeriodSpec};
use crate::domain::range_resolver::{resolve, ResolvedInterval};
use crate::domain::report_type::{
    type_category_options, BaseType, DatasetCode, Measure, SubCategory,
};
use crate::domain::working_days::{seasonal_ranges, DEFAULT_SEASONAL_WINDOWS};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::{DataPort, ReportQuery};
use crate::ports::instrument_port::InstrumentStore;
use crate::ports::period_port::PeriodSource;

#[derive(Parser, Debug)]
#[command(name = "cotmonitor", about = "Positioning report monitor with seasonal highlights")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by the commands that load a report.
#[derive(clap::Args, Debug, Clone)]
pub struct DataArgs {
    #[arg(short, long)]
    pub config: PathBuf,
    /// Read this CSV instead of the report selected in [data]
    #[arg(short, long)]
    pub data: Option<PathBuf>,
    /// JSON file of highlight periods, used instead of [highlight.*] sections
    #[arg(short, long)]
    pub periods: Option<PathBuf>,
    #[arg(long)]
    pub from: Option<NaiveDate>,
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Also highlight the default early-month working-day windows
    #[arg(long)]
    pub seasonal: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print resolved highlight ranges
    Ranges {
        #[command(flatten)]
        args: DataArgs,
    },
    /// Render highlighted SVG charts
    Chart {
        #[command(flatten)]
        args: DataArgs,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show row count and coverage of the selected report
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// List type-category options for a report variant
    TypeCategory {
        #[arg(long)]
        base: BaseType,
        #[arg(long)]
        legacy: bool,
        #[arg(long, default_value = "ALL")]
        measure: Measure,
        #[arg(long = "sub")]
        sub_categories: Vec<SubCategory>,
    },
    /// Manage the instrument mapping file
    Instruments {
        #[arg(short, long)]
        file: PathBuf,
        #[command(subcommand)]
        action: InstrumentAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum InstrumentAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
    },
    Remove {
        #[arg(long)]
        name: String,
        /// Instrument currently in use, which may not be removed
        #[arg(long)]
        selected: Option<String>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Ranges { args } => run_ranges(&args),
        Command::Chart { args, output } => run_chart(&args, output.as_deref()),
        Command::Info { config, data } => run_info(&config, data.as_deref()),
        Command::TypeCategory {
            base,
            legacy,
            measure,
            sub_categories,
        } => {
            for option in type_category_options(base, legacy, measure, &sub_categories) {
                println!("{}", option);
            }
            Ok(())
        }
        Command::Instruments { file, action } => {
            run_instruments(&JsonInstrumentAdapter::new(file), action)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, CotError> {
    FileConfigAdapter::from_file(path).map_err(|e| CotError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn required(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, CotError> {
    config
        .get_string(section, key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CotError::ConfigMissing {
            section: section.into(),
            key: key.into(),
        })
}

/// Build the report query from `[data]`, resolving an instrument name
/// through the instrument store when one is configured. With a store but
/// neither `instrument` nor `contract_code`, the store's first entry is used.
pub fn build_query(
    config: &dyn ConfigPort,
    instruments: Option<&dyn InstrumentStore>,
) -> Result<ReportQuery, CotError> {
    let dataset_code = required(config, "data", "dataset_code")?;
    let type_category = required(config, "data", "type_category")?;

    let instrument = config
        .get_string("data", "instrument")
        .filter(|s| !s.trim().is_empty());
    let contract_code = match (instrument, instruments) {
        (Some(name), Some(store)) => {
            let mapping = store.load()?;
            mapping
                .code_for(name.trim())
                .map(str::to_string)
                .ok_or(CotError::UnknownInstrument(name))?
        }
        (None, Some(store)) => match required(config, "data", "contract_code") {
            Ok(code) => code,
            Err(missing) => {
                let mapping = store.load()?;
                let (name, code) = mapping.first().ok_or(missing)?;
                eprintln!("Using default instrument {}", name);
                code.to_string()
            }
        },
        _ => required(config, "data", "contract_code")?,
    };

    Ok(ReportQuery {
        dataset_code,
        contract_code,
        type_category,
    })
}

/// Load the dataset from `--data`, or from the CSV directory in `[data]`.
pub fn load_dataset(
    config: &dyn ConfigPort,
    data_path: Option<&Path>,
) -> Result<Dataset, CotError> {
    if let Some(path) = data_path {
        eprintln!("Loading data from {}", path.display());
        return CsvAdapter::read_file(path);
    }

    validate_data_config(config)?;
    let store = config
        .get_string("data", "instruments_file")
        .map(|f| JsonInstrumentAdapter::new(PathBuf::from(f)));
    let query = build_query(config, store.as_ref().map(|s| s as &dyn InstrumentStore))?;
    let dir = required(config, "data", "dir")?;

    eprintln!(
        "Loading {} contract {} ({})",
        query.dataset_code, query.contract_code, query.type_category
    );
    CsvAdapter::new(PathBuf::from(dir)).fetch_report(&query)
}

/// Periods from the JSON file when given, else from `[highlight.*]` sections.
pub fn load_periods(
    config: &FileConfigAdapter,
    periods_path: Option<&Path>,
) -> Result<Vec<PeriodSpec>, CotError> {
    let raw = match periods_path {
        Some(path) => JsonPeriodAdapter::new(path.to_path_buf()).raw_periods()?,
        None => config.raw_periods()?,
    };
    let periods = parse_periods(&raw);
    if periods.len() < raw.len() {
        eprintln!(
            "warning: {} of {} highlight periods are malformed and were skipped",
            raw.len() - periods.len(),
            raw.len()
        );
    }
    Ok(periods)
}

fn apply_date_filter(data: Dataset, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Dataset {
    match (from, to) {
        (None, None) => data,
        (from, to) => data.between(
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        ),
    }
}

struct Prepared {
    config: FileConfigAdapter,
    data: Dataset,
    periods: Vec<PeriodSpec>,
    seasonal: Vec<ResolvedInterval>,
}

fn prepare(args: &DataArgs) -> Result<Prepared, CotError> {
    eprintln!("Loading config from {}", args.config.display());
    let config = load_config(&args.config)?;
    let data = load_dataset(&config, args.data.as_deref())?;
    let data = apply_date_filter(data, args.from, args.to);
    let periods = load_periods(&config, args.periods.as_deref())?;
    let seasonal = if args.seasonal {
        seasonal_ranges(&data, &DEFAULT_SEASONAL_WINDOWS)
    } else {
        Vec::new()
    };
    Ok(Prepared {
        config,
        data,
        periods,
        seasonal,
    })
}

fn run_ranges(args: &DataArgs) -> Result<(), CotError> {
    let prepared = prepare(args)?;
    let ranges = highlight_ranges(&prepared.data, &prepared.periods, &prepared.seasonal);

    for range in &ranges {
        println!("{}", range);
    }
    eprintln!(
        "{} ranges from {} periods over {} rows",
        ranges.len(),
        prepared.periods.len(),
        prepared.data.len()
    );
    Ok(())
}

/// Intervals to shade: resolved `periods` followed by `extra_ranges`.
pub fn highlight_ranges(
    data: &Dataset,
    periods: &[PeriodSpec],
    extra_ranges: &[ResolvedInterval],
) -> Vec<ResolvedInterval> {
    let mut ranges = resolve(data, periods);
    ranges.extend_from_slice(extra_ranges);
    if ranges.is_empty() {
        log::info!("No recurring highlight periods defined.");
    }
    ranges
}

/// Render one highlighted chart per panel into `output_dir`.
pub fn render_charts(
    config: &dyn ConfigPort,
    data: &Dataset,
    periods: &[PeriodSpec],
    extra_ranges: &[ResolvedInterval],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, CotError> {
    validate_chart_config(config)?;
    let width = config.get_double("chart", "width", 900.0);
    let height = config.get_double("chart", "height", 320.0);
    let dataset_code = config
        .get_string("data", "dataset_code")
        .and_then(|c| c.parse::<DatasetCode>().ok());

    fs::create_dir_all(output_dir)?;
    let style = HighlightStyle::default();
    let ranges = highlight_ranges(data, periods, extra_ranges);
    let mut written = Vec::new();

    for panel in panels_for(dataset_code, data) {
        let mut chart = SvgChart::with_size(&panel.title, width, height);
        for column in &panel.columns {
            chart.add_series(column, data.series(column));
        }
        highlight::shade_ranges(&mut chart, &ranges, &style);

        let path = output_dir.join(format!("{}.svg", panel.slug()));
        fs::write(&path, chart.render())?;
        written.push(path);
    }
    Ok(written)
}

fn run_chart(args: &DataArgs, output: Option<&Path>) -> Result<(), CotError> {
    let prepared = prepare(args)?;
    let output = output.unwrap_or_else(|| Path::new("charts"));

    let written = render_charts(
        &prepared.config,
        &prepared.data,
        &prepared.periods,
        &prepared.seasonal,
        output,
    )?;
    if written.is_empty() {
        eprintln!("No chartable columns found");
    }
    for path in &written {
        eprintln!("Chart written to: {}", path.display());
    }
    Ok(())
}

fn run_info(config_path: &Path, data_path: Option<&Path>) -> Result<(), CotError> {
    let config = load_config(config_path)?;
    let data = load_dataset(&config, data_path)?;
    match data.coverage() {
        Some((min, max)) => {
            println!("{} rows, {} to {}", data.len(), min, max);
            let fields: Vec<String> = data.field_names().into_iter().collect();
            println!("fields: {}", fields.join(", "));
        }
        None => eprintln!("no data found"),
    }
    Ok(())
}

pub fn run_instruments(
    store: &dyn InstrumentStore,
    action: InstrumentAction,
) -> Result<(), CotError> {
    let mut mapping = store.load()?;
    match action {
        InstrumentAction::List => {
            for (name, code) in mapping.iter() {
                println!("{}\t{}", name, code);
            }
        }
        InstrumentAction::Add { name, code } => {
            mapping.add(&name, &code)?;
            store.save(&mapping)?;
            eprintln!("Added: {} ({})", name.trim(), code.trim());
        }
        InstrumentAction::Remove { name, selected } => {
            mapping.remove(&name, selected.as_deref())?;
            store.save(&mapping)?;
            eprintln!("Removed: {}", name);
        }
    }
    Ok(())
}
