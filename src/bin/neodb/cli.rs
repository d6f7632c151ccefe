use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "neodb",
    about = "Explore near-Earth objects and their close approaches to Earth",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub data: DataOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a single NEO by designation or name
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Select close approaches matching the given criteria
    #[command(visible_alias = "q")]
    Query(QueryArgs),
}

/// Data sources and options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Data Sources")]
pub struct DataOptions {
    /// NEO catalog (CSV)
    #[arg(
        long,
        value_name = "FILE",
        default_value = "data/neos.csv",
        global = true
    )]
    pub neofile: PathBuf,

    /// Close-approach data (JSON)
    #[arg(long, value_name = "FILE", default_value = "data/cad.json", global = true)]
    pub cad: PathBuf,

    /// Let the last NEO win when a designation or name repeats
    #[arg(long, global = true)]
    pub allow_duplicates: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the NEO
    #[arg(short, long, value_name = "DESIGNATION")]
    pub pdes: Option<String>,

    /// IAU name of the NEO (case-sensitive)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Also list every close approach of the NEO
    #[arg(long)]
    pub verbose_approaches: bool,
}

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub dates: DateOptions,

    #[command(flatten)]
    pub bounds: BoundOptions,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long, value_name = "N", default_value = "10")]
    pub limit: usize,

    /// Write results to FILE (.csv or .json) instead of printing them
    #[arg(short, long, value_name = "FILE")]
    pub outfile: Option<PathBuf>,
}

#[derive(Args)]
#[command(next_help_heading = "Date Filters")]
pub struct DateOptions {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE", conflicts_with_all = ["start_date", "end_date"])]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Args)]
#[command(next_help_heading = "Approach and NEO Filters")]
pub struct BoundOptions {
    /// Minimum approach distance (au)
    #[arg(long, value_name = "AU")]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long, value_name = "AU")]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity (km/s)
    #[arg(long, value_name = "KM_S")]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity (km/s)
    #[arg(long, value_name = "KM_S")]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long, value_name = "KM")]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long, value_name = "KM")]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
