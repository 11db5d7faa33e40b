//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tower-studio",
    version,
    about = "Tower Structure Studio - draft, create, and number real-estate tower units",
    long_about = "Draft tower structures against a property backend, validate structure\n\
                  assignments against linkable-unit capacity, and assign unit numbers to\n\
                  freshly created or already persisted towers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Backend base URL (falls back to TWS_BASE_URL).
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Auth token sent in the secret_key header (falls back to TWS_SECRET_KEY).
    #[arg(long = "secret-key", value_name = "TOKEN", global = true)]
    pub secret_key: Option<String>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List structure options for a project, sub-property type, and floor unit.
    Structures(LookupArgs),

    /// List area options for a structure.
    Areas(AreaArgs),

    /// Query the maximum linkable units for a structure+area combination.
    Capacity(CapacityArgs),

    /// List persisted blocks/towers of a project.
    Blocks(BlocksArgs),

    /// Create a tower structure from a draft file.
    Create(CreateArgs),

    /// Bulk-number a freshly created tower and persist the result.
    Serialize(SerializeArgs),

    /// Bulk-number an already persisted tower by block id.
    Assign(AssignArgs),
}

#[derive(Parser)]
pub struct LookupArgs {
    #[arg(long = "project-id")]
    pub project_id: i64,

    #[arg(long = "sub-property-type-id")]
    pub sub_property_type_id: i64,

    #[arg(long = "floor-unit-id")]
    pub floor_unit_id: i64,
}

#[derive(Parser)]
pub struct AreaArgs {
    #[command(flatten)]
    pub lookup: LookupArgs,

    #[arg(long = "structure-id")]
    pub structure_id: i64,
}

#[derive(Parser)]
pub struct CapacityArgs {
    #[command(flatten)]
    pub lookup: LookupArgs,

    #[arg(long = "structure-id")]
    pub structure_id: i64,

    /// Numeric area value of the selected area option.
    #[arg(long = "area")]
    pub area: f64,

    #[arg(long = "area-unit-id")]
    pub area_unit_id: i64,
}

#[derive(Parser)]
pub struct BlocksArgs {
    #[arg(long = "project-id")]
    pub project_id: i64,
}

#[derive(Parser)]
pub struct CreateArgs {
    /// Path to the tower draft JSON file.
    #[arg(value_name = "DRAFT_FILE")]
    pub draft: PathBuf,

    /// Write the materialized structure here for the serialize step.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SerializeArgs {
    /// Path to a materialized structure JSON (from `create --output`).
    #[arg(value_name = "STRUCTURE_FILE")]
    pub structure: PathBuf,

    /// First unit number to assign.
    #[arg(long = "from")]
    pub from: u64,

    /// Last unit number to assign.
    #[arg(long = "to")]
    pub to: u64,
}

#[derive(Parser)]
pub struct AssignArgs {
    #[arg(long = "project-id")]
    pub project_id: i64,

    /// Block/tower id to renumber.
    #[arg(long = "block-id")]
    pub block_id: i64,

    /// First unit number to assign.
    #[arg(long = "from")]
    pub from: u64,

    /// Last unit number to assign.
    #[arg(long = "to")]
    pub to: u64,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
