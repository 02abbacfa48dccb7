use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mbtool",
    about = "Molecular building-block inspection and orientation analysis",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print counts, center of mass and radius of gyration
    #[command(visible_alias = "i")]
    Info(InputArgs),

    /// Print the inertia tensor, director and tilt angle against +z
    #[command(visible_alias = "o")]
    Order(OrderArgs),
}

/// Structure inputs shared by all commands.
#[derive(Args)]
pub struct InputArgs {
    /// XML prototype file (positions, types, masses, charges, topology)
    #[arg(short, long, value_name = "FILE")]
    pub prototype: Option<PathBuf>,

    /// Classic XYZ coordinate file (count and comment header)
    #[arg(short, long, value_name = "FILE")]
    pub xyz: Option<PathBuf>,

    /// Headerless coordinate table (`type x y z` rows)
    #[arg(short, long, value_name = "FILE")]
    pub coord: Option<PathBuf>,

    /// Mass table, one real per line
    #[arg(short, long, value_name = "FILE")]
    pub masses: Option<PathBuf>,

    /// Charge table, one real per line
    #[arg(long, value_name = "FILE")]
    pub charges: Option<PathBuf>,
}

#[derive(Args)]
pub struct OrderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Orthorhombic box edge lengths, e.g. --box 60,60,120
    #[arg(
        long = "box",
        value_name = "LX,LY,LZ",
        num_args = 3,
        value_delimiter = ','
    )]
    pub box_lengths: Option<Vec<f64>>,

    /// Reconstruct the body across periodic boundaries before analysis
    /// (requires --box)
    #[arg(long, requires = "box_lengths")]
    pub unwrap: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
