use std::path::PathBuf;

use clap::Args;

use crate::output::Format;

pub mod curve;
pub mod optimize;

/// Solver and output flags shared by every command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Stop once the price bracket is narrower than this
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Iteration limit; hitting it yields an approximate price
    #[arg(short = 'n', long)]
    pub max_iters: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// JSON file with listings per product
    #[arg(short, long)]
    pub data: PathBuf,

    /// Product to price
    #[arg(short, long)]
    pub product: String,

    /// Unit cost (defaults to 70% of the lowest observed price)
    #[arg(long)]
    pub cost: Option<f64>,

    /// Demand at a price of zero
    #[arg(long)]
    pub max_demand: Option<f64>,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Demand at a price of zero
    #[arg(long)]
    pub max_demand: f64,

    /// Units of demand lost per unit of price
    #[arg(long)]
    pub sensitivity: f64,

    /// Lowest price to consider
    #[arg(long)]
    pub low: f64,

    /// Highest price to consider
    #[arg(long)]
    pub high: f64,

    /// Unit cost (defaults to zero, i.e. maximize revenue)
    #[arg(long)]
    pub cost: Option<f64>,

    #[command(flatten)]
    pub search: SearchArgs,
}
