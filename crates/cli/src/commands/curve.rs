use anyhow::{Context, Result};
use optiprice_pricing::{LinearDemand, ProfitProblem, quote_labeled};

use super::CurveArgs;
use crate::{config::CliConfig, output};

pub fn run(args: &CurveArgs, config: &CliConfig) -> Result<()> {
    let mut solver = config.solver;
    solver.merge(args.search.tolerance, args.search.max_iters);
    let solver = solver.to_config()?;

    let demand = LinearDemand::new(args.max_demand, args.sensitivity)?;
    let problem = match args.cost.or(config.pricing.unit_cost) {
        Some(cost) => ProfitProblem::new(cost)?,
        None => ProfitProblem::revenue(),
    };

    let quote = quote_labeled("curve", &demand, &problem, [args.low, args.high], &solver)
        .context("no valid price found")?;

    println!("{}", output::render_quote(&quote, args.search.format)?);
    Ok(())
}
