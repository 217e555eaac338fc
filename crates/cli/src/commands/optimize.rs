use anyhow::{Context, Result};
use optiprice_pricing::{JsonMarket, MarketData, PricingRequest, optimize_product};
use tracing::info;

use super::OptimizeArgs;
use crate::{config::CliConfig, output};

pub fn run(args: &OptimizeArgs, config: &CliConfig) -> Result<()> {
    let mut solver = config.solver;
    solver.merge(args.search.tolerance, args.search.max_iters);
    let solver = solver.to_config()?;

    let market = JsonMarket::from_path(&args.data)?;
    let samples = market
        .samples(&args.product)
        .with_context(|| format!("no listings for `{}`", args.product))?;
    info!(product = %args.product, listings = samples.len(), "loaded listings");

    let request = PricingRequest {
        unit_cost: args.cost.or(config.pricing.unit_cost),
        max_demand: args.max_demand.or(config.pricing.max_demand),
    };

    let report = optimize_product(&args.product, &samples, &request, &solver)
        .with_context(|| format!("no valid price found for `{}`", args.product))?;

    println!(
        "{}",
        output::render_report(&args.product, &report, args.search.format)?
    );
    Ok(())
}
