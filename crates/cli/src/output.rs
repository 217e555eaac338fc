use std::fmt::{self, Write};

use clap::ValueEnum;
use optiprice_pricing::{Outcome, PriceReport, Quote};
use serde::Serialize;
use thiserror::Error;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct Labeled<'a, T> {
    product: &'a str,
    #[serde(flatten)]
    result: &'a T,
}

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] fmt::Error),
}

/// Renders a full pricing report for `product`.
pub fn render_report(
    product: &str,
    report: &PriceReport,
    format: Format,
) -> Result<String, RenderError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&Labeled {
            product,
            result: report,
        })?),
        Format::Table => {
            let mut out = String::new();
            write_report(&mut out, product, report)?;
            Ok(out)
        }
    }
}

/// Renders a quote for a known demand curve.
pub fn render_quote(quote: &Quote, format: Format) -> Result<String, RenderError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(quote)?),
        Format::Table => {
            let mut out = String::new();
            write_quote(&mut out, quote)?;
            Ok(out)
        }
    }
}

fn write_report(out: &mut impl Write, product: &str, report: &PriceReport) -> fmt::Result {
    let [low, high] = report.price_range;
    let fit = &report.fit;
    let origin = if fit.through_origin {
        " (through origin)"
    } else {
        ""
    };

    writeln!(out, "Product:           {product}")?;
    writeln!(out, "Price range:       {low:.2} - {high:.2}")?;
    writeln!(out, "Unit cost:         {:.2}", report.unit_cost)?;
    writeln!(
        out,
        "Demand curve:      Q(p) = {:.2} - {:.6} p",
        fit.max_demand, fit.sensitivity
    )?;
    writeln!(
        out,
        "Fit:               R² = {:.4} over {} listings{origin}",
        fit.r_squared, fit.samples
    )?;
    write_quote(out, &report.quote)
}

fn write_quote(out: &mut impl Write, quote: &Quote) -> fmt::Result {
    writeln!(out, "Optimal price:     {:.2}", quote.optimal_price)?;
    writeln!(out, "Maximum profit:    {:.2}", quote.max_profit)?;
    writeln!(out, "Estimated demand:  {:.2} units", quote.estimated_demand)?;
    writeln!(out, "Iterations:        {}", quote.iterations)?;
    writeln!(out, "Status:            {}", outcome_label(quote.outcome))
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Converged => "converged",
        Outcome::Unconverged => "NOT CONVERGED (iteration limit reached, price is approximate)",
        Outcome::StoppedEarly => "stopped early (price is approximate)",
    }
}
