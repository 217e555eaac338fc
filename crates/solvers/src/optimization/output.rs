use std::convert::Infallible;

use optiprice_core::OptimizationProblem;

/// A scalar problem whose objective is the model output itself.
///
/// Pairs with [`FnModel`](optiprice_core::FnModel) to optimize a plain
/// `Fn(f64) -> f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputObjective;

impl OptimizationProblem<1> for OutputObjective {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
