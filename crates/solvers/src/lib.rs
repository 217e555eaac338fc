//! Numerical solvers for optiprice.
//!
//! Solvers are generic over a [`Model`] and an [`OptimizationProblem`], and
//! report progress to an [`Observer`].
//!
//! [`Model`]: optiprice_core::Model
//! [`OptimizationProblem`]: optiprice_core::OptimizationProblem
//! [`Observer`]: optiprice_core::Observer

pub mod optimization;
