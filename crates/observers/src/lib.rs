//! Reusable observers for optiprice solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs every golden section event through `tracing`
//! - [`StallObserver`] — stops a search once the objective stops improving
//!
//! [`Observer`]: optiprice_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

mod stall;
mod trace;
pub mod traits;

pub use stall::StallObserver;
pub use trace::TraceObserver;
