/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the midpoint of the current bracket.
    StopEarly,

    /// Treat this point as having a worse objective than the other point.
    ///
    /// This causes the solver to shrink away from this point.
    ///
    /// Use this for:
    /// - Recovering from model, problem, or non-finite objective failures when
    ///   domain knowledge suggests the failed region is suboptimal.
    /// - Steering the search away from a region even when evaluation succeeded,
    ///   such as prices a seller cannot charge.
    AssumeWorse,
}
