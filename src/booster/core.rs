//! Provides `Booster` trait.

use serde::{Serialize, Deserialize};

use crate::WeakLearner;

use std::fmt;
use std::ops::ControlFlow;


/// The trait [`Booster`](Booster) defines the standard framework of Boosting.
///
/// You need to implement [`Booster::preprocess`](Booster::preprocess),
/// [`Booster::boost`](Booster::boost),
/// and [`Booster::postprocess`](Booster::postprocess)
/// to write a new boosting algorithm.
pub trait Booster<H> {
    /// The combined hypothesis, or the result containing it.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    fn run<W>(&mut self, weak_learner: &W) -> Self::Output
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess();

        let _ = (1..).try_for_each(|iter| {
            self.boost(weak_learner, iter)
        });

        self.postprocess()
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`](Booster::run),
    /// This method is called before the boosting process.
    fn preprocess(&mut self);


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` if boosting goes on,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>;


    /// Post-processing.
    /// This method returns [`Booster::Output`].
    fn postprocess(&mut self) -> Self::Output;
}


/// Why a boosting run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A weak learner reached zero weighted error,
    /// or the cross-validated number of rounds was reached.
    Converged,
    /// The configured number of weak learners was trained.
    MaxRounds,
    /// A weak learner had weighted error `≥ 0.5`.
    NoBetterThanChance,
}


impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Converged => "Converged",
            Self::MaxRounds => "Max rounds",
            Self::NoBetterThanChance => "No better than chance",
        };
        write!(f, "{name}")
    }
}
