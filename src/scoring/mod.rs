// Probability side of the pipeline: a hand-tuned heuristic score and the
// blend that folds it into the model probability.

pub mod decision;
pub mod heuristic;
