//! Evaluation of expression trees.
//!
//! By the time a tree reaches the evaluator every variable has already been
//! replaced by a literal, so evaluation is a pure fold over the tree.

pub mod evaluator;
