//! Template engine adapters.

mod escape;
mod expression;

pub use expression::{ExpressionRenderer, MAX_INCLUDE_DEPTH};
