//! The narrowing engine: band planning, question policy, and the per-turn
//! narrowing loop.

pub mod bands;
pub mod narrow;
pub mod questions;

pub use bands::{plan_for, BandPlan};
pub use narrow::Engine;
pub use questions::{next_question, prompt, ASK_ORDER};
