//! Enemy decision policies.
//!
//! A policy only decides: it picks a target and optionally a skill on its
//! own timer. The battle manager applies the decision through the roster.

mod enemy;
mod policy;
mod rng;

pub use enemy::EnemyAi;
pub use policy::{AiState, Decision, DecisionPolicy};
pub use rng::{derive_seed, policy_rng};
