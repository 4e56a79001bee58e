pub mod config;
pub mod engine;
pub mod factors;
pub mod jitter;
pub mod keywords;
pub mod reason;
pub mod validation;

pub use config::*;
pub use engine::{FactorContribution, ProjectScorer, ScoreBreakdown, ScoreResult};
pub use factors::{Effect, RangeOp};
pub use jitter::{FixedJitter, Jitter, RandomJitter};
pub use keywords::KeywordTable;
pub use validation::validate_scoring;
