pub mod engine;
pub mod factors;

pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreResult};
pub use factors::{extract_numbers, number_weight, KEYWORD_WEIGHTS, UPTIME_MULTIPLIER};
