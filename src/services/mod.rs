pub mod analytics;
pub mod scoring;

pub use analytics::{aggregate, AnalyticsSummary, DimensionStat};
pub use scoring::{correct_option_value, question_is_correct, score, ScoreSummary};
