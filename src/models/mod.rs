pub mod paper;
pub mod question;
pub mod test_result;

pub use paper::Paper;
pub use question::{normalize, options_in_key_order, Question};
pub use test_result::{AnswerMap, TestResult, TestResultPayload};
