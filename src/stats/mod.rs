pub mod aggregate;
pub mod compile;
pub mod motm;

pub use aggregate::{mean_of_means, summarize};
pub use compile::{compile_responses, extract_ratings, Compilation, SurveyKeys, SurveyResponse};
pub use motm::resolve_motm;
