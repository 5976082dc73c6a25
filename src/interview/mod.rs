//! The interview engine core: question graph, signal detection, answer
//! evaluation, routing, and report aggregation.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod report;
pub mod resolver;
pub mod signals;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{
    AnswerEvaluation, DefaultNext, ExpectedContent, QuestionNode, RouteRule, SignalResult,
};
pub use evaluation::{assess, evaluate, ScoredAnswer};
pub use report::{aggregate, InterviewReport, OverallRating};
pub use resolver::{resolve, Resolution};
pub use store::{greeting, QuestionStore};
