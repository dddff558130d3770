//! Application layer - request/response orchestration over the domain.

mod evaluate;

pub use evaluate::{EvaluateHandler, Evaluation, EvaluationRequest};
