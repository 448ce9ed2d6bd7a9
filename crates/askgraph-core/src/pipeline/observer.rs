//! Stage callbacks for presentation adapters.

use crate::query::model::GeneratedQuery;
use crate::result::model::NormalizedValue;

use super::model::Stage;

/// Receives each stage's output as soon as it is available.
///
/// All methods default to doing nothing.
pub trait PipelineObserver: Send {
    fn on_stage(&mut self, _stage: Stage) {}

    fn on_query(&mut self, _query: &GeneratedQuery) {}

    fn on_result(&mut self, _value: &NormalizedValue) {}

    fn on_execution_failed(&mut self, _error: &str) {}

    fn on_summary(&mut self, _summary: &str) {}
}

/// Observer that ignores everything.
pub struct Silent;

impl PipelineObserver for Silent {}
