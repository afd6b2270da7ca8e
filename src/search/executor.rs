//! Two-phase search execution.
//!
//! Phase one runs in aggregations mode and resolves the ordered key set for
//! the whole match. Phase two re-issues the query in hits mode with a term
//! filter over the paginated key slice, keeping pagination stable whatever
//! shape the aggregation takes.

use crate::error::Result;
use crate::query::expression::QueryExpression;
use crate::request::assembler::RequestAssembler;
use crate::request::options::{ResultMode, SearchOptions};
use crate::search::normalizer::{ResultNormalizer, SearchResults};
use crate::search::outcome::{ExecutorPhase, SearchOutcome};
use crate::search::transport::SearchTransport;

/// Orchestrates the two-pass query protocol over an opaque transport.
///
/// Each `execute()` call owns its own [`SearchOutcome`]; executors hold no
/// mutable state, so one instance per concurrent request needs no locking.
#[derive(Debug)]
pub struct TwoPhaseExecutor<T: SearchTransport> {
    transport: T,
    assembler: RequestAssembler,
    normalizer: ResultNormalizer,
}

impl<T: SearchTransport> TwoPhaseExecutor<T> {
    /// Create an executor with the default assembler strategies.
    pub fn new(transport: T) -> Self {
        let assembler = RequestAssembler::new();
        let normalizer = ResultNormalizer::new(assembler.aggregation_name());
        TwoPhaseExecutor {
            transport,
            assembler,
            normalizer,
        }
    }

    /// Create an executor over an explicit assembler.
    ///
    /// The normalizer reads buckets under the assembler's aggregation name.
    pub fn with_assembler(transport: T, assembler: RequestAssembler) -> Self {
        let normalizer = ResultNormalizer::new(assembler.aggregation_name());
        TwoPhaseExecutor {
            transport,
            assembler,
            normalizer,
        }
    }

    /// Execute both phases and return the settled outcome.
    ///
    /// Construction and assembly errors (`InvalidQuery`, `InvalidOptions`)
    /// fail fast as `Err`. Transport failures never do: they are recorded
    /// on the outcome's error flag and the call returns `Ok` with a
    /// self-describing outcome — empty keys and zero total when phase one
    /// failed, retained keys and no raw result when only phase two did.
    pub fn execute(
        &self,
        expression: &QueryExpression,
        options: &SearchOptions,
    ) -> Result<SearchOutcome> {
        options.validate()?;

        let mut outcome = SearchOutcome::begin();

        outcome.enter_phase(ExecutorPhase::ResolvingKeys);
        let request =
            self.assembler
                .assemble(expression, options, ResultMode::Aggregations, None)?;
        match self.transport.send(&request) {
            Ok(response) => match self.normalizer.resolve_keys(&response) {
                Ok(keys) => outcome.record_keys(keys),
                Err(e) => outcome.record_failure(e.to_string()),
            },
            Err(e) => outcome.record_failure(e.to_string()),
        }

        // The mode flips at most once: phase two runs whenever phase one
        // resolved, even when the key set is empty.
        if !outcome.errored() {
            outcome.enter_phase(ExecutorPhase::FetchingHits);
            let request = self.assembler.assemble(
                expression,
                options,
                ResultMode::Hits,
                Some(outcome.keys()),
            )?;
            match self.transport.send(&request) {
                Ok(response) => outcome.record_result(response),
                Err(e) => outcome.record_failure(e.to_string()),
            }
        }

        outcome.finish();
        Ok(outcome)
    }

    /// Execute and shape the outcome into the caller-facing view.
    pub fn search(
        &self,
        expression: &QueryExpression,
        options: &SearchOptions,
    ) -> Result<SearchResults> {
        let outcome = self.execute(expression, options)?;
        Ok(self.normalizer.normalize(&outcome))
    }

    /// The transport this executor sends through.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
