//! # Minaret
//!
//! A query-construction and execution layer for full-text verse search
//! backends.
//!
//! Given raw search text plus pagination, fuzziness, and scoring options,
//! minaret builds a structured backend request, runs the two-phase
//! resolve-then-fetch protocol over an opaque transport, and normalizes the
//! response into an ordered key list with timing and error state.
//!
//! ## Features
//!
//! - Phrase-match clauses over weighted fields, in lenient and strict flavors
//! - Term filtering over pre-resolved document keys with stable pagination
//! - Mode-aware request assembly (hits vs. aggregations)
//! - Two-phase execution with error-flag recovery, never a thrown fault

pub mod error;
pub mod model;
pub mod query;
pub mod request;
pub mod search;

pub mod prelude {
    //! Convenience re-exports for the common search path.

    pub use crate::error::{MinaretError, Result};
    pub use crate::query::{PhraseMatchFlavor, QueryExpression};
    pub use crate::request::{RequestAssembler, ResultMode, SearchOptions};
    pub use crate::search::{
        RawResponse, SearchOutcome, SearchResults, SearchTransport, TwoPhaseExecutor,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
