//! Two-phase execution, outcome accumulation, and result normalization.

pub mod executor;
pub mod normalizer;
pub mod outcome;
pub mod transport;

pub use self::executor::TwoPhaseExecutor;
pub use self::normalizer::{ResultNormalizer, SearchResults};
pub use self::outcome::{ExecutorPhase, SearchOutcome};
pub use self::transport::{RawResponse, SearchTransport};
