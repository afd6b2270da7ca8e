//! Request assembly: options, strategy objects, and the assembled body.

pub mod aggregations;
pub mod assembler;
pub mod fields;
pub mod highlight;
pub mod indices;
pub mod options;

pub use self::aggregations::AggregationSpecBuilder;
pub use self::assembler::{RequestAssembler, RequestBody, SearchRequest};
pub use self::fields::FieldResolver;
pub use self::highlight::HighlightSpecBuilder;
pub use self::indices::IndexResolver;
pub use self::options::{ResultMode, SearchOptions};
