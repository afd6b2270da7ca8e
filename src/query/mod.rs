//! Query expression and clause construction.

pub mod clause;
pub mod expression;
pub mod paginate;

pub use self::clause::{FuzzyHints, PhraseMatchFlavor, bool_must, phrase_match, term_filter};
pub use self::expression::{FieldWeight, QueryExpression, default_field_weights};
pub use self::paginate::paginate_keys;
