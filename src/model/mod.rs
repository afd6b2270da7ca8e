//! Reference-data models consumed by controller layers.

pub mod reciter;

pub use self::reciter::{Reciter, ReciterTable};
