pub mod marker;

pub use marker::{MarkerRenderer, StampSummary};
