pub mod series;

pub use series::{compute, PiSeries};
