pub mod client;
pub mod element;

pub use client::{DataSourceClient, PeriodicTable};
pub use element::{ElectronShells, Element, ElementSummary};
