pub mod error;
pub mod periodic;
pub mod pi;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use periodic::{DataSourceClient, Element, ElementSummary, ElectronShells, PeriodicTable};
pub use pi::{compute, PiSeries};
pub use server::create_router;
