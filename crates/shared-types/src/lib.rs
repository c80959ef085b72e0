pub mod case;
pub mod config;
pub mod error;
pub mod holidays;
pub mod stateflow;
pub mod track;

pub use case::*;
pub use config::*;
pub use error::*;
pub use holidays::*;
pub use stateflow::*;
pub use track::*;
