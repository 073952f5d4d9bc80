pub mod config;
pub mod filter;
pub mod task;
pub mod workspace;

pub use config::*;
pub use filter::*;
pub use task::*;
pub use workspace::*;
