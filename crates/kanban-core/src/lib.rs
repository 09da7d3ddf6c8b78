pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::EngineConfig;
pub use error::KanbanError;
pub use logging::init_logging;
pub use result::KanbanResult;
