//! Logging abstractions
//!
//! Components take an `Arc<dyn Logger>` instead of calling `tracing`
//! directly, so tests can swap in a silent or recording logger.

mod memory;
mod noop;
mod tracing_logger;
mod traits;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use tracing_logger::{env_filter, init_tracing, TracingLogger};
pub use traits::{Logger, SharedLogger};
