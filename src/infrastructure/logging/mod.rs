pub mod boundary_logger;
pub mod trace_context;

pub use boundary_logger::{BoundaryLogger, Timer};
pub use trace_context::{TraceContext, TRACE_ID_HEADER};
