mod trace_id;

pub use trace_id::propagate_trace_id;
