//! Built-in event stream formats

pub mod json;
pub mod trace;

pub use json::JsonFormat;
pub use trace::TraceFormat;
