//! # call-engine
//!
//! Turns a normalized operation plus a free-form argument bag into a
//! protocol-correct HTTP request, executes it, and hands back one normalized
//! result shape. Synthesis is pure; execution absorbs every transport
//! failure instead of propagating it.

mod client;
mod engine;
mod error;
mod request;
mod result;
mod validate;

pub use client::{ApiClient, CallOutcome, CallRequest};
pub use engine::{CancelToken, EngineConfig, ExecutionEngine};
pub use error::{CallError, CallResult};
pub use request::{synthesize, HttpRequest};
pub use result::ApiCallResult;
pub use validate::{has_body_arguments, validate_arguments, MissingParameter};
