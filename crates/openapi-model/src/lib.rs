//! # openapi-model
//!
//! Normalizes heterogeneous OpenAPI 2.x/3.x documents into one canonical
//! operation model and indexes it for lookup. The normalizer does no I/O of
//! its own: collaborators hand it raw text (or a parsed value) together with
//! the source identity that names the document.

mod error;
mod examples;
mod index;
mod normalizer;
mod resolver;
mod types;

pub use error::{DocumentError, ModelResult};
pub use examples::{example_arguments, example_from_schema};
pub use index::OperationIndex;
pub use normalizer::DocumentNormalizer;
pub use resolver::SchemaResolver;
pub use types::{
    ApiDocument, HttpMethod, OperationDescriptor, ParameterDescriptor, ParameterLocation,
    RequestBodyDescriptor, ResponseDescriptor,
};
