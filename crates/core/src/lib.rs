//! `truthlens-core` — upload model and transport primitives.
//!
//! This crate has no I/O: it describes what an upload is, how its bytes are
//! encoded for the provider, and the bounded scores the model reports.

pub mod encoding;
pub mod error;
pub mod id;
pub mod media;
pub mod value_object;

pub use encoding::{data_uri, encode_image};
pub use error::{DomainError, DomainResult};
pub use id::AnalysisId;
pub use media::{AnalysisRequest, MediaType};
pub use value_object::{Score, ValueObject};
