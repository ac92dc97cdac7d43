//! `truthlens-ai`
//!
//! **Responsibility:** everything between an uploaded image and a validated
//! verdict.
//!
//! - `prompt`: the fixed instruction contract
//! - `provider`: the seam to a multimodal completion backend
//! - `client`: one provider call per upload
//! - `normalizer`: JSON recovery from fenced or truncated output
//! - `result`: the result schema and its validation
//! - `analyzer`: the pipeline tying the above together
//!
//! Detection itself is done by the external model; nothing here inspects pixels.

pub mod analyzer;
pub mod client;
pub mod normalizer;
pub mod prompt;
pub mod provider;
pub mod result;

pub use analyzer::{Analysis, ImageAnalyzer};
pub use client::{AnalysisClient, AnalysisSettings};
pub use normalizer::{normalize, parse_response};
pub use prompt::{analysis_prompt, ANALYSIS_DIRECTIVE, ANALYSIS_PROMPT, ANALYSIS_PROMPT_VERSION};
pub use provider::{CompletionProvider, CompletionRequest, ProviderError};
pub use result::{AiError, AnalysisResult, ImageType, Person};
