//! Infrastructure layer: adapters to external services.

pub mod provider;

pub use provider::{OpenAiProvider, ScriptedProvider};
