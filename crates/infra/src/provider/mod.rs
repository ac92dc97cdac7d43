//! Completion provider adapters.
//!
//! `OpenAiProvider` talks to an OpenAI-compatible chat-completions endpoint.
//! `ScriptedProvider` replays canned responses for tests and local demos.

pub mod openai;
pub mod scripted;

pub use openai::OpenAiProvider;
pub use scripted::ScriptedProvider;
