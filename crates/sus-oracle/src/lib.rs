//! # sus-oracle
//!
//! The simulated witness. Turns a round's question and the culprit's cached
//! portrait description into a YES/NO answer through a text-generation
//! provider, in the background, and lets callers wait for the result.
//!
//! Providers are a closed set ([`ProviderKind`](sus_core::enums::ProviderKind)):
//! - OpenAI and DeepSeek (chat completions)
//! - Anthropic (messages)
//! - Ollama (local `/api/chat`)
//!
//! Each sits behind the [`TextProvider`] trait so tests can script answers.

pub mod anthropic;
pub mod describe;
mod error;
mod http;
pub mod ollama;
pub mod openai;
pub mod oracle;
pub mod prompts;
pub mod provider;
pub mod wait;

pub use describe::{DescribeFailure, DescribeReport};
pub use error::OracleError;
pub use oracle::{AnswerOracle, OracleSettings, Step};
pub use provider::{
    ChatRole, ChatTurn, Credentials, ImageDescription, ImageInput, ProviderSet, TextProvider,
    TextRequest,
};
pub use wait::WaitOutcome;
