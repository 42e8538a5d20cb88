//! Shared LLM access for the workspace.
//!
//! - [`invoke::InvokeModel`]: the capability consumers depend on
//!   (system instruction + user message → generated text).
//! - [`services::open_ai_service::OpenAiService`]: chat-completion client
//!   implementing it.
//! - [`config`]: model config and env-driven constructors.
//! - [`error_handler`]: unified [`AiLlmError`].

pub mod config;
pub mod error_handler;
pub mod invoke;
pub mod services;

pub use config::{default_config::config_openai, llm_model_config::LlmModelConfig};
pub use error_handler::AiLlmError;
pub use invoke::InvokeModel;
pub use services::open_ai_service::OpenAiService;
