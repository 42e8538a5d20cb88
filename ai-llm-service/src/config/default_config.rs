//! Default LLM config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = API key (mandatory)
//! - `OPENAI_MODEL`     = chat model (mandatory)
//! - `OPENAI_URL`       = API base URL (optional, defaults to [`DEFAULT_OPENAI_URL`])
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TEMPERATURE`  = optional temperature (`0.0..=2.0`, default `0.2`)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (default 60)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, must_var, opt_f32, opt_u32, opt_u64, validate_http_endpoint,
        validate_range_f32,
    },
};

/// Public OpenAI API base.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the chat-completion config from the process environment.
///
/// # Errors
/// See [`config_openai_with`].
pub fn config_openai() -> Result<LlmModelConfig, AiLlmError> {
    config_openai_with(|name| std::env::var(name).ok())
}

/// Constructs the chat-completion config from an arbitrary variable lookup.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`](crate::error_handler::ConfigError::MissingVar)
///   if the key or model is missing
/// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
///   if `OPENAI_URL` has no http/https scheme
/// - [`ConfigError::InvalidNumber`](crate::error_handler::ConfigError::InvalidNumber)
///   / [`ConfigError::OutOfRange`](crate::error_handler::ConfigError::OutOfRange)
///   for malformed numeric knobs
pub fn config_openai_with<F>(var: F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = must_var("OPENAI_API_KEY", var("OPENAI_API_KEY"))?;
    let model = must_var("OPENAI_MODEL", var("OPENAI_MODEL"))?;

    let endpoint = var("OPENAI_URL")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string());
    validate_http_endpoint("OPENAI_URL", &endpoint)?;

    let max_tokens = opt_u32("LLM_MAX_TOKENS", var("LLM_MAX_TOKENS"))?;

    let temperature =
        opt_f32("LLM_TEMPERATURE", var("LLM_TEMPERATURE"))?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", "expected 0.0..=2.0", temperature, 0.0, 2.0)?;

    let timeout_secs =
        opt_u64("LLM_TIMEOUT_SECS", var("LLM_TIMEOUT_SECS"))?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        model: model.trim().to_string(),
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(temperature),
        timeout_secs: Some(timeout_secs),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error_handler::ConfigError;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn minimal_env_uses_defaults() {
        let cfg = config_openai_with(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
        ]))
        .unwrap();

        assert_eq!(cfg.endpoint, DEFAULT_OPENAI_URL);
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.max_tokens, None);
        assert_eq!(cfg.temperature, Some(0.2));
        assert_eq!(cfg.timeout_secs, Some(60));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config_openai_with(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_URL", "http://localhost:8080"),
            ("LLM_MAX_TOKENS", "256"),
            ("LLM_TEMPERATURE", "0"),
            ("LLM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(cfg.endpoint, "http://localhost:8080");
        assert_eq!(cfg.max_tokens, Some(256));
        assert_eq!(cfg.temperature, Some(0.0));
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn missing_key_is_reported() {
        let err = config_openai_with(lookup(&[("OPENAI_MODEL", "gpt-4o")])).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn bad_url_and_temperature_are_rejected() {
        let base = [("OPENAI_API_KEY", "sk"), ("OPENAI_MODEL", "m")];

        let mut with_url = base.to_vec();
        with_url.push(("OPENAI_URL", "api.openai.com"));
        assert!(matches!(
            config_openai_with(lookup(&with_url)),
            Err(AiLlmError::Config(ConfigError::InvalidFormat { var: "OPENAI_URL", .. }))
        ));

        let mut with_temp = base.to_vec();
        with_temp.push(("LLM_TEMPERATURE", "3.5"));
        assert!(matches!(
            config_openai_with(lookup(&with_temp)),
            Err(AiLlmError::Config(ConfigError::OutOfRange { field: "temperature", .. }))
        ));
    }
}
