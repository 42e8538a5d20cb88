//! Answer generation over retrieved context.
//!
//! Public API: [`ResponseGenerator::generate`]. It joins the context passages,
//! wraps them and the question in `<context>`/`<question>` blocks, sends the
//! result with the fixed [`prompt::SYSTEM_PROMPT`] to the injected model, and
//! returns the model's text exactly as received.
//!
//! The model is any [`InvokeModel`]; errors it produces come back to the
//! caller as the very same value.

pub mod prompt;

pub use ai_llm_service::InvokeModel;
pub use prompt::{SYSTEM_PROMPT, build_user_message};

use tracing::{debug, instrument, warn};

/// Stateless response generator bound to one model capability.
///
/// # Example
/// ```no_run
/// # use ai_llm_service::{OpenAiService, config_openai};
/// # use response_generator::ResponseGenerator;
/// # #[tokio::main] async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = ResponseGenerator::new(OpenAiService::new(config_openai()?)?);
/// let answer = generator
///     .generate("What is the capital of France?", &["Paris is its capital."])
///     .await?;
/// println!("{answer}");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct ResponseGenerator<M> {
    model: M,
}

impl<M: InvokeModel> ResponseGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The injected model capability.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Generate an answer to `query` grounded in `context`.
    ///
    /// Makes exactly one call to the model. `query` and `context` may be empty.
    ///
    /// # Errors
    /// Whatever the model returns, unchanged.
    #[instrument(skip_all, fields(query_len = query.len(), context_items = context.len()))]
    pub async fn generate<S: AsRef<str>>(
        &self,
        query: &str,
        context: &[S],
    ) -> Result<String, M::Error> {
        let user_message = build_user_message(query, context);
        debug!(user_len = user_message.len(), "invoking model");

        self.model
            .invoke(SYSTEM_PROMPT, &user_message)
            .await
            .inspect_err(|e| warn!(error = %e, "model invocation failed"))
    }
}
