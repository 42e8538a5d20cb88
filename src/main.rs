use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use ai_llm_service::{OpenAiService, config_openai};
use response_generator::ResponseGenerator;
use tracing::info;

mod request;
mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when one exists.
    match dotenvy::dotenv() {
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.into()),
        Ok(_) => {}
    }

    telemetry::init("info")?;

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let req = request::read(path.as_deref())?;

    let generator = ResponseGenerator::new(OpenAiService::new(config_openai()?)?);

    info!(
        model = %generator.model().config().model,
        context_items = req.context.len(),
        "answering question"
    );
    let answer = generator.generate(&req.question, &req.context[..]).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(answer.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
