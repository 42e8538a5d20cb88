//! Question payload accepted by the binary.

use std::error::Error;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// One question with its retrieved context passages.
///
/// ```json
/// { "question": "What is the capital of France?", "context": ["Paris is its capital."] }
/// ```
#[derive(Debug, Deserialize, PartialEq)]
pub struct AskRequest {
    /// Natural language question.
    pub question: String,
    /// Ordered context passages; absent means none.
    #[serde(default)]
    pub context: Vec<String>,
}

/// Reads the request from `path`, or from stdin when `path` is `None`.
pub fn read(path: Option<&Path>) -> Result<AskRequest, Box<dyn Error>> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_defaults_to_empty() {
        let req: AskRequest = serde_json::from_str(r#"{"question":"q"}"#).unwrap();
        assert_eq!(
            req,
            AskRequest {
                question: "q".into(),
                context: Vec::new()
            }
        );
    }

    #[test]
    fn question_is_required() {
        assert!(serde_json::from_str::<AskRequest>(r#"{"context":["a"]}"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let path = std::env::temp_dir().join(format!("rag-answer-req-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"question":"Why?","context":["b","a"]}"#).unwrap();

        let req = read(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(req.question, "Why?");
        assert_eq!(req.context, vec!["b", "a"]);
    }
}
