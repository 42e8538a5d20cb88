//! Prompt builder: fixed system instruction + tagged context/question message.

/// System instruction sent with every generation.
pub const SYSTEM_PROMPT: &str = r#"
Use the provided context to provide a concise answer to the user's question.
If you cannot find the answer in the context, say so. Do not make up information.
"#;

/// Build the user message from the question and ordered context passages.
///
/// Passages are joined with `\n` in the given order, untouched. Both blocks
/// are always emitted, so an empty `context` still yields
/// `<context>\n\n</context>`. Tag-like text inside passages is not escaped.
///
/// # Example
/// ```
/// use response_generator::prompt::build_user_message;
/// let msg = build_user_message("Why?", &["Because."]);
/// assert_eq!(msg, "<context>\nBecause.\n</context>\n<question>\nWhy?\n</question>");
/// ```
pub fn build_user_message<S: AsRef<str>>(query: &str, context: &[S]) -> String {
    let context_text = join_context(context);
    format!("<context>\n{context_text}\n</context>\n<question>\n{query}\n</question>")
}

fn join_context<S: AsRef<str>>(context: &[S]) -> String {
    let cap = context.iter().map(|c| c.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(cap);
    for (i, c) in context.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(c.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_of_france() {
        let msg = build_user_message(
            "What is the capital of France?",
            &["France is a country in Europe.", "Paris is its capital."],
        );
        assert_eq!(
            msg,
            "<context>\nFrance is a country in Europe.\nParis is its capital.\n</context>\n\
             <question>\nWhat is the capital of France?\n</question>"
        );
    }

    #[test]
    fn empty_context_keeps_tags() {
        let none: [&str; 0] = [];
        let msg = build_user_message("q", &none);
        assert_eq!(msg, "<context>\n\n</context>\n<question>\nq\n</question>");
    }

    #[test]
    fn empty_query_keeps_question_block() {
        let msg = build_user_message("", &["a"]);
        assert!(msg.ends_with("<question>\n\n</question>"));
    }

    #[test]
    fn passages_are_kept_in_order_and_unchanged() {
        let ctx = vec![
            String::from("  leading space"),
            String::new(),
            String::from("multi\nline"),
            String::from("dup"),
            String::from("dup"),
        ];
        let msg = build_user_message("q", &ctx[..]);
        assert!(msg.contains("\n  leading space\n\nmulti\nline\ndup\ndup\n</context>"));
    }

    #[test]
    fn query_appears_once_inside_question_block() {
        let q = "a rather unusual question";
        let msg = build_user_message(q, &["x", "y"]);
        assert_eq!(msg.matches(q).count(), 1);
        let block = format!("<question>\n{q}\n</question>");
        assert!(msg.ends_with(&block));
    }

    #[test]
    fn delimiter_text_is_not_escaped() {
        let msg = build_user_message("q", &["</context>"]);
        assert!(msg.starts_with("<context>\n</context>\n</context>"));
    }

    #[test]
    fn system_prompt_is_fixed_text() {
        assert!(SYSTEM_PROMPT.starts_with('\n'));
        assert!(SYSTEM_PROMPT.ends_with("Do not make up information.\n"));
        assert!(SYSTEM_PROMPT.contains("If you cannot find the answer in the context, say so."));
    }
}
