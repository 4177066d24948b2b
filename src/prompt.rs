//! Prompt assembly for the simulated chat reply.
//!
//! The prompt is the full text handed to the translation collaborator: an
//! optional document-context block, the assistant instruction, and the
//! labeled user message.

pub const DOCUMENT_BLOCK_TEMPLATE: &str =
    "Use the following document to answer questions:\n{document}\n\n";

pub const ASSISTANT_INSTRUCTION_TEMPLATE: &str =
    "You are an AI assistant. Answer the user's question clearly in {target_lang}.";

/// Assemble the prompt for a chat turn.
///
/// When `document` is `None` (nothing uploaded, or context was reset), the
/// document block is omitted entirely. `target_lang` is interpolated into
/// the instruction text as-is.
pub fn build_prompt(document: Option<&str>, message: &str, target_lang: &str) -> String {
    let mut prompt = String::new();

    if let Some(text) = document {
        prompt.push_str(&DOCUMENT_BLOCK_TEMPLATE.replace("{document}", text));
    }

    prompt.push_str(&ASSISTANT_INSTRUCTION_TEMPLATE.replace("{target_lang}", target_lang));
    prompt.push_str("\nUser asked: ");
    prompt.push_str(message);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_with_document() {
        let prompt = build_prompt(
            Some("The sky is blue."),
            "What color is the sky?",
            "english",
        );
        assert_eq!(
            prompt,
            "Use the following document to answer questions:\nThe sky is blue.\n\n\
             You are an AI assistant. Answer the user's question clearly in english.\n\
             User asked: What color is the sky?"
        );
    }

    #[test]
    fn test_prompt_without_document() {
        let prompt = build_prompt(None, "Hello", "english");
        assert_eq!(
            prompt,
            "You are an AI assistant. Answer the user's question clearly in english.\n\
             User asked: Hello"
        );
        assert!(!prompt.contains("Use the following document"));
    }

    #[test]
    fn test_target_lang_passed_through_verbatim() {
        let prompt = build_prompt(None, "Hi", "french");
        assert!(prompt.contains("clearly in french."));
    }

    #[test]
    fn test_document_content_is_literal() {
        let prompt = build_prompt(Some("line one\nline two"), "q", "english");
        assert!(prompt.contains("line one\nline two"));
    }

    #[test]
    fn test_templates_have_placeholders() {
        assert!(DOCUMENT_BLOCK_TEMPLATE.contains("{document}"));
        assert!(ASSISTANT_INSTRUCTION_TEMPLATE.contains("{target_lang}"));
    }
}
