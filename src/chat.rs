//! Response builder: turns a user message into the simulated chat reply.
//!
//! Each call is stateless apart from reading the shared [`ContextStore`]:
//! assemble the prompt (current document, assistant instruction, labeled
//! user message), hand the whole text to the translation collaborator, and
//! report the outcome.

use crate::context::ContextStore;
use crate::prompt;
use crate::translate::Translator;

/// Outcome of a chat turn.
///
/// Translation failure is a distinct variant rather than a marker string,
/// so callers can branch on it deterministically. [`ChatReply::into_content`]
/// renders whichever variant into the reply string the HTTP contract expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// The assembled prompt, translated into the target language.
    Translated(String),
    /// The translation collaborator failed; holds the failure description.
    Failed(String),
}

impl ChatReply {
    /// Render the reply string returned to the client.
    ///
    /// Failures become a warning-prefixed message rather than an error
    /// status: a chat call always yields a string.
    pub fn into_content(self) -> String {
        match self {
            Self::Translated(text) => text,
            Self::Failed(reason) => format!("⚠️ Translation Error: {}", reason),
        }
    }
}

/// Produce a reply for `message`, answering in `target_lang`.
///
/// Reads the store's current document (if any) into the prompt, then passes
/// the assembled text through the translator with source auto-detection.
/// Collaborator errors of any kind become [`ChatReply::Failed`]; this
/// function never returns an error.
pub async fn chat_reply(
    store: &ContextStore,
    translator: &dyn Translator,
    message: &str,
    target_lang: &str,
) -> ChatReply {
    let document = store.current_document().map(|(_, content)| content);
    let assembled = prompt::build_prompt(document.as_deref(), message, target_lang);

    match translator.translate(&assembled, target_lang).await {
        Ok(text) => ChatReply::Translated(text),
        Err(err) => {
            tracing::warn!("translation failed: {:#}", err);
            ChatReply::Failed(format!("{:#}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    /// Returns the prompt unchanged, exposing the pre-translation text.
    struct PassThrough;

    #[async_trait]
    impl Translator for PassThrough {
        async fn translate(&self, text: &str, _target_lang: &str) -> Result<String> {
            Ok(text.to_string())
        }
    }

    /// Stands in for an unreachable translation service.
    struct AlwaysFails;

    #[async_trait]
    impl Translator for AlwaysFails {
        async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn test_reply_includes_current_document() {
        let store = ContextStore::new();
        store.set_current_doc("a.txt", "The sky is blue.");

        let reply = chat_reply(&store, &PassThrough, "What color is the sky?", "english").await;
        assert_eq!(
            reply,
            ChatReply::Translated(
                "Use the following document to answer questions:\nThe sky is blue.\n\n\
                 You are an AI assistant. Answer the user's question clearly in english.\n\
                 User asked: What color is the sky?"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_reply_without_document_has_no_context_block() {
        let store = ContextStore::new();

        let reply = chat_reply(&store, &PassThrough, "Hello", "english").await;
        let content = reply.into_content();
        assert!(!content.contains("Use the following document"));
        assert!(content.starts_with("You are an AI assistant."));
    }

    #[tokio::test]
    async fn test_reply_after_reset_has_no_context_block() {
        let store = ContextStore::new();
        store.set_current_doc("a.txt", "The sky is blue.");
        store.reset();

        let reply = chat_reply(&store, &PassThrough, "Hello", "english").await;
        assert!(!reply.into_content().contains("The sky is blue."));
    }

    #[tokio::test]
    async fn test_translator_failure_becomes_warning_reply() {
        let store = ContextStore::new();

        let reply = chat_reply(&store, &AlwaysFails, "Hello", "english").await;
        match &reply {
            ChatReply::Failed(reason) => assert!(reason.contains("connection refused")),
            other => panic!("expected Failed, got {:?}", other),
        }

        let content = reply.into_content();
        assert!(content.starts_with("⚠️ Translation Error:"));
        assert!(content.contains("connection refused"));
    }
}
