//! In-memory `CompletionProvider` for tests. Records every prompt it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Completion, CompletionProvider, LlmError, Usage};

enum Reply {
    Text(String),
    Failure { status: u16, message: String },
}

pub struct MockCompletionProvider {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl MockCompletionProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Reply::Failure {
                status,
                message: message.to_string(),
            },
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<Completion, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(Completion {
                text: text.clone(),
                usage: Some(Usage {
                    prompt_tokens: prompt.split_whitespace().count() as u32,
                    completion_tokens: text.split_whitespace().count() as u32,
                }),
            }),
            Reply::Failure { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
