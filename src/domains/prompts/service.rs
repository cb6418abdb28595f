//! Prompt service implementation.
//!
//! The PromptService holds the registered guides and serves listing and
//! retrieval requests. Prompts are registered via `registry.rs`.

use indexmap::IndexMap;
use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use tracing::info;

use super::definitions::GuidePrompt;
use super::error::PromptError;
use super::registry::get_all_prompts;

/// Service for listing and retrieving prompts.
pub struct PromptService {
    /// Registered prompts keyed by name, in registration order.
    prompts: IndexMap<String, GuidePrompt>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: IndexMap::new(),
        };

        for prompt in get_all_prompts() {
            service.register_prompt(prompt);
        }

        service
    }

    /// Register a prompt.
    pub fn register_prompt(&mut self, prompt: GuidePrompt) {
        info!("Registering prompt: {}", prompt.name);
        self.prompts.insert(prompt.name.clone(), prompt);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|prompt| Prompt {
                name: prompt.name.clone(),
                title: None,
                description: Some(prompt.description.clone()),
                arguments: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt's guide as a single user message.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let prompt = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        Ok(GetPromptResult {
            description: Some(format!("Endstone {} guide", prompt.name)),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                prompt.content.clone(),
            )],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
