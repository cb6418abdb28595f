//! Prompt definitions module.
//!
//! Each prompt is a static development guide defined in its own file.
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_guide.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod command_creation;
mod event_handling;
mod plugin_development;

pub use command_creation::CommandCreationPrompt;
pub use event_handling::EventHandlingPrompt;
pub use plugin_development::PluginDevelopmentPrompt;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and body.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt covers.
    const DESCRIPTION: &'static str;

    /// The guide text returned to the client.
    fn content() -> &'static str;
}

/// A registered guide prompt.
#[derive(Debug, Clone)]
pub struct GuidePrompt {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt covers.
    pub description: String,

    /// The guide text.
    pub content: String,
}

impl GuidePrompt {
    /// Build a guide from a prompt definition.
    pub fn from_definition<P: PromptDefinition>() -> Self {
        Self {
            name: P::NAME.to_string(),
            description: P::DESCRIPTION.to_string(),
            content: P::content().to_string(),
        }
    }
}
