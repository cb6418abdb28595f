//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    CommandCreationPrompt, EventHandlingPrompt, GuidePrompt, PluginDevelopmentPrompt,
};

/// Get all registered prompts, in listing order.
pub fn get_all_prompts() -> Vec<GuidePrompt> {
    vec![
        GuidePrompt::from_definition::<PluginDevelopmentPrompt>(),
        GuidePrompt::from_definition::<EventHandlingPrompt>(),
        GuidePrompt::from_definition::<CommandCreationPrompt>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::PromptDefinition;

    #[test]
    fn test_get_all_prompts_in_order() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                PluginDevelopmentPrompt::NAME,
                EventHandlingPrompt::NAME,
                CommandCreationPrompt::NAME,
            ]
        );
        assert_eq!(
            names,
            vec!["plugin_development", "event_handling", "command_creation"]
        );
    }

    #[test]
    fn test_prompts_carry_guide_text() {
        for prompt in get_all_prompts() {
            assert!(!prompt.description.is_empty());
            assert!(prompt.content.contains("# "), "{} has no heading", prompt.name);
        }
    }
}
