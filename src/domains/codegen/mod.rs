//! Plugin scaffolding.
//!
//! Assembles a Python plugin skeleton from a fixed base template and
//! optional feature fragments. No templating engine is involved: fragments
//! are appended in a fixed order when their flag is requested.

/// Optional fragments in emission order.
const FEATURE_FRAGMENTS: &[(&str, &str)] = &[
    ("events", EVENTS_FRAGMENT),
    ("commands", COMMANDS_FRAGMENT),
];

/// Generate a plugin skeleton for `plugin_name`.
///
/// Recognized features are `events` and `commands`; anything else is
/// ignored.
pub fn generate_plugin_template<S: AsRef<str>>(
    plugin_name: Option<&str>,
    features: &[S],
) -> String {
    let Some(plugin_name) = plugin_name.filter(|n| !n.is_empty()) else {
        return "Plugin name is required".to_string();
    };

    let mut template = BASE_TEMPLATE.replace("{{plugin_name}}", plugin_name);

    for (flag, fragment) in FEATURE_FRAGMENTS {
        if features.iter().any(|f| f.as_ref() == *flag) {
            template.push_str(fragment);
        }
    }

    template.push_str(CLOSING_FRAGMENT);
    template
}

/// Names of the feature flags that produce output.
pub fn supported_features() -> impl Iterator<Item = &'static str> {
    FEATURE_FRAGMENTS.iter().map(|(flag, _)| *flag)
}

const BASE_TEMPLATE: &str = r#"from endstone.plugin import Plugin
from endstone import Logger

class {{plugin_name}}Plugin(Plugin):
    
    def __init__(self):
        super().__init__()
        self.logger: Logger = self.get_logger()
    
    def on_enable(self) -> None:
        """Called when the plugin is enabled."""
        self.logger.info(f"{self.name} v{self.version} has been enabled!")
"#;

const EVENTS_FRAGMENT: &str = r#"
        # Register event handlers
        self.register_events()
    
    def register_events(self):
        """Register event handlers."""
        from endstone.event import event_handler, PlayerJoinEvent
        
        @event_handler
        def on_player_join(self, event: PlayerJoinEvent):
            player = event.player
            self.logger.info(f"Player {player.name} joined the server!")
"#;

const COMMANDS_FRAGMENT: &str = r#"
        # Register commands
        self.register_commands()
    
    def register_commands(self):
        """Register custom commands."""
        from endstone.command import Command, CommandExecutor
        
        # Example command implementation
        pass
"#;

const CLOSING_FRAGMENT: &str = r#"
    
    def on_disable(self) -> None:
        """Called when the plugin is disabled."""
        self.logger.info(f"{self.name} has been disabled!")
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FEATURES: &[&str] = &[];

    #[test]
    fn test_base_template() {
        let text = generate_plugin_template(Some("Foo"), NO_FEATURES);
        assert!(text.contains("class FooPlugin(Plugin):"));
        assert!(text.contains("def on_enable(self) -> None:"));
        assert!(text.contains("def on_disable(self) -> None:"));
        assert!(!text.contains("register_events"));
        assert!(!text.contains("register_commands"));
    }

    #[test]
    fn test_all_features_in_fixed_order() {
        let text = generate_plugin_template(Some("Foo"), &["commands", "events"]);
        let events = text.find("def register_events").unwrap();
        let commands = text.find("def register_commands").unwrap();
        let disable = text.find("def on_disable").unwrap();
        assert!(events < commands);
        assert!(commands < disable);
        assert!(text.contains("@event_handler"));
    }

    #[test]
    fn test_unknown_features_ignored() {
        let with_unknown = generate_plugin_template(Some("Foo"), &["permissions", "events"]);
        let events_only = generate_plugin_template(Some("Foo"), &["events"]);
        assert_eq!(with_unknown, events_only);
    }

    #[test]
    fn test_python_braces_are_single() {
        let text = generate_plugin_template(Some("Foo"), &["events"]);
        assert!(text.contains(r#"f"{self.name} v{self.version} has been enabled!""#));
        assert!(text.contains(r#"f"Player {player.name} joined the server!""#));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_name_required() {
        assert!(generate_plugin_template(None, NO_FEATURES).contains("required"));
        assert!(generate_plugin_template(Some(""), &["events"]).contains("required"));
    }

    #[test]
    fn test_supported_features() {
        let features: Vec<_> = supported_features().collect();
        assert_eq!(features, vec!["events", "commands"]);
    }

    #[test]
    fn test_blank_lines_keep_indentation() {
        let text = generate_plugin_template(Some("Foo"), &["events", "commands"]);
        assert!(text.contains("class FooPlugin(Plugin):\n    \n    def __init__(self):"));
        assert!(text.contains("PlayerJoinEvent\n        \n        @event_handler"));
        assert!(text.contains("CommandExecutor\n        \n        # Example"));
        assert!(text.ends_with(
            "pass\n\n    \n    def on_disable(self) -> None:\n        \"\"\"Called when the plugin is disabled.\"\"\"\n        self.logger.info(f\"{self.name} has been disabled!\")\n"
        ));
    }
}
