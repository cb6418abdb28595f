//! Plugin development guide.

use super::PromptDefinition;

/// Overview of the plugin structure and lifecycle.
pub struct PluginDevelopmentPrompt;

impl PromptDefinition for PluginDevelopmentPrompt {
    const NAME: &'static str = "plugin_development";
    const DESCRIPTION: &'static str = "Get guidance on developing Endstone plugins";

    fn content() -> &'static str {
        GUIDE
    }
}

const GUIDE: &str = r#"
# Endstone Plugin Development Guide

## Basic Plugin Structure

1. **Inherit from Plugin class**
   ```python
   from endstone.plugin import Plugin

   class MyPlugin(Plugin):
       pass
   ```

2. **Implement lifecycle methods**
   - `on_enable()`: Called when plugin is enabled
   - `on_disable()`: Called when plugin is disabled

3. **Plugin metadata**
   - Set class attributes: name, version, api_version
   - Or use plugin.toml configuration file

## Key Components

- **Events**: Handle server events (player join, block break, etc.)
- **Commands**: Create custom commands
- **Permissions**: Manage player permissions
- **Scheduler**: Schedule tasks
- **Configuration**: Store plugin settings
"#;
