//! Command creation guide.

use super::PromptDefinition;

/// Custom commands and argument handling.
pub struct CommandCreationPrompt;

impl PromptDefinition for CommandCreationPrompt {
    const NAME: &'static str = "command_creation";
    const DESCRIPTION: &'static str = "Guide for creating custom commands";

    fn content() -> &'static str {
        GUIDE
    }
}

const GUIDE: &str = r#"
# Creating Commands in Endstone

## Basic Command

```python
from endstone.command import Command, CommandExecutor

class MyCommandExecutor(CommandExecutor):
    def on_command(self, sender, command, args):
        sender.send_message("Hello from custom command!")
        return True

# Register the command
command = Command("mycommand")
command.executor = MyCommandExecutor()
self.server.command_map.register(command)
```

## Command with Arguments

```python
def on_command(self, sender, command, args):
    if len(args) == 0:
        sender.send_message("Usage: /mycommand <argument>")
        return False

    arg = args[0]
    sender.send_message(f"You said: {arg}")
    return True
```
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_creation_content() {
        assert_eq!(CommandCreationPrompt::NAME, "command_creation");
        assert!(CommandCreationPrompt::content().contains("CommandExecutor"));
    }
}
