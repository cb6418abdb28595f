//! Event handling guide.

use super::PromptDefinition;

/// Event handlers, priorities and cancellation.
pub struct EventHandlingPrompt;

impl PromptDefinition for EventHandlingPrompt {
    const NAME: &'static str = "event_handling";
    const DESCRIPTION: &'static str = "Learn about event handling in Endstone";

    fn content() -> &'static str {
        GUIDE
    }
}

const GUIDE: &str = r#"
# Event Handling in Endstone

## Basic Event Handler

```python
from endstone.event import event_handler, PlayerJoinEvent

@event_handler
def on_player_join(self, event: PlayerJoinEvent):
    player = event.player
    self.logger.info(f"Welcome {player.name}!")
```

## Event Priorities

- `EventPriority.LOWEST`
- `EventPriority.LOW`
- `EventPriority.NORMAL` (default)
- `EventPriority.HIGH`
- `EventPriority.HIGHEST`

## Cancellable Events

Some events can be cancelled:

```python
@event_handler
def on_block_break(self, event: BlockBreakEvent):
    if some_condition:
        event.cancelled = True
```
"#;
