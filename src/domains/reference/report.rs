//! Markdown reports over the module index.
//!
//! Every function here returns user-facing text. Missing arguments and
//! unknown names produce an explanatory message rather than an error.

use super::index::ModuleIndex;

/// Substring that marks an export as an event type.
pub const EVENT_MARKER: &str = "Event";

/// Describe one module: source path, export count and every export.
pub fn module_info(index: &ModuleIndex, module_name: Option<&str>) -> String {
    let Some(module_name) = module_name.filter(|m| !m.is_empty()) else {
        return "Module name is required".to_string();
    };

    let Some(record) = index.get(module_name) else {
        let available = index.module_names().collect::<Vec<_>>().join(", ");
        return format!("Module '{module_name}' not found. Available modules: {available}");
    };

    let mut result = format!("# {module_name}\n\n");
    result.push_str(&format!("**File:** {}\n\n", record.source_path.display()));
    result.push_str(&format!("**Exports:** {} items\n\n", record.exports.len()));

    if record.exports.is_empty() {
        result.push_str("No exports found in __all__\n");
    } else {
        result.push_str("## Available Exports:\n");
        for export in &record.exports {
            result.push_str(&format!("- `{export}`\n"));
        }
    }

    result
}

/// List every export whose name contains `query`, ignoring case.
pub fn search_exports(index: &ModuleIndex, query: Option<&str>) -> String {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return "Search query is required".to_string();
    };

    let hits = index.search(query);
    if hits.is_empty() {
        return format!("No exports found matching '{query}'");
    }

    let lines: Vec<String> = hits
        .iter()
        .map(|hit| format!("- `{}` from `{}`", hit.export, hit.module))
        .collect();

    format!("# Search Results for '{query}'\n\n{}", lines.join("\n"))
}

/// Describe one event type, or list all of them when `event_type` is absent.
pub fn event_info(index: &ModuleIndex, event_type: Option<&str>) -> String {
    let Some(record) = index.event_module() else {
        return "Event module not found".to_string();
    };
    let module_name = index.event_module_name();

    match event_type.filter(|e| !e.is_empty()) {
        Some(event_type) if record.exports.iter().any(|e| e == event_type) => {
            event_usage(module_name, event_type)
        }
        Some(event_type) => {
            let available = event_exports(&record.exports).collect::<Vec<_>>().join(", ");
            format!("Event '{event_type}' not found. Available events: {available}")
        }
        None => {
            let events: Vec<&str> = event_exports(&record.exports).collect();
            let mut result = format!("# Available Events ({})\n\n", events.len());
            for event in events {
                result.push_str(&format!("- `{event}`\n"));
            }
            result
        }
    }
}

/// Exports that name event types.
pub fn event_exports(exports: &[String]) -> impl Iterator<Item = &str> {
    exports
        .iter()
        .map(String::as_str)
        .filter(|e| e.contains(EVENT_MARKER))
}

/// Handler function name for an event type, e.g. `on_playerjoin`.
pub fn handler_name(event_type: &str) -> String {
    format!("on_{}", event_type.to_lowercase().replace("event", ""))
}

fn event_usage(module_name: &str, event_type: &str) -> String {
    let mut result = format!(
        "# {event_type}\n\nThis event is available in {module_name} module.\n\n"
    );
    result.push_str("## Usage Example:\n\n");
    result.push_str(&format!(
        "```python\nfrom {module_name} import {event_type}, event_handler\n\n"
    ));
    result.push_str("@event_handler\n");
    result.push_str(&format!(
        "def {}(self, event: {event_type}):\n",
        handler_name(event_type)
    ));
    result.push_str("    # Handle the event\n");
    result.push_str("    pass\n```");
    result
}
