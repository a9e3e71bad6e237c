use crate::core::interaction::events::Command;

/// Mouse bindings. Key bindings come from the windowing layer.
pub const POINTER_HELP: &[(&str, &str)] = &[
    ("scroll up", "zoom in at the cursor"),
    ("scroll down", "zoom out at the cursor"),
    ("left drag", "pan the view"),
    ("right drag", "zoom into the selected rectangle"),
];

/// Help text listing pointer gestures and one line per command, labelled
/// with the key `key_for` reports for it.
pub fn help_text(key_for: impl Fn(Command) -> &'static str) -> String {
    let mut lines = Vec::with_capacity(POINTER_HELP.len() + Command::ALL.len() + 1);
    lines.push("controls:".to_string());

    for (gesture, description) in POINTER_HELP {
        lines.push(format!("  {:<12} {}", gesture, description));
    }

    for &command in Command::ALL {
        lines.push(format!("  {:<12} {}", key_for(command), command.description()));
    }

    lines.join("\n")
}
