//! Display labels and icons for well-known section tags.
//!
//! Renderers show each [`Section`](crate::parse::Section) as a labeled block.
//! Known tags get a friendly label and icon; anything else falls back to the
//! raw tag and a generic document icon.

/// Icon used for tags without a dedicated one.
pub const DEFAULT_SECTION_ICON: &str = "📄";

/// Display label for a section tag.
///
/// ```
/// use launchpad_content::labels::section_label;
///
/// assert_eq!(section_label("task_format"), "Task Format");
/// assert_eq!(section_label("custom_block"), "custom_block");
/// ```
pub fn section_label(tag: &str) -> &str {
    match tag {
        "role" => "Role",
        "constraints" => "Constraints",
        "workflow" => "Workflow",
        "task_format" => "Task Format",
        "output_format" => "Output Format",
        "success_criteria" => "Success Criteria",
        "examples" => "Examples",
        "context" => "Context",
        "instructions" => "Instructions",
        "guidelines" => "Guidelines",
        "prompt" => "Prompt",
        other => other,
    }
}

/// Icon for a section tag.
pub fn section_icon(tag: &str) -> &'static str {
    match tag {
        "role" => "👤",
        "constraints" => "⚠️",
        "workflow" => "🔄",
        "task_format" => "📋",
        "output_format" => "📤",
        "success_criteria" => "✅",
        "examples" => "💡",
        "context" => "📖",
        "instructions" => "📝",
        "guidelines" => "📌",
        "prompt" => "💬",
        _ => DEFAULT_SECTION_ICON,
    }
}
