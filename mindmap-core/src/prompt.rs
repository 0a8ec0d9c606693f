//! The instructional system prompt sent with every completion request.

/// Embedded at compile time so the deployed artifact never depends on a
/// runtime file lookup.
pub const SYSTEM_PROMPT: &str = include_str!("../prompts/system_prompt.md");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_demands_nested_heading_output() {
        assert!(SYSTEM_PROMPT.contains("mindmap.js"));
        assert!(SYSTEM_PROMPT.contains("nested headings"));
        assert!(SYSTEM_PROMPT.contains("Do not use bullet points"));
    }
}
