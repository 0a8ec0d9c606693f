//! Post-processing of model output into renderer-friendly Markdown.

/// Normalize completion text for heading-based mind map renderers.
///
/// Models occasionally indent heading lines or pad the document with blank
/// lines, which breaks `#`-prefix parsing in mindmap.js. This strips leading
/// whitespace from every line and drops blank lines; heading text itself is
/// left untouched.
///
/// Applied to completions only when the deployment opts in; the default is
/// to relay the model output verbatim.
pub fn normalize_headings(raw: &str) -> String {
    raw.lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
