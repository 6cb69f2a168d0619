// Shared prompt fragments.
// Each module that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces several templates end with.

use serde::Serialize;

/// Closing line for every free-text question template.
pub const QUESTION_ONLY_INSTRUCTION: &str =
    "Return only the question text without any additional explanation.";

/// Closing line for templates that expect a bare JSON array.
pub const JSON_ONLY_INSTRUCTION: &str = "Only return JSON, no extra text.";

/// Pretty-prints a value for interpolation into a prompt (two-space indent).
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Fills `{name}` placeholders in `template` from `vars` in a single pass.
///
/// Substituted values are never rescanned, so user text containing `{role}`
/// stays literal. Braces that do not name a variable (JSON examples in the
/// templates) are copied through untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
