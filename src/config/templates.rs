//! Replacement template rendering
//!
//! The replacement value is produced from a template using simple
//! `{{variable}}` syntax. Available variables are `hash` (the version
//! identifier) and `date` (local build date, `YYYY-MM-DD`).

use std::collections::HashMap;

/// Template for the value written over the placeholder
#[derive(Debug, Clone)]
pub struct ReplacementTemplate {
    template: String,
}

impl ReplacementTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render with the given hash and today's date
    pub fn render_hash(&self, hash: &str) -> String {
        let context = Self::build_context(hash, &chrono::Local::now().format("%Y-%m-%d").to_string());
        self.render(&context)
    }

    fn build_context(hash: &str, date: &str) -> HashMap<String, String> {
        let mut ctx = HashMap::new();
        ctx.insert("hash".to_string(), hash.to_string());
        ctx.insert("date".to_string(), date.to_string());
        ctx
    }

    /// Render a template string with variable substitution
    ///
    /// Tokens are replaced in one left-to-right pass, so substituted values
    /// are never scanned again. Unknown variables are left untouched.
    pub fn render(&self, context: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                result.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let name = &after_open[..end];
            match context.get(name) {
                Some(value) => result.push_str(value),
                None => result.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }
        result.push_str(rest);

        crate::debug_context!("ReplacementTemplate", "Rendered {:?} -> {:?}", self.template, result);
        result
    }
}
