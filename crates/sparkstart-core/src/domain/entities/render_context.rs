use std::collections::HashMap;

/// Placeholder values substituted into registry bodies.
///
/// ## Built-in Variables
///
/// | Variable | Example | Used by |
/// |----------|---------|---------|
/// | `PROJECT_NAME` | "MyGame" | README, Cargo.toml, CMake |
/// | `PROJECT_NAME_SNAKE` | "my_game" | python modules |
/// | `PROJECT_NAME_KEBAB` | "my-game" | package.json (npm wants lowercase) |
///
/// Unknown `{{PLACEHOLDERS}}` are left untouched, so template bodies may
/// contain literal double braces as long as they do not spell a known key.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(project_name: &str) -> Self {
        let mut variables = HashMap::new();
        variables.insert("PROJECT_NAME", project_name.to_string());
        variables.insert("PROJECT_NAME_SNAKE", split_words(project_name).join("_"));
        variables.insert("PROJECT_NAME_KEBAB", split_words(project_name).join("-"));
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` for the known keys.
    pub fn render(&self, body: &str) -> String {
        let mut result = body.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Lowercase words split on `-`, `_` and lower-to-upper case transitions.
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in s.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
