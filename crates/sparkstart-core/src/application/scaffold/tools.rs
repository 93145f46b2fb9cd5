//! In-place amendment of existing dependency manifests.
//!
//! Both functions are idempotent: they return `None` when every section they
//! would add is already present, and never rewrite sections that exist.

use std::path::Path;

use serde_json::{Map, Value};

use crate::{application::ApplicationError, error::SparkResult};

const PYPROJECT_TOOL_SECTIONS: [(&str, &str); 3] = [
    (
        "black",
        "[tool.black]\nline-length = 100\ntarget-version = ['py312']\n",
    ),
    (
        "ruff",
        "[tool.ruff]\nline-length = 100\ntarget-version = \"py312\"\n",
    ),
    (
        "mypy",
        "[tool.mypy]\npython_version = \"3.12\"\nwarn_return_any = true\nwarn_unused_configs = true\n",
    ),
];

const NPM_SCRIPTS: [(&str, &str); 5] = [
    ("lint", "eslint src/ --ext .js,.jsx,.ts,.tsx"),
    ("lint:fix", "eslint src/ --ext .js,.jsx,.ts,.tsx --fix"),
    ("format", "prettier --write src/"),
    ("format:check", "prettier --check src/"),
    ("type-check", "tsc --noEmit"),
];

/// Append missing `[tool.black]`, `[tool.ruff]` and `[tool.mypy]` tables.
pub fn amend_pyproject(content: &str, path: &Path) -> SparkResult<Option<String>> {
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
        ApplicationError::InvalidManifest {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        }
    })?;

    let existing_tools = table.get("tool").and_then(|t| t.as_table());
    let missing: Vec<&str> = PYPROJECT_TOOL_SECTIONS
        .iter()
        .filter(|(name, _)| !existing_tools.is_some_and(|t| t.contains_key(*name)))
        .map(|(_, section)| *section)
        .collect();

    if missing.is_empty() {
        return Ok(None);
    }

    let mut amended = content.trim_end().to_string();
    for section in missing {
        amended.push_str("\n\n");
        amended.push_str(section.trim_end());
    }
    amended.push('\n');
    Ok(Some(amended))
}

/// Add the lint/format npm scripts that are not defined yet.
pub fn amend_package_json(content: &str, path: &Path) -> SparkResult<Option<String>> {
    let invalid = |reason: String| ApplicationError::InvalidManifest {
        path: path.to_path_buf(),
        reason,
    };

    let mut manifest: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| invalid("top level is not an object".into()))?;
    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| invalid("\"scripts\" is not an object".into()))?;

    let mut changed = false;
    for (name, command) in NPM_SCRIPTS {
        if !scripts.contains_key(name) {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
            changed = true;
        }
    }

    if !changed {
        return Ok(None);
    }

    let mut out = serde_json::to_string_pretty(&manifest).map_err(|e| invalid(e.to_string()))?;
    out.push('\n');
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SparkError;

    const PYPROJECT: &str = "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n";

    #[test]
    fn pyproject_gains_all_three_tables() {
        let out = amend_pyproject(PYPROJECT, Path::new("pyproject.toml"))
            .unwrap()
            .unwrap();

        assert!(out.starts_with(PYPROJECT.trim_end()));
        for table in ["[tool.black]", "[tool.ruff]", "[tool.mypy]"] {
            assert_eq!(out.matches(table).count(), 1, "{table}");
        }
        // Still valid TOML.
        assert!(out.parse::<toml::Table>().is_ok());
    }

    #[test]
    fn pyproject_amendment_is_idempotent() {
        let once = amend_pyproject(PYPROJECT, Path::new("pyproject.toml"))
            .unwrap()
            .unwrap();
        assert_eq!(amend_pyproject(&once, Path::new("pyproject.toml")).unwrap(), None);
    }

    #[test]
    fn pyproject_keeps_existing_tool_table() {
        let input = format!("{PYPROJECT}\n[tool.ruff]\nline-length = 88\n");
        let out = amend_pyproject(&input, Path::new("pyproject.toml"))
            .unwrap()
            .unwrap();
        assert!(out.contains("line-length = 88"));
        assert_eq!(out.matches("[tool.ruff]").count(), 1);
    }

    #[test]
    fn malformed_pyproject_is_reported() {
        let err = amend_pyproject("[project\nname=", Path::new("pyproject.toml")).unwrap_err();
        assert!(matches!(
            err,
            SparkError::Application(ApplicationError::InvalidManifest { .. })
        ));
    }

    #[test]
    fn package_json_gains_missing_scripts_only() {
        let input = r#"{"name":"demo","scripts":{"test":"jest","lint":"custom"}}"#;
        let out = amend_package_json(input, Path::new("package.json"))
            .unwrap()
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "demo");
        assert_eq!(value["scripts"]["test"], "jest");
        assert_eq!(value["scripts"]["lint"], "custom");
        assert_eq!(value["scripts"]["format"], "prettier --write src/");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn package_json_amendment_is_idempotent() {
        let once = amend_package_json(r#"{"name":"demo"}"#, Path::new("package.json"))
            .unwrap()
            .unwrap();
        assert_eq!(amend_package_json(&once, Path::new("package.json")).unwrap(), None);
    }

    #[test]
    fn package_json_must_be_an_object() {
        assert!(amend_package_json("[]", Path::new("package.json")).is_err());
        assert!(amend_package_json(r#"{"scripts": 3}"#, Path::new("package.json")).is_err());
    }
}
