//! Implementation of the `sparkstart list` command.

use serde::Serialize;

use sparkstart_core::domain::{Language, Template};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct LanguageEntry {
    name: &'static str,
    display_name: &'static str,
    /// Manifest that `--tools` amends in place, if any.
    amended_manifest: Option<&'static str>,
    templates: Vec<TemplateEntry>,
}

#[derive(Debug, Serialize)]
struct TemplateEntry {
    name: &'static str,
    description: &'static str,
}

fn catalogue() -> Vec<LanguageEntry> {
    Language::ALL
        .iter()
        .map(|lang| LanguageEntry {
            name: lang.as_str(),
            display_name: lang.display_name(),
            amended_manifest: lang.amendable_manifest(),
            templates: lang
                .templates()
                .map(|t: Template| TemplateEntry {
                    name: t.as_str(),
                    description: t.description(),
                })
                .collect(),
        })
        .collect()
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let entries = catalogue();

    // `--output-format json` overrides the table.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Languages:")?;
            for entry in &entries {
                output.print(&format!("  {:<12} {}", entry.name, entry.display_name))?;
            }
            output.print("")?;
            output.header("Templates:")?;
            for entry in &entries {
                for template in &entry.templates {
                    output.print(&format!(
                        "  {:<12} {} ({} only)",
                        template.name, template.description, entry.name
                    ))?;
                }
            }
            output.print("")?;
            output.print("Every language also supports --tutorial, --devcontainer and --tools.")?;
        }
        ListFormat::List => {
            for entry in &entries {
                output.print(entry.name)?;
            }
        }
        ListFormat::Json => output.json(&entries)?,
    }

    Ok(())
}
