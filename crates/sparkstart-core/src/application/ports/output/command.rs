use std::fmt;

/// An external command line with optional secret arguments.
///
/// Secret arguments are passed to the process verbatim but are masked in
/// `Display`/`Debug`, and [`CommandSpec::scrub`] removes them from captured
/// output before it is surfaced in an error.
#[derive(Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<CommandArg>,
}

#[derive(Clone, PartialEq, Eq)]
enum CommandArg {
    Plain(String),
    Secret { value: String, masked: String },
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(CommandArg::Plain(arg.into()));
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args
            .extend(args.into_iter().map(|a| CommandArg::Plain(a.into())));
        self
    }

    /// Add an argument that must never be shown; `masked` is shown instead.
    pub fn secret_arg(mut self, value: impl Into<String>, masked: impl Into<String>) -> Self {
        self.args.push(CommandArg::Secret {
            value: value.into(),
            masked: masked.into(),
        });
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Real argument values, for handing to the OS.
    pub fn exposed_args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| match a {
            CommandArg::Plain(v) => v.as_str(),
            CommandArg::Secret { value, .. } => value.as_str(),
        })
    }

    /// Replace every secret value occurring in `text` with its mask.
    pub fn scrub(&self, text: &str) -> String {
        self.args.iter().fold(text.to_string(), |acc, a| match a {
            CommandArg::Secret { value, masked } if !value.is_empty() => {
                acc.replace(value.as_str(), masked)
            }
            _ => acc,
        })
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let shown = match arg {
                CommandArg::Plain(v) => v,
                CommandArg::Secret { masked, .. } => masked,
            };
            if shown.contains(' ') {
                write!(f, " \"{shown}\"")?;
            } else {
                write!(f, " {shown}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandSpec({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandSpec::new("git").args(["commit", "-m", "Initial commit"]);
        assert_eq!(cmd.to_string(), r#"git commit -m "Initial commit""#);
    }

    #[test]
    fn secrets_are_passed_but_never_shown() {
        let cmd = CommandSpec::new("git")
            .args(["remote", "add", "origin"])
            .secret_arg(
                "https://ghp_x@github.com/o/r.git",
                "https://***@github.com/o/r.git",
            );

        assert_eq!(
            cmd.exposed_args().last(),
            Some("https://ghp_x@github.com/o/r.git")
        );
        assert!(!cmd.to_string().contains("ghp_x"));
        assert!(!format!("{cmd:?}").contains("ghp_x"));
    }

    #[test]
    fn scrub_masks_secret_in_captured_output() {
        let cmd = CommandSpec::new("git").secret_arg("https://tok@h/r", "https://***@h/r");
        let stderr = "fatal: unable to access 'https://tok@h/r': denied";
        assert_eq!(
            cmd.scrub(stderr),
            "fatal: unable to access 'https://***@h/r': denied"
        );
    }
}
