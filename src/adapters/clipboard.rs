use crate::core::Clipboard;
use crate::utils::error::{ImpactError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    fn pipe(&self, text: &str) -> std::io::Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is dropped before waiting so the tool sees end of input.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Copies text by piping it into the first platform clipboard tool that works.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_commands(Self::platform_commands())
    }

    pub fn with_commands(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }

    fn platform_commands() -> Vec<ClipboardCommand> {
        if cfg!(target_os = "macos") {
            vec![ClipboardCommand::new("pbcopy", &[])]
        } else if cfg!(windows) {
            vec![ClipboardCommand::new("clip", &[])]
        } else {
            vec![
                ClipboardCommand::new("wl-copy", &[]),
                ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
                ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
            ]
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        for command in &self.commands {
            match command.pipe(text) {
                Ok(()) => {
                    tracing::debug!("Copied statement with {}", command.program);
                    return Ok(());
                }
                Err(e) => tracing::debug!("Clipboard tool {} unavailable: {}", command.program, e),
            }
        }

        let tried: Vec<&str> = self.commands.iter().map(|c| c.program.as_str()).collect();
        Err(ImpactError::ClipboardError {
            message: format!("no clipboard tool succeeded (tried: {})", tried.join(", ")),
        })
    }
}
