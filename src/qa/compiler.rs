//! Compile a saved UFO into a binary font with fontc
//!
//! fontc is invoked as an external program, the same way a user would run it
//! by hand. It has to be on `PATH` (or given explicitly) for `--ttf` to work.

use anyhow::{anyhow, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

pub struct FontCompiler {
    program: OsString,
}

impl Default for FontCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl FontCompiler {
    pub fn new() -> Self {
        Self::with_program("fontc")
    }

    /// Use a specific fontc executable
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command line for compiling `ufo_path` into `output_path`
    pub fn command(&self, ufo_path: &Path, output_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(ufo_path).arg("--output").arg(output_path);
        cmd
    }

    pub fn compile(&self, ufo_path: &Path, output_path: &Path) -> Result<PathBuf> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {parent:?}"))?;
        }

        debug!("Running {:?} on {:?}", self.program, ufo_path);
        let output = self
            .command(ufo_path, output_path)
            .output()
            .with_context(|| format!("Failed to run {:?}. Is fontc installed?", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("FontC compilation failed: {}", stderr));
        }

        info!("Compiled {:?} to {:?}", ufo_path, output_path);
        Ok(output_path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let compiler = FontCompiler::new();
        let cmd = compiler.command(Path::new("Braille.ufo"), Path::new("out/Braille.ttf"));

        assert_eq!(cmd.get_program(), "fontc");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["Braille.ufo", "--output", "out/Braille.ttf"]);
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = FontCompiler::with_program("fontc-does-not-exist-here");
        let result = compiler.compile(&dir.path().join("a.ufo"), &dir.path().join("a.ttf"));

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("fontc-does-not-exist-here"), "{message}");
    }
}
