// Teeny Tiny - A one-pass compiler translating BASIC-like programs into C
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! C compiler detection, building and running of generated programs.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use super::RunnerError;
use crate::output::C_EXTENSION;

/// C compiler binary names to search for, in order of preference.
pub const C_COMPILERS: &[&str] = &["cc", "gcc", "clang"];

/// Find a C compiler.
///
/// An explicit compiler (from `--cc` or `CC`) may be a path or a bare name
/// looked up in `PATH`. Without one, the first of [`C_COMPILERS`] found in
/// `PATH` is used.
///
/// # Example
///
/// ```no_run
/// use teenytiny::runner::find_c_compiler;
///
/// match find_c_compiler(None) {
///     Ok(cc) => println!("Found C compiler: {}", cc.display()),
///     Err(e) => println!("{}", e),
/// }
/// ```
pub fn find_c_compiler(explicit: Option<&Path>) -> Result<PathBuf, RunnerError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return which::which(path).map_err(|_| RunnerError::InvalidCompilerPath(path.to_path_buf()));
    }

    C_COMPILERS
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or(RunnerError::CompilerNotFound)
}

/// Builds generated C files with a C compiler and runs the results.
#[derive(Debug, Clone)]
pub struct CcRunner {
    /// Path to the C compiler binary.
    compiler: PathBuf,
}

impl CcRunner {
    /// Create a runner for the given C compiler.
    pub fn new(compiler: PathBuf) -> Self {
        Self { compiler }
    }

    /// Get the C compiler path.
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Compile `c_path` into the executable `exe_path`.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::NotCSource` when `c_path` lacks the `.c`
    /// extension or equals `exe_path`, and `RunnerError::BuildFailed` with
    /// the compiler's stderr when the compiler exits unsuccessfully.
    pub fn build(&self, c_path: &Path, exe_path: &Path) -> Result<(), RunnerError> {
        // Without `.c` the compiler treats the file as linker input.
        if c_path.extension().map_or(true, |ext| ext != C_EXTENSION) || c_path == exe_path {
            return Err(RunnerError::NotCSource(c_path.to_path_buf()));
        }

        log::info!(
            "building {} -> {} with {}",
            c_path.display(),
            exe_path.display(),
            self.compiler.display()
        );

        let output = Command::new(&self.compiler)
            .arg(c_path)
            .arg("-o")
            .arg(exe_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunnerError::SpawnFailed {
                program: self.compiler.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunnerError::BuildFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    /// Run a built executable with inherited stdio and wait for it.
    pub fn run(&self, exe_path: &Path) -> Result<ExitStatus, RunnerError> {
        // A bare file name would be looked up in PATH instead of the
        // working directory.
        let program = if exe_path.components().count() == 1 && exe_path.is_relative() {
            Path::new(".").join(exe_path)
        } else {
            exe_path.to_path_buf()
        };

        log::info!("running {}", program.display());

        Command::new(&program)
            .status()
            .map_err(|source| RunnerError::SpawnFailed {
                program: program.display().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_explicit_compiler() {
        let path = Path::new("/nonexistent/bin/teeny-cc");
        let err = find_c_compiler(Some(path)).unwrap_err();
        assert!(matches!(err, RunnerError::InvalidCompilerPath(p) if p == path));
    }

    #[test]
    fn test_compiler_list_order() {
        assert_eq!(C_COMPILERS, ["cc", "gcc", "clang"]);
    }

    #[test]
    fn test_runner_keeps_compiler() {
        let runner = CcRunner::new(PathBuf::from("/usr/bin/cc"));
        assert_eq!(runner.compiler(), Path::new("/usr/bin/cc"));
    }

    #[test]
    fn test_run_missing_executable() {
        let runner = CcRunner::new(PathBuf::from("cc"));
        let temp_dir = TempDir::new().unwrap();
        let err = runner.run(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, RunnerError::SpawnFailed { .. }));
    }

    #[test]
    fn test_build_requires_c_extension() {
        let runner = CcRunner::new(PathBuf::from("/nonexistent/bin/teeny-cc"));

        let err = runner
            .build(Path::new("out/hello"), Path::new("out/hello"))
            .unwrap_err();
        assert!(matches!(err, RunnerError::NotCSource(p) if p == Path::new("out/hello")));

        let err = runner
            .build(Path::new("out/hello.txt"), Path::new("out/hello"))
            .unwrap_err();
        assert!(matches!(err, RunnerError::NotCSource(_)));
    }

    #[test]
    fn test_build_rejects_invalid_c() {
        let Ok(compiler) = find_c_compiler(None) else {
            return;
        };
        let temp_dir = TempDir::new().unwrap();
        let c_path = temp_dir.path().join("broken.c");
        std::fs::write(&c_path, "int main(void){ return }\n").unwrap();

        let runner = CcRunner::new(compiler);
        let err = runner
            .build(&c_path, &temp_dir.path().join("broken"))
            .unwrap_err();
        assert!(matches!(err, RunnerError::BuildFailed { .. }));
    }
}
