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

//! Teeny Tiny Compiler CLI
//!
//! Translates Teeny Tiny programs into C, and optionally builds and runs
//! the result with the system C compiler.

use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use teenytiny::error::{format_error, render_report};
use teenytiny::output::{default_output_path, executable_path, write_c};
use teenytiny::runner::{find_c_compiler, CcRunner, SourceWatcher};

/// Teeny Tiny - A one-pass compiler from a BASIC-like language to C
#[derive(Parser, Debug)]
#[command(name = "teenytiny")]
#[command(author = "Teeny Tiny Team")]
#[command(version)]
#[command(about = "A one-pass compiler translating BASIC-like programs into C")]
#[command(long_about = r#"
Teeny Tiny translates programs written in a tiny BASIC dialect into a
single C source file. The C file can then be built with any C compiler.

Example usage:
  teenytiny hello.teeny
  teenytiny hello.teeny -o build/hello.c

Build and run with the system C compiler:
  teenytiny hello.teeny --build
  teenytiny hello.teeny --run
  teenytiny hello.teeny --run --cc clang

Watch mode, translating again on every save:
  teenytiny game.teeny --watch
  teenytiny game.teeny -w --run

Set RUST_LOG=debug (or use --verbose) for a trace of the translation.
"#)]
struct Cli {
    /// Source file to translate (.teeny)
    source: PathBuf,

    /// Output C file. Defaults to the source path with a .c extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Build an executable from the generated C file
    #[arg(short, long)]
    build: bool,

    /// Build and run the executable (implies --build)
    #[arg(short, long)]
    run: bool,

    /// C compiler to build with (auto-detected if not specified)
    #[arg(long, env = "CC")]
    cc: Option<PathBuf>,

    /// Watch the source file and translate again on changes
    #[arg(short, long)]
    watch: bool,

    /// Print plain diagnostics without colors or box drawing
    #[arg(long)]
    plain: bool,
}

impl Cli {
    fn wants_build(&self) -> bool {
        self.build || self.run
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.source));

    if cli.verbose {
        println!("{} Compiler v{}", teenytiny::NAME, teenytiny::VERSION);
        println!("Source: {}", cli.source.display());
        println!("Output: {}", output_path.display());
        println!();
    }

    let runner = if cli.wants_build() {
        match find_c_compiler(cli.cc.as_deref()) {
            Ok(compiler) => {
                if cli.verbose {
                    println!("C compiler: {}", compiler.display());
                }
                Some(CcRunner::new(compiler))
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(4);
            }
        }
    } else {
        None
    };

    let status = process(&cli, &output_path, runner.as_ref());

    if cli.watch {
        return run_watch_loop(&cli, &output_path, runner.as_ref());
    }

    ExitCode::from(status)
}

/// Install the logger. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Read, translate and write one source file, then build and run it if
/// requested. Returns the process exit code.
fn process(cli: &Cli, output_path: &Path, runner: Option<&CcRunner>) -> u8 {
    let source = match std::fs::read_to_string(&cli.source) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source.display(), e);
            return 3;
        }
    };

    let filename = cli
        .source
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    log::info!("translating {}", cli.source.display());
    let c_source = match teenytiny::translate(&source) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("translation failed: {}", e);
            if cli.plain {
                eprint!("{}", format_error(&e, &source, Some(filename)));
            } else {
                let color = std::io::stderr().is_terminal();
                eprint!("{}", render_report(&e, &source, Some(filename), color));
            }
            return 1;
        }
    };

    if cli.verbose {
        println!("Generated {} bytes of C", c_source.len());
        println!("Writing {}...", output_path.display());
    }

    if let Err(e) = write_c(&c_source, output_path) {
        eprintln!("Error: Cannot write {}: {}", output_path.display(), e);
        return 1;
    }

    println!("Translated {} -> {}", filename, output_path.display());

    let Some(runner) = runner else {
        return 0;
    };

    let exe_path = executable_path(output_path);
    if let Err(e) = runner.build(output_path, &exe_path) {
        eprintln!("Error: {}", e);
        return 5;
    }
    println!("Built {}", exe_path.display());

    if !cli.run {
        return 0;
    }

    match runner.run(&exe_path) {
        Ok(status) => {
            log::info!("program exited with {}", status);
            status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            5
        }
    }
}

/// Translate again on every change of the source file.
fn run_watch_loop(cli: &Cli, output_path: &Path, runner: Option<&CcRunner>) -> ExitCode {
    let watcher = match SourceWatcher::new(std::slice::from_ref(&cli.source)) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: Failed to create file watcher: {}", e);
            return ExitCode::from(6);
        }
    };

    println!();
    println!("Watching for changes... (Press Ctrl+C to stop)");

    loop {
        if let Err(e) = watcher.wait_for_change() {
            eprintln!("Error: {}", e);
            return ExitCode::from(6);
        }

        println!();
        if cli.verbose {
            println!("Change detected, translating...");
        } else {
            println!("Translating...");
        }

        if process(cli, output_path, runner) != 0 {
            println!("Fix errors and save to retry.");
        }
    }
}
