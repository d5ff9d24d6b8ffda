/*
 * ==========================================================================
 * SimpCode - line-oriented scripting interpreter
 * ==========================================================================
 *
 * License:
 * This file is part of the SimpCode interpreter project.
 *
 * SimpCode is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! simpcode - run a SimpCode program file
//!
//! # Usage
//!
//! ```bash
//! simpcode path/to/program.simp
//! ```
//!
//! # Exit Codes
//!
//! - 0: Program ran to completion
//! - 1: Program aborted with a runtime error
//! - 2: Invalid arguments or unreadable file

use std::fs;
use std::io;
use std::process::ExitCode;

use simpcode::{DiagnosticPrinter, Interpreter, Program};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let path = match args.get(1) {
        Some(path) if args.len() == 2 => path,
        _ => {
            print_usage();
            return ExitCode::from(2);
        }
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path, e);
            return ExitCode::from(2);
        }
    };

    let printer = DiagnosticPrinter::new(path.as_str(), source.as_str());
    let warnings = DiagnosticPrinter::new(path.as_str(), source.as_str());

    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(Program::parse(&source), stdout.lock())
        .with_reporter(move |diagnostic| warnings.print(diagnostic));

    match interpreter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(diagnostic) => {
            printer.print(&diagnostic);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    eprintln!("Usage: simpcode <program.simp>");
}
