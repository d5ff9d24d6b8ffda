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

use std::io::{self, Write};

use crate::error::Diagnostic;

/// Renders compiler-style diagnostics for SimpCode runs.
///
/// ```text
/// error[E0002]: division by zero
///   --> loop.simp:3
///    |
///  3 | ASSIGN z = x / y
///    | ^^^^^^^^^^^^^^^^
/// help: check the divisor before dividing
/// ```
///
/// Recoverable diagnostics use the same layout with a `warning` header.
pub struct DiagnosticPrinter {
    /// Full program text, kept to echo the offending line.
    source: String,

    /// Display name of the program file.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic into a string.
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let severity = if diagnostic.is_fatal() { "error" } else { "warning" };

        // Diagnostics are 1-indexed, program lines are 0-indexed.
        let line_no = diagnostic.line + 1;
        let src_line = self
            .source
            .lines()
            .nth(diagnostic.line)
            .map(str::trim)
            .unwrap_or("");

        let mut out = format!(
            "{}[{}]: {}\n  --> {}:{}\n   |\n{:>3} | {}\n   | {}\n",
            severity,
            diagnostic.error.code(),
            diagnostic.error,
            self.file_name,
            line_no,
            line_no,
            src_line,
            "^".repeat(src_line.chars().count().max(1)),
        );

        if let Some(help) = diagnostic.error.help() {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Writes a rendered diagnostic to `w`.
    pub fn write_to(&self, w: &mut impl Write, diagnostic: &Diagnostic) -> io::Result<()> {
        write!(w, "{}", self.render(diagnostic))
    }

    /// Prints a diagnostic to stderr.
    pub fn print(&self, diagnostic: &Diagnostic) {
        let stderr = io::stderr();
        let _ = self.write_to(&mut stderr.lock(), diagnostic);
    }
}
