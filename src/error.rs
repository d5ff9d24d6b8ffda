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

use thiserror::Error;

/// Every way a SimpCode run can fail or complain.
///
/// Only [`SimpError::UnrecognizedInstruction`] and
/// [`SimpError::MalformedStatement`] are recoverable: the interpreter
/// reports them and moves on to the next line. Everything else aborts
/// the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimpError {
    /// A variable was read before it was ever assigned.
    #[error("variable '{0}' not found")]
    VariableNotFound(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Operator outside `+ - * / %`.
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(String),

    /// Text that is not a literal, a known variable, an operator
    /// expression or an assignment.
    #[error("expression '{0}' cannot be evaluated")]
    UnresolvedExpression(String),

    /// Integer arithmetic left the i64 range.
    #[error("integer overflow while evaluating '{0}'")]
    IntegerOverflow(String),

    #[error("instruction '{0}' not recognized")]
    UnrecognizedInstruction(String),

    #[error("malformed statement: {0}")]
    MalformedStatement(String),

    /// PRINT output could not be written.
    #[error("failed to write output: {0}")]
    Output(String),
}

impl SimpError {
    /// Stable error code (E0001, E0002, …) used in rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            SimpError::VariableNotFound(_) => "E0001",
            SimpError::DivisionByZero => "E0002",
            SimpError::UnsupportedOperator(_) => "E0003",
            SimpError::UnresolvedExpression(_) => "E0004",
            SimpError::IntegerOverflow(_) => "E0005",
            SimpError::UnrecognizedInstruction(_) => "E0006",
            SimpError::MalformedStatement(_) => "E0007",
            SimpError::Output(_) => "E0008",
        }
    }

    /// Whether this error terminates the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SimpError::UnrecognizedInstruction(_) | SimpError::MalformedStatement(_)
        )
    }

    /// Optional follow-up hint shown under the diagnostic.
    pub fn help(&self) -> Option<String> {
        match self {
            SimpError::VariableNotFound(name) => Some(format!(
                "assign '{}' with `ASSIGN {} = ...` before reading it",
                name, name
            )),
            SimpError::DivisionByZero => {
                Some("check the divisor before dividing".to_string())
            }
            SimpError::UnresolvedExpression(_) => Some(
                "expressions hold at most one operator, e.g. `a + b` or `x < 10`".to_string(),
            ),
            SimpError::UnrecognizedInstruction(_) => Some(
                "valid keywords are ASSIGN, PRINT, IF, ELSE, WHILE, ENDWHILE, FOR, ENDFOR"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimpError {
    fn from(err: std::io::Error) -> Self {
        SimpError::Output(err.to_string())
    }
}

/// A [`SimpError`] pinned to the program line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Zero-based index of the offending line.
    pub line: usize,
    pub error: SimpError,
}

impl Diagnostic {
    pub fn new(line: usize, error: SimpError) -> Self {
        Self { line, error }
    }

    pub fn is_fatal(&self) -> bool {
        self.error.is_fatal()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line + 1, self.error)
    }
}

impl std::error::Error for Diagnostic {}

pub type Result<T> = std::result::Result<T, SimpError>;
