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

//! SimpCode: an interpreter for a small line-oriented scripting language
//! with ASSIGN, PRINT, IF/THEN/ELSE, WHILE/ENDWHILE and FOR/ENDFOR.
//!
//! ```
//! let mut out = Vec::new();
//! simpcode::run_program("ASSIGN i = 0\nWHILE i < 3 DO\nASSIGN i = i + 1\nENDWHILE\nPRINT i", &mut out).unwrap();
//! assert_eq!(out, b"3\n");
//! ```

pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod program;
pub mod value;

pub use diagnostics::DiagnosticPrinter;
pub use error::{Diagnostic, SimpError};
pub use interpreter::environment::VariableStore;
pub use interpreter::{run_program, Interpreter, Outcome};
pub use program::Program;
pub use value::Value;
