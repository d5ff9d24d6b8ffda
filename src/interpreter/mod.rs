/*
 * ==========================================================================
 * SimpCode - line-oriented scripting interpreter
 * ==========================================================================
 *
 * Interpreter Entry & Run Loop
 * ----------------------------
 * This module is the runtime entrypoint. It owns everything a single run
 * mutates and drives the program counter over the program lines:
 *
 *  - The variable store
 *  - Branch / loop bookkeeping
 *  - The program counter
 *  - Diagnostics reported along the way
 *
 * Evaluation logic is delegated to the submodules:
 *
 *  - statements.rs  → Statement dispatch (exec_stmt)
 *  - expressions.rs → Expression evaluation (evaluate)
 *  - helpers.rs     → Truthiness and conditions
 *  - control.rs     → IF/ELSE state and loop frames
 *  - environment.rs → Variable store
 *  - display.rs     → Value formatting
 *
 * --------------------------------------------------------------------------
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

pub mod control;
pub mod display;
pub mod environment;
pub mod expressions;
pub mod helpers;
pub mod statements;

use std::io::Write;

use log::{debug, trace, warn};

use crate::error::{Diagnostic, SimpError};
use crate::program::Program;

use control::ControlState;
use environment::VariableStore;
use statements::ExecSignal;

/// Callback receiving each non-fatal diagnostic as it happens.
pub type Reporter = Box<dyn FnMut(&Diagnostic)>;

/// Executes one SimpCode program, writing PRINT output to `out`.
pub struct Interpreter<W: Write> {
    program: Program,
    vars: VariableStore,
    control: ControlState,
    pc: usize,
    out: W,
    diagnostics: Vec<Diagnostic>,
    reporter: Option<Reporter>,
}

impl<W: Write> Interpreter<W> {
    pub fn new(program: Program, out: W) -> Self {
        Self {
            program,
            vars: VariableStore::new(),
            control: ControlState::new(),
            pc: 0,
            out,
            diagnostics: Vec::new(),
            reporter: None,
        }
    }

    /// Installs a callback for non-fatal diagnostics. Without one they go
    /// to `log::warn!`.
    pub fn with_reporter(mut self, reporter: impl FnMut(&Diagnostic) + 'static) -> Self {
        self.reporter = Some(Box::new(reporter));
        self
    }

    /// Runs the program from the first line with fresh state.
    ///
    /// Unrecognized instructions and malformed statements are reported
    /// and skipped. Any other error stops the run and is returned.
    pub fn run(&mut self) -> Result<(), Diagnostic> {
        self.vars = VariableStore::new();
        self.control = ControlState::new();
        self.diagnostics.clear();
        self.pc = 0;

        while self.pc < self.program.len() {
            let line = self.program.line(self.pc).unwrap_or_default().to_string();
            trace!("pc={} depth={} | {}", self.pc, self.control.depth(), line);

            match self.exec_stmt(&line) {
                Ok(ExecSignal::Next) => self.pc += 1,
                Ok(ExecSignal::Jump(target)) => self.pc = target,
                Err(err) if !err.is_fatal() => {
                    self.report(Diagnostic::new(self.pc, err));
                    self.pc += 1;
                }
                Err(err) => {
                    debug!("aborted at line {}: {}", self.pc + 1, err);
                    return Err(Diagnostic::new(self.pc, err));
                }
            }
        }

        self.out.flush().map_err(|e| {
            Diagnostic::new(self.program.len().saturating_sub(1), SimpError::from(e))
        })?;

        debug!("final state: {}", self.vars.to_json());
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        match self.reporter.as_mut() {
            Some(reporter) => reporter(&diagnostic),
            None => warn!("{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn variables(&self) -> &VariableStore {
        &self.vars
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Program counter; equals the program length after a completed run.
    pub fn pc(&self) -> usize {
        self.pc
    }
}

/// What a completed run leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub variables: VariableStore,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses and runs `source` in one go.
pub fn run_program<W: Write>(source: &str, out: W) -> Result<Outcome, Diagnostic> {
    let mut interpreter = Interpreter::new(Program::parse(source), out);
    interpreter.run()?;

    Ok(Outcome {
        variables: interpreter.vars,
        diagnostics: interpreter.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::value::Value;

    #[test]
    fn pc_ends_at_program_length() {
        let mut out = Vec::new();
        let mut interp = Interpreter::new(Program::parse("ASSIGN x = 1\nPRINT x"), &mut out);
        interp.run().unwrap();
        assert_eq!(interp.pc(), 2);
        assert_eq!(interp.variables().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn reporter_sees_each_recoverable_diagnostic() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut interp = Interpreter::new(Program::parse("FOO bar\nBAZ\nPRINT \"ok\""), Vec::new())
            .with_reporter(move |d| sink.borrow_mut().push(d.line));

        interp.run().unwrap();
        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(interp.diagnostics().len(), 2);
    }

    #[test]
    fn fatal_error_stops_the_run() {
        let mut out = Vec::new();
        let err = run_program("PRINT \"before\"\nPRINT missing\nPRINT \"after\"", &mut out)
            .unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.error, SimpError::VariableNotFound("missing".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "before\n");
    }

    #[test]
    fn rerun_starts_from_fresh_state() {
        let mut out = Vec::new();
        let mut interp = Interpreter::new(
            Program::parse("ASSIGN n = 0\nASSIGN n = n + 1\nPRINT n"),
            &mut out,
        );
        interp.run().unwrap();
        interp.run().unwrap();
        drop(interp);
        assert_eq!(String::from_utf8(out).unwrap(), "1\n1\n");
    }
}
