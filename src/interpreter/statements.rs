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

/*!
 * SimpCode Statement Dispatcher
 * -----------------------------
 *
 * Executes one program line: identifies the keyword and runs the matching
 * handler. Expression work is delegated to `expressions.rs`, branch and
 * loop bookkeeping to `control.rs`.
 *
 * Handlers return an `ExecSignal` telling the run loop where to go next.
 */

use std::io::Write;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Result, SimpError};
use crate::interpreter::control::{BranchState, LoopKind};
use crate::interpreter::display::value_to_string;
use crate::interpreter::expressions::{evaluate, is_identifier};
use crate::interpreter::helpers::evaluate_condition;
use crate::interpreter::Interpreter;
use crate::program::{split_instruction, Instruction};

lazy_static! {
    static ref THEN_TOKEN: Regex = Regex::new(r"\bTHEN\b").unwrap();
}

/* ============================================================================
 * Execution Control Signals
 * ============================================================================
 */

/// Where the run loop continues after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecSignal {
    /// Fall through to the following line.
    Next,

    /// Continue at the given line.
    Jump(usize),
}

/* ============================================================================
 * Header Parsing
 * ============================================================================
 */

/// Splits `name = expression` at the assignment operator, ignoring the
/// `=` inside `== != <= >=`.
pub fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();

    for (idx, &b) in bytes.iter().enumerate() {
        if b != b'=' {
            continue;
        }

        let prev = idx.checked_sub(1).map(|i| bytes[i]);
        let next = bytes.get(idx + 1).copied();

        let part_of_operator = matches!(prev, Some(b'=' | b'!' | b'<' | b'>'))
            || next == Some(b'=');

        if !part_of_operator {
            return Some((text[..idx].trim(), text[idx + 1..].trim()));
        }
    }

    None
}

/// Condition of a `WHILE <cond> [DO]` header.
pub fn while_condition(rest: &str) -> &str {
    let rest = rest.trim();

    if rest == "DO" {
        return "";
    }

    match rest.strip_suffix("DO") {
        Some(cond) if cond.ends_with(char::is_whitespace) => cond.trim(),
        _ => rest,
    }
}

/// Condition and optional update step of a `FOR <cond> [<update>]` header.
pub fn for_header(rest: &str) -> Result<(&str, Option<&str>)> {
    let mut tokens = rest.split_whitespace();

    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(cond), update, None) => Ok((cond, update)),
        (None, _, _) => Err(SimpError::MalformedStatement(
            "FOR without a condition".to_string(),
        )),
        _ => Err(SimpError::MalformedStatement(
            "FOR expects `FOR <condition> <update>` with no spaces inside either part"
                .to_string(),
        )),
    }
}

/* ============================================================================
 * Statement Execution
 * ============================================================================
 */

impl<W: Write> Interpreter<W> {
    /// Executes the statement at the current program counter.
    ///
    /// This is the **core dispatch function for all statement execution**.
    pub(crate) fn exec_stmt(&mut self, line: &str) -> Result<ExecSignal> {
        let (keyword, rest) = split_instruction(line);

        if keyword.is_empty() {
            return Ok(ExecSignal::Next);
        }

        match Instruction::from_keyword(keyword) {
            Some(Instruction::Assign) => self.exec_assign(rest)?,
            Some(Instruction::Print) => self.exec_print(rest)?,
            Some(Instruction::If) => self.exec_if(rest)?,
            Some(Instruction::Else) => self.exec_else(rest)?,
            Some(Instruction::While) => return self.enter_loop(LoopKind::While, rest),
            Some(Instruction::For) => return self.enter_loop(LoopKind::For, rest),
            Some(Instruction::EndWhile) => return self.end_loop(LoopKind::While),
            Some(Instruction::EndFor) => return self.end_loop(LoopKind::For),
            None => return Err(SimpError::UnrecognizedInstruction(keyword.to_string())),
        }

        Ok(ExecSignal::Next)
    }

    /* ------------------------------------------------------------------
     * ASSIGN name = expression
     * ---------------------------------------------------------------- */
    fn exec_assign(&mut self, rest: &str) -> Result<()> {
        let (name, expr) = split_assignment(rest).ok_or_else(|| {
            SimpError::MalformedStatement("ASSIGN expects `name = expression`".to_string())
        })?;

        if !is_identifier(name) {
            return Err(SimpError::MalformedStatement(format!(
                "'{}' is not a variable name",
                name
            )));
        }

        let value = evaluate(expr, &mut self.vars)?;
        self.vars.assign(name, value);
        Ok(())
    }

    /* ------------------------------------------------------------------
     * PRINT "literal" | PRINT name
     * ---------------------------------------------------------------- */
    fn exec_print(&mut self, rest: &str) -> Result<()> {
        if rest.starts_with('"') && rest.ends_with('"') {
            writeln!(self.out, "{}", rest.trim_matches('"'))?;
        } else {
            let value = self.vars.lookup(rest)?;
            writeln!(self.out, "{}", value_to_string(&value))?;
        }
        Ok(())
    }

    /// Runs the ASSIGN or PRINT that follows THEN or ELSE.
    fn exec_action(&mut self, action: &str) -> Result<()> {
        let (keyword, rest) = split_instruction(action);

        match Instruction::from_keyword(keyword) {
            Some(Instruction::Assign) => self.exec_assign(rest),
            Some(Instruction::Print) => self.exec_print(rest),
            _ if action.is_empty() => Err(SimpError::MalformedStatement(
                "conditional without an action".to_string(),
            )),
            _ => Err(SimpError::MalformedStatement(format!(
                "'{}' cannot be used as a conditional action",
                keyword
            ))),
        }
    }

    /* ------------------------------------------------------------------
     * IF condition THEN action
     * ---------------------------------------------------------------- */
    fn exec_if(&mut self, rest: &str) -> Result<()> {
        let mut parts = THEN_TOKEN.splitn(rest, 2);

        let (condition, action) = match (parts.next(), parts.next()) {
            (Some(condition), Some(action)) => (condition.trim(), action.trim()),
            _ => {
                return Err(SimpError::MalformedStatement(
                    "IF without THEN".to_string(),
                ))
            }
        };

        let taken = evaluate_condition(condition, &mut self.vars)?;
        debug!("line {}: IF {} -> {}", self.pc + 1, condition, taken);
        self.control.set_branch(BranchState::from_outcome(taken));

        if taken {
            self.exec_action(action)?;
        }
        Ok(())
    }

    /* ------------------------------------------------------------------
     * ELSE action | ELSE IF condition THEN action
     * ---------------------------------------------------------------- */
    fn exec_else(&mut self, rest: &str) -> Result<()> {
        if self.control.branch() == BranchState::Taken {
            return Ok(());
        }

        let (keyword, tail) = split_instruction(rest);
        if Instruction::from_keyword(keyword) == Some(Instruction::If) {
            return self.exec_if(tail);
        }

        self.control.set_branch(BranchState::Unevaluated);
        self.exec_action(rest)
    }

    /* ------------------------------------------------------------------
     * WHILE cond DO | FOR cond update
     * ---------------------------------------------------------------- */
    fn enter_loop(&mut self, kind: LoopKind, rest: &str) -> Result<ExecSignal> {
        let condition = match kind {
            LoopKind::While => while_condition(rest),
            LoopKind::For => for_header(rest)?.0,
        };

        if condition.is_empty() {
            return Err(SimpError::MalformedStatement(format!(
                "{} without a condition",
                kind.header().keyword()
            )));
        }

        if evaluate_condition(condition, &mut self.vars)? {
            debug!("line {}: entering {:?} loop", self.pc + 1, kind);
            self.control.enter_loop(kind, self.pc);
            return Ok(ExecSignal::Next);
        }

        match self.program.matching_end(self.pc, kind.header(), kind.terminator()) {
            Some(end) => {
                debug!("line {}: {:?} loop skipped", self.pc + 1, kind);
                Ok(ExecSignal::Jump(end + 1))
            }
            None => Err(SimpError::MalformedStatement(format!(
                "{} without a matching {}",
                kind.header().keyword(),
                kind.terminator().keyword()
            ))),
        }
    }

    /* ------------------------------------------------------------------
     * ENDWHILE | ENDFOR
     * ---------------------------------------------------------------- */
    fn end_loop(&mut self, kind: LoopKind) -> Result<ExecSignal> {
        let start = match self.control.innermost() {
            Some(frame) if frame.kind == kind => frame.start,
            Some(frame) => {
                return Err(SimpError::MalformedStatement(format!(
                    "{} closes a {} loop",
                    kind.terminator().keyword(),
                    frame.kind.header().keyword()
                )))
            }
            None => {
                return Err(SimpError::MalformedStatement(format!(
                    "{} without an open {}",
                    kind.terminator().keyword(),
                    kind.header().keyword()
                )))
            }
        };

        let header = self.program.line(start).unwrap_or_default().to_string();
        let (_, rest) = split_instruction(&header);

        // The header text is re-evaluated on every pass.
        let again = match kind {
            LoopKind::While => evaluate_condition(while_condition(rest), &mut self.vars)?,
            LoopKind::For => {
                let (condition, update) = for_header(rest)?;
                if let Some(update) = update {
                    evaluate(update, &mut self.vars)?;
                }
                evaluate_condition(condition, &mut self.vars)?
            }
        };

        if again {
            self.control.restart_pass();
            Ok(ExecSignal::Jump(start + 1))
        } else {
            debug!("line {}: leaving {:?} loop", self.pc + 1, kind);
            self.control.exit_loop();
            Ok(ExecSignal::Next)
        }
    }
}
