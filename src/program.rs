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

//! Program text handling.
//!
//! SimpCode has no tokenizer: a program is just its lines, and each line
//! is a keyword followed by free-form text that the statement handlers
//! pick apart themselves.

/// Statement keywords recognized by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Assign,
    Print,
    If,
    Else,
    While,
    EndWhile,
    For,
    EndFor,
}

impl Instruction {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ASSIGN" => Some(Instruction::Assign),
            "PRINT" => Some(Instruction::Print),
            "IF" => Some(Instruction::If),
            "ELSE" => Some(Instruction::Else),
            "WHILE" => Some(Instruction::While),
            "ENDWHILE" => Some(Instruction::EndWhile),
            "FOR" => Some(Instruction::For),
            "ENDFOR" => Some(Instruction::EndFor),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Instruction::Assign => "ASSIGN",
            Instruction::Print => "PRINT",
            Instruction::If => "IF",
            Instruction::Else => "ELSE",
            Instruction::While => "WHILE",
            Instruction::EndWhile => "ENDWHILE",
            Instruction::For => "FOR",
            Instruction::EndFor => "ENDFOR",
        }
    }
}

/// Splits a statement into its keyword and the trimmed remainder.
///
/// ```text
/// "ASSIGN x = 5"  -> ("ASSIGN", "x = 5")
/// "ENDWHILE"      -> ("ENDWHILE", "")
/// ```
pub fn split_instruction(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    }
}

/// An immutable, zero-indexed sequence of statement lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    pub fn parse(source: &str) -> Self {
        Self {
            lines: source.lines().map(|l| l.trim().to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, pc: usize) -> Option<&str> {
        self.lines.get(pc).map(String::as_str)
    }

    /// Finds the END line closing the loop header at `header`, honoring
    /// nested loops of the same kind.
    pub fn matching_end(&self, header: usize, open: Instruction, close: Instruction) -> Option<usize> {
        let mut depth = 0usize;

        for (idx, line) in self.lines.iter().enumerate().skip(header + 1) {
            match Instruction::from_keyword(split_instruction(line).0) {
                Some(kw) if kw == open => depth += 1,
                Some(kw) if kw == close => {
                    if depth == 0 {
                        return Some(idx);
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }

        None
    }
}
