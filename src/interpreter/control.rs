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

//! Control-flow bookkeeping for IF/ELSE pairing and loop re-entry.

use crate::program::Instruction;

/// Where the most recent IF of the current block stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchState {
    /// No IF has run in this block (or its ELSE already consumed it).
    #[default]
    Unevaluated,
    Taken,
    NotTaken,
}

impl BranchState {
    pub fn from_outcome(taken: bool) -> Self {
        if taken {
            BranchState::Taken
        } else {
            BranchState::NotTaken
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    While,
    For,
}

impl LoopKind {
    pub fn header(self) -> Instruction {
        match self {
            LoopKind::While => Instruction::While,
            LoopKind::For => Instruction::For,
        }
    }

    pub fn terminator(self) -> Instruction {
        match self {
            LoopKind::While => Instruction::EndWhile,
            LoopKind::For => Instruction::EndFor,
        }
    }
}

/// One active loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopFrame {
    pub kind: LoopKind,
    /// PC of the header line; its text is re-read on every pass.
    pub start: usize,
    /// IF/ELSE state local to the loop body.
    pub branch: BranchState,
}

/// Branch and loop state for one run.
///
/// Each loop owns its own branch state, so an IF before a loop still
/// pairs with an ELSE after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    top_branch: BranchState,
    loops: Vec<LoopFrame>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Branch state of the innermost block.
    pub fn branch(&self) -> BranchState {
        self.loops
            .last()
            .map(|frame| frame.branch)
            .unwrap_or(self.top_branch)
    }

    pub fn set_branch(&mut self, state: BranchState) {
        match self.loops.last_mut() {
            Some(frame) => frame.branch = state,
            None => self.top_branch = state,
        }
    }

    pub fn enter_loop(&mut self, kind: LoopKind, start: usize) {
        self.loops.push(LoopFrame {
            kind,
            start,
            branch: BranchState::Unevaluated,
        });
    }

    pub fn innermost(&self) -> Option<&LoopFrame> {
        self.loops.last()
    }

    /// Starts another pass of the innermost loop with fresh branch state.
    pub fn restart_pass(&mut self) {
        if let Some(frame) = self.loops.last_mut() {
            frame.branch = BranchState::Unevaluated;
        }
    }

    pub fn exit_loop(&mut self) -> Option<LoopFrame> {
        self.loops.pop()
    }

    pub fn depth(&self) -> usize {
        self.loops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_state_is_scoped_per_loop() {
        let mut control = ControlState::new();
        control.set_branch(BranchState::Taken);

        control.enter_loop(LoopKind::While, 3);
        assert_eq!(control.branch(), BranchState::Unevaluated);
        control.set_branch(BranchState::NotTaken);
        assert_eq!(control.branch(), BranchState::NotTaken);

        control.exit_loop();
        assert_eq!(control.branch(), BranchState::Taken);
    }

    #[test]
    fn restart_clears_only_the_innermost_frame() {
        let mut control = ControlState::new();
        control.enter_loop(LoopKind::For, 0);
        control.set_branch(BranchState::Taken);
        control.enter_loop(LoopKind::While, 2);
        control.set_branch(BranchState::Taken);

        control.restart_pass();
        assert_eq!(control.branch(), BranchState::Unevaluated);

        let inner = control.exit_loop().unwrap();
        assert_eq!(inner.kind, LoopKind::While);
        assert_eq!(control.branch(), BranchState::Taken);
        assert_eq!(control.depth(), 1);
    }

    #[test]
    fn nested_loops_keep_their_own_start() {
        let mut control = ControlState::new();
        control.enter_loop(LoopKind::While, 1);
        control.enter_loop(LoopKind::While, 4);
        assert_eq!(control.innermost().map(|f| f.start), Some(4));
        control.exit_loop();
        assert_eq!(control.innermost().map(|f| f.start), Some(1));
    }
}
