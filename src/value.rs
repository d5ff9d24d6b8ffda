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

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// SimpCode runtime value.
///
/// Every expression evaluates to one of these. Division always yields a
/// `Real`; every other operator keeps integers as integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    /// Boolean result of a comparison.
    pub fn from_bool(b: bool) -> Self {
        Value::Integer(b as i64)
    }

    /// Integer view used by arithmetic operands. Reals are truncated
    /// toward zero.
    pub fn truncate(self) -> i64 {
        match self {
            Value::Integer(n) => n,
            Value::Real(r) => r.trunc() as i64,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Real(r) => r,
        }
    }

    /// Numeric ordering across both variants. Two integers compare
    /// exactly, anything involving a real compares as f64.
    pub fn compare(self, other: Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::interpreter::display::value_to_string(self))
    }
}
