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

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::interpreter::environment::VariableStore;
use crate::interpreter::expressions::evaluate;
use crate::value::Value;

lazy_static! {
    static ref AND_TOKEN: Regex = Regex::new(r"\bAND\b").unwrap();
}

/// Determines whether a runtime `Value` counts as true in a condition.
///
/// Any non-zero number is truthy. Comparisons produce `Integer(1)` or
/// `Integer(0)`, so they fit the same rule.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Integer(n) => *n != 0,
        Value::Real(r) => *r != 0.0,
    }
}

/// Evaluates an IF or loop condition.
///
/// `left AND right` evaluates both operands (no short-circuit, so
/// assignments on the right always happen) and is true when both are
/// truthy. Anything else goes straight to the expression evaluator.
pub fn evaluate_condition(condition: &str, vars: &mut VariableStore) -> Result<bool> {
    let mut parts = AND_TOKEN.splitn(condition, 2);

    match (parts.next(), parts.next()) {
        (Some(left), Some(right)) => {
            let l = evaluate(left, vars)?;
            let r = evaluate(right, vars)?;
            Ok(is_truthy(&l) && is_truthy(&r))
        }
        _ => Ok(is_truthy(&evaluate(condition, vars)?)),
    }
}
