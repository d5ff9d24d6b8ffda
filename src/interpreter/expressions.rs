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

//! Expression evaluation.
//!
//! SimpCode expressions are not parsed into a tree. The evaluator scans
//! the raw text for operators in a fixed order and performs a single
//! binary split on the first one it finds:
//!
//!  1. comparisons `== != <= >= < >` (two-character forms first)
//!  2. assignment `name = expr` (right-recursive, so `a = b = 1` chains)
//!  3. arithmetic `+ - * / %`
//!  4. integer literal or variable name
//!
//! `1 + 2 + 3` is therefore not an expression: the split on the first `+`
//! leaves `2 + 3` as an operand, which is neither a literal nor a name.

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SimpError};
use crate::interpreter::environment::VariableStore;
use crate::value::Value;

lazy_static! {
    static ref INTEGER_LITERAL: Regex = Regex::new(r"^\d+$").unwrap();
    static ref SIGNED_INTEGER: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Search order matters: `<=` must be tried before `<`.
pub const COMPARISON_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "<", ">"];

pub const ARITHMETIC_OPERATORS: [&str; 5] = ["+", "-", "*", "/", "%"];

/// Returns true when `name` can be used as a variable name.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Evaluates a single SimpCode expression against the variable store.
///
/// Assignments write into `vars` and evaluate to the assigned value.
pub fn evaluate(expression: &str, vars: &mut VariableStore) -> Result<Value> {
    let expression = expression.trim();

    // ---------------------------------------------------------------------
    // Comparison
    // ---------------------------------------------------------------------
    for op in COMPARISON_OPERATORS {
        if let Some((left, right)) = expression.split_once(op) {
            let l = evaluate(left, vars)?;
            let r = evaluate(right, vars)?;
            return compare(l, op, r);
        }
    }

    // ---------------------------------------------------------------------
    // Assignment
    // ---------------------------------------------------------------------
    // Every operator containing '=' was consumed above.
    if let Some((target, rhs)) = expression.split_once('=') {
        let target = target.trim();
        if !is_identifier(target) {
            return Err(SimpError::UnresolvedExpression(expression.to_string()));
        }

        let value = evaluate(rhs, vars)?;
        vars.assign(target, value);
        return Ok(value);
    }

    // ---------------------------------------------------------------------
    // Arithmetic
    // ---------------------------------------------------------------------
    for op in ARITHMETIC_OPERATORS {
        if let Some((left, right)) = expression.split_once(op) {
            let a = resolve_operand(left, vars)?;
            let b = resolve_operand(right, vars)?;
            return apply_arithmetic(a, op, b);
        }
    }

    // ---------------------------------------------------------------------
    // Literal / variable
    // ---------------------------------------------------------------------
    if INTEGER_LITERAL.is_match(expression) {
        return parse_integer(expression);
    }

    vars.get(expression)
        .ok_or_else(|| SimpError::UnresolvedExpression(expression.to_string()))
}

/// Resolves one side of an arithmetic operator to an integer.
///
/// A name present in the store wins over literal parsing; real values are
/// truncated toward zero.
fn resolve_operand(operand: &str, vars: &VariableStore) -> Result<i64> {
    let operand = operand.trim();

    if let Some(value) = vars.get(operand) {
        return Ok(value.truncate());
    }

    if SIGNED_INTEGER.is_match(operand) {
        return parse_integer(operand).map(Value::truncate);
    }

    Err(SimpError::UnresolvedExpression(operand.to_string()))
}

fn parse_integer(text: &str) -> Result<Value> {
    text.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| SimpError::IntegerOverflow(text.to_string()))
}

/// Applies one arithmetic operator to two integer operands.
///
/// `/` always produces a real. `%` is floored: the result takes the sign
/// of the divisor.
pub fn apply_arithmetic(a: i64, op: &str, b: i64) -> Result<Value> {
    let overflow = || SimpError::IntegerOverflow(format!("{} {} {}", a, op, b));

    match op {
        "+" => a.checked_add(b).map(Value::Integer).ok_or_else(overflow),
        "-" => a.checked_sub(b).map(Value::Integer).ok_or_else(overflow),
        "*" => a.checked_mul(b).map(Value::Integer).ok_or_else(overflow),
        "/" => {
            if b == 0 {
                return Err(SimpError::DivisionByZero);
            }
            Ok(Value::Real(a as f64 / b as f64))
        }
        "%" => {
            if b == 0 {
                return Err(SimpError::DivisionByZero);
            }
            let r = a.checked_rem(b).ok_or_else(overflow)?;
            if r != 0 && (r < 0) != (b < 0) {
                Ok(Value::Integer(r + b))
            } else {
                Ok(Value::Integer(r))
            }
        }
        other => Err(SimpError::UnsupportedOperator(other.to_string())),
    }
}

/// Typed numeric comparison. The result is `Integer(1)` or `Integer(0)`.
pub fn compare(left: Value, op: &str, right: Value) -> Result<Value> {
    let ord = left.compare(right);

    let result = match op {
        "==" => ord == Some(Ordering::Equal),
        "!=" => ord != Some(Ordering::Equal),
        "<=" => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
        ">=" => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
        "<" => ord == Some(Ordering::Less),
        ">" => ord == Some(Ordering::Greater),
        other => return Err(SimpError::UnsupportedOperator(other.to_string())),
    };

    Ok(Value::from_bool(result))
}
