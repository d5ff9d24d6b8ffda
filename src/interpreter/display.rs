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

use crate::value::Value;

/// Converts a runtime `Value` into the text PRINT writes.
///
/// Integers print plainly. Reals always carry a fractional part so a
/// division result is distinguishable from an integer:
///
///   - Integer(3)   → "3"
///   - Real(5.0)    → "5.0"
///   - Real(2.5)    → "2.5"
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Integer(n) => n.to_string(),
        Value::Real(r) => {
            if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 {
                format!("{:.1}", r)
            } else {
                r.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_print_plainly() {
        assert_eq!(value_to_string(&Value::Integer(-42)), "-42");
    }

    #[test]
    fn whole_reals_keep_one_decimal() {
        assert_eq!(value_to_string(&Value::Real(5.0)), "5.0");
        assert_eq!(value_to_string(&Value::Real(-12.0)), "-12.0");
    }

    #[test]
    fn fractional_reals_use_shortest_repr() {
        assert_eq!(value_to_string(&Value::Real(2.5)), "2.5");
        assert_eq!(value_to_string(&Value::Real(10.0 / 3.0)), "3.3333333333333335");
    }
}
