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

use simpcode::{run_program, Diagnostic, Outcome, SimpError, Value};

fn run(source: &str) -> (String, Result<Outcome, Diagnostic>) {
    let mut out = Vec::new();
    let result = run_program(source, &mut out);
    (String::from_utf8(out).unwrap(), result)
}

fn output_of(source: &str) -> String {
    let (out, result) = run(source);
    assert!(result.is_ok(), "program failed: {:?}", result);
    out
}

#[test]
fn assigned_literals_print_back() {
    for literal in ["0", "7", "42", "1000000", "9223372036854775807"] {
        let source = format!("ASSIGN x = {}\nPRINT x", literal);
        assert_eq!(output_of(&source), format!("{}\n", literal));
    }
}

#[test]
fn division_by_zero_is_fatal() {
    let (_, result) = run("ASSIGN x = 10\nASSIGN y = 0\nASSIGN z = x / y");
    let err = result.unwrap_err();
    assert_eq!(err.error, SimpError::DivisionByZero);
    assert_eq!(err.line, 2);
}

#[test]
fn taken_if_suppresses_else() {
    assert_eq!(output_of("IF 3 > 2 THEN PRINT \"yes\"\nELSE PRINT \"no\""), "yes\n");
}

#[test]
fn while_loop_counts_to_three() {
    let source = "ASSIGN i = 0\nWHILE i < 3 DO\nASSIGN i = i + 1\nENDWHILE\nPRINT i";
    assert_eq!(output_of(source), "3\n");
}

#[test]
fn printing_an_undefined_variable_fails() {
    let (out, result) = run("PRINT undefinedVar");
    assert!(out.is_empty());
    assert_eq!(
        result.unwrap_err().error,
        SimpError::VariableNotFound("undefinedVar".to_string())
    );
}

#[test]
fn runs_are_deterministic() {
    let source = "ASSIGN total = 0\n\
                  ASSIGN i = 1\n\
                  WHILE i <= 5 DO\n\
                  ASSIGN total = total + i\n\
                  IF i % 2 == 0 THEN PRINT i\n\
                  ASSIGN i = i + 1\n\
                  ENDWHILE\n\
                  PRINT total";
    let first = run(source);
    let second = run(source);
    assert_eq!(first.0, "2\n4\n15\n");
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn unrecognized_instruction_does_not_stop_the_run() {
    let (out, result) = run("PRINT \"one\"\nFOO bar\nPRINT \"two\"");
    let outcome = result.unwrap();
    assert_eq!(out, "one\ntwo\n");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].line, 1);
    assert_eq!(
        outcome.diagnostics[0].error,
        SimpError::UnrecognizedInstruction("FOO".to_string())
    );
}

#[test]
fn loop_condition_sees_body_side_effects() {
    let source = "ASSIGN n = 10\nWHILE n > 0 DO\nASSIGN n = n - 4\nENDWHILE\nPRINT n";
    assert_eq!(output_of(source), "-2\n");
}

#[test]
fn nested_while_loops_keep_separate_start_points() {
    let source = "ASSIGN i = 0\n\
                  ASSIGN count = 0\n\
                  WHILE i < 3 DO\n\
                  ASSIGN j = 0\n\
                  WHILE j < 2 DO\n\
                  ASSIGN count = count + 1\n\
                  ASSIGN j = j + 1\n\
                  ENDWHILE\n\
                  ASSIGN i = i + 1\n\
                  ENDWHILE\n\
                  PRINT count";
    assert_eq!(output_of(source), "6\n");
}

#[test]
fn for_inside_while() {
    let source = "ASSIGN round = 0\n\
                  WHILE round < 2 DO\n\
                  ASSIGN k = 0\n\
                  FOR k<2 k=k+1\n\
                  PRINT k\n\
                  ENDFOR\n\
                  ASSIGN round = round + 1\n\
                  ENDWHILE";
    assert_eq!(output_of(source), "0\n1\n0\n1\n");
}

#[test]
fn if_before_loop_pairs_with_else_after_it() {
    let source = "ASSIGN i = 0\n\
                  IF i == 0 THEN PRINT \"zero\"\n\
                  WHILE i < 2 DO\n\
                  IF i == 5 THEN PRINT \"never\"\n\
                  ASSIGN i = i + 1\n\
                  ENDWHILE\n\
                  ELSE PRINT \"not zero\"";
    assert_eq!(output_of(source), "zero\n");
}

#[test]
fn each_loop_pass_pairs_its_own_if_and_else() {
    let source = "ASSIGN i = 0\n\
                  WHILE i < 4 DO\n\
                  IF i % 2 == 0 THEN PRINT \"even\"\n\
                  ELSE PRINT \"odd\"\n\
                  ASSIGN i = i + 1\n\
                  ENDWHILE";
    assert_eq!(output_of(source), "even\nodd\neven\nodd\n");
}

#[test]
fn and_condition_in_if_and_loop() {
    let source = "ASSIGN a = 1\n\
                  ASSIGN b = 0\n\
                  WHILE a < 4 AND b < 2 DO\n\
                  ASSIGN a = a + 1\n\
                  ASSIGN b = b + 1\n\
                  ENDWHILE\n\
                  IF a == 3 AND b == 2 THEN PRINT \"both\"";
    assert_eq!(output_of(source), "both\n");
}

#[test]
fn compound_expression_is_unresolved() {
    let (_, result) = run("ASSIGN x = 1 + 2 + 3");
    assert_eq!(
        result.unwrap_err().error,
        SimpError::UnresolvedExpression("2 + 3".to_string())
    );
}

#[test]
fn real_values_are_truncated_in_arithmetic() {
    let source = "ASSIGN half = 7 / 2\nPRINT half\nASSIGN next = half + 1\nPRINT next";
    assert_eq!(output_of(source), "3.5\n4\n");
}

#[test]
fn blank_lines_and_indentation_are_ignored() {
    let source = "\n  ASSIGN x = 2\n\n    PRINT x\n";
    let (out, result) = run(source);
    assert_eq!(out, "2\n");
    assert!(result.unwrap().diagnostics.is_empty());
}

#[test]
fn outcome_exposes_final_variables() {
    let (_, result) = run("ASSIGN a = 3\nASSIGN b = a * 2\nASSIGN c = b / 4");
    let vars = result.unwrap().variables;
    assert_eq!(vars.get("b"), Some(Value::Integer(6)));
    assert_eq!(vars.get("c"), Some(Value::Real(1.5)));
    assert_eq!(vars.to_json(), r#"{"a":3,"b":6,"c":1.5}"#);
}
