use glox::{run, Options, RunError};
use itertools::Itertools;
use lazy_regex::regex;
use test_suite_proc_macro::generate_tests;

use pretty_assertions::assert_eq;

/// Runs `code` and compares against its `// expect: <output line>` and
/// `// error: <diagnostic>` comments. The comments themselves are
/// discarded by the scanner.
pub fn lox_expect(code: &str) {
    let mut expected_errors = vec![];
    let mut expected_output = vec![];
    let mut options = Options::default();

    let error_regex = regex!(r"// error: (.*)");
    let output_regex = regex!(r"// expect: (.*)");
    let tokens_regex = regex!(r"// option: tokens");

    for line in code.lines() {
        if let Some(cap) = error_regex.captures(line) {
            expected_errors.push(cap[1].to_string());
        } else if let Some(cap) = output_regex.captures(line) {
            expected_output.push(cap[1].to_string());
        } else if tokens_regex.is_match(line) {
            options.dump_tokens = true;
        }
    }

    let mut output = Vec::new();
    let result = run(code, &mut output, options);
    let output = String::from_utf8(output).unwrap();

    match result {
        Ok(()) => {
            assert!(expected_errors.is_empty(), "Expected errors but none occurred");
        }
        Err(RunError::Diagnostics(errors)) => {
            assert_eq!(errors.iter().map(|e| e.message.clone()).collect_vec(), expected_errors);
        }
        Err(e) => panic!("Unexpected error: {:?}", e),
    }

    assert_eq!(
        output.lines().collect_vec(),
        expected_output,
        "Actual output (left) does not match expected output (right)"
    );
}

generate_tests!();
