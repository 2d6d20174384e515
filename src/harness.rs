//! Test harness composition
//!
//! The graded run executes user code and hidden test code as one program in
//! the same top-level scope, so the tests can reference names the user
//! defined. Composition is pure text concatenation; syntactic validity is
//! discovered only when the composed source is executed.

/// Compose user code and hidden test code into one source text
pub fn compose(user_code: &str, test_code: &str) -> String {
    format!("{}\n\n{}", user_code, test_code)
}
