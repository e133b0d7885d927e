use super::*;

fn depth(n: u64) -> u64 {
    ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
}

#[test]
fn shallow_recursion() {
    assert_eq!(depth(10), 10);
}

#[test]
fn deep_recursion_grows_the_stack() {
    // Far past what a 2MB test thread holds without growth.
    assert_eq!(depth(300_000), 300_000);
}

#[test]
fn passes_results_through() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
