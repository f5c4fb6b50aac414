use super::*;

/// Mirrors a program whose blocks are nested `depth` levels deep.
fn nest(depth: u32, trail: &mut Vec<u32>) -> Result<u32, String> {
    ensure_sufficient_stack(|| {
        trail.push(depth);
        if depth == 0 {
            return Ok(0);
        }
        let inner = nest(depth - 1, trail)?;
        Ok(inner + 1)
    })
}

#[test]
fn closure_value_is_returned() {
    assert_eq!(ensure_sufficient_stack(|| "done"), "done");
}

#[test]
fn errors_propagate_through_the_guard() {
    let result: Result<(), String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}

#[test]
fn shallow_nesting_visits_every_level() {
    let mut trail = Vec::new();
    assert_eq!(nest(4, &mut trail), Ok(4));
    assert_eq!(trail, vec![4, 3, 2, 1, 0]);
}

#[test]
fn very_deep_nesting_does_not_overflow() {
    let mut trail = Vec::new();
    assert_eq!(nest(200_000, &mut trail), Ok(200_000));
    assert_eq!(trail.len(), 200_001);
}
