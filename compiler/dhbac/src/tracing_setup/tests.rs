use super::*;

fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |var| {
        pairs
            .iter()
            .find(|(name, _)| *name == var)
            .map(|(_, value)| (*value).to_string())
    }
}

#[test]
fn nothing_set() {
    assert_eq!(filter_directives(env(&[])), None);
}

#[test]
fn dhba_log_wins() {
    let lookup = env(&[("RUST_LOG", "info"), ("DHBA_LOG", "dhba_parse=trace")]);
    assert_eq!(filter_directives(lookup), Some("dhba_parse=trace".to_string()));
}

#[test]
fn falls_back_to_rust_log() {
    assert_eq!(
        filter_directives(env(&[("RUST_LOG", "debug")])),
        Some("debug".to_string())
    );
}

#[test]
fn blank_values_are_skipped() {
    let lookup = env(&[("DHBA_LOG", "  "), ("RUST_LOG", "warn")]);
    assert_eq!(filter_directives(lookup), Some("warn".to_string()));
}

#[test]
fn init_is_idempotent() {
    init_tracing();
    init_tracing();
}
