use super::*;

#[test]
fn missing_slug_uses_default_theme() {
    assert_eq!(resolve_theme(None), Some(Theme::Celestial));
}

#[test]
fn known_slug_resolves_case_insensitively() {
    assert_eq!(resolve_theme(Some("lagoon")), Some(Theme::Lagoon));
    assert_eq!(resolve_theme(Some("IVORY")), Some(Theme::Ivory));
}

#[test]
fn unknown_slug_is_not_found() {
    assert_eq!(resolve_theme(Some("sunset")), None);
    assert_eq!(resolve_theme(Some("")), None);
}
