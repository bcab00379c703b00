use super::{data_param, data_param_from_url};

#[test]
fn test_data_param_finds_the_value_among_other_parameters() {
    let query = "theme=dark&data=eyJkYXRhIjpbXX0=&partner=p1";

    assert_eq!(data_param(query).as_deref(), Some("eyJkYXRhIjpbXX0="));
}

#[test]
fn test_data_param_is_none_when_absent() {
    assert_eq!(data_param("theme=dark&partner=p1"), None);
    assert_eq!(data_param(""), None);
}

#[test]
fn test_data_param_decodes_percent_escapes() {
    assert_eq!(data_param("data=abc%3D%3D").as_deref(), Some("abc=="));
    assert_eq!(data_param("data=a%2Fb%2Bc").as_deref(), Some("a/b+c"));
}

#[test]
fn test_data_param_treats_plus_as_space() {
    // Form-encoding semantics: an unescaped plus in the value is a space.
    // Base64 payloads must percent-encode their plus signs to survive.
    assert_eq!(data_param("data=a+b").as_deref(), Some("a b"));
}

#[test]
fn test_data_param_passes_malformed_escapes_through() {
    assert_eq!(data_param("data=a%ZZb%4").as_deref(), Some("a%ZZb%4"));
}

#[test]
fn test_data_param_takes_the_first_occurrence() {
    assert_eq!(data_param("data=first&data=second").as_deref(), Some("first"));
}

#[test]
fn test_data_param_from_url_strips_scheme_host_and_fragment() {
    let url = "https://stats.example.com/dashboard?data=eyJkYXRhIjpbXX0%3D#summary";

    assert_eq!(
        data_param_from_url(url).as_deref(),
        Some("eyJkYXRhIjpbXX0=")
    );
}

#[test]
fn test_data_param_from_url_requires_a_query_string() {
    assert_eq!(data_param_from_url("https://stats.example.com/dashboard"), None);
}
