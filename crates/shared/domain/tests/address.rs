use gantry_domain::address::{DEFAULT_CLIENT_URL, join_address};

#[test]
fn empty_and_root_path_keys_leave_base_untouched() {
    assert_eq!(join_address("http://localhost:8080", ""), "http://localhost:8080");
    assert_eq!(join_address("http://localhost:8080", "/"), "http://localhost:8080");
    assert_eq!(join_address("http://host/", ""), "http://host/");
    assert_eq!(join_address("http://host/", "/"), "http://host/");
}

#[test]
fn exactly_one_separator_between_base_and_path() {
    // no duplication
    assert_eq!(join_address("http://host/", "/v2"), "http://host/v2");
    // no omission
    assert_eq!(join_address("http://host", "v2"), "http://host/v2");
    assert_eq!(join_address("http://host", "/v2"), "http://host/v2");
    assert_eq!(join_address("http://host/", "v2"), "http://host/v2");
}

#[test]
fn only_one_trailing_slash_is_stripped() {
    assert_eq!(join_address("http://host//", "v2"), "http://host//v2");
}

#[test]
fn nested_path_keys_are_appended_verbatim() {
    assert_eq!(join_address(DEFAULT_CLIENT_URL, "soap/greeting"), "http://localhost:8080/soap/greeting");
    assert_eq!(join_address(DEFAULT_CLIENT_URL, "/soap/greeting"), "http://localhost:8080/soap/greeting");
}
