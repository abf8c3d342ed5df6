use super::*;

#[test]
fn default_points_at_local_service() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.token_key, "token");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint(WHOAMI_PATH), "http://localhost:8000/whoami");
    assert_eq!(config.endpoint("whoami"), "http://localhost:8000/whoami");

    let config = config.with_base_url("http://api.test/");
    assert_eq!(config.endpoint("/users"), "http://api.test/users");
}
