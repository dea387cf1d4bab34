use super::*;

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:8080", "/api/jobs", None),
        "http://backend:8080/api/jobs"
    );
    assert_eq!(
        upstream_url("http://backend:8080", "/api/jobs", Some("page=2")),
        "http://backend:8080/api/jobs?page=2"
    );
}

#[test]
fn upstream_url_ignores_empty_queries() {
    assert_eq!(
        upstream_url("http://backend:8080", "/api/jobs", Some("")),
        "http://backend:8080/api/jobs"
    );
}

#[test]
fn proxy_state_trims_trailing_slashes_from_the_base() {
    let state = ProxyState::new("http://backend:8080/").expect("client should build");
    assert_eq!(upstream_url(&state.upstream, "/api/jobs", None), "http://backend:8080/api/jobs");
}

#[test]
fn only_expected_headers_are_forwarded() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, "Bearer tok".parse().unwrap());
    headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    headers.insert(header::COOKIE, "session_token=secret".parse().unwrap());
    headers.insert(header::HOST, "edge.example".parse().unwrap());

    let forwarded = forwarded_headers(&headers);
    let names: Vec<_> = forwarded.iter().map(|(name, _)| name.clone()).collect();
    assert!(names.contains(&header::AUTHORIZATION));
    assert!(names.contains(&header::CONTENT_TYPE));
    assert!(!names.contains(&header::COOKIE));
    assert!(!names.contains(&header::HOST));
}
