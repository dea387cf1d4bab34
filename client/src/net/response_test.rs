use super::*;
use crate::net::types::Job;

fn job_json(id: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "title": "Rust Engineer" })
}

#[test]
fn wrapped_and_bare_lists_normalize_to_the_same_shape() {
    let wrapped = serde_json::json!({ "data": [job_json("j1"), job_json("j2")] }).to_string();
    let bare = serde_json::json!([job_json("j1"), job_json("j2")]).to_string();

    let from_wrapped: Vec<Job> = decode_list(&wrapped).unwrap();
    let from_bare: Vec<Job> = decode_list(&bare).unwrap();
    assert_eq!(from_wrapped, from_bare);
    assert_eq!(from_wrapped.len(), 2);
}

#[test]
fn legacy_posts_envelope_is_accepted() {
    let posts = serde_json::json!({ "posts": [job_json("j9")] }).to_string();
    let items: Vec<Job> = decode_list(&posts).unwrap();
    assert_eq!(items[0].id, "j9");
}

#[test]
fn empty_lists_decode_in_both_shapes() {
    let wrapped: Vec<Job> = decode_list(r#"{"data":[]}"#).unwrap();
    let bare: Vec<Job> = decode_list("[]").unwrap();
    assert!(wrapped.is_empty() && bare.is_empty());
}

#[test]
fn unrecognized_list_shapes_error_instead_of_panicking() {
    let result: Result<Vec<Job>, _> = decode_list(r#"{"items":[]}"#);
    assert!(result.is_err());
}

#[test]
fn wrapped_and_bare_items_normalize_to_the_same_shape() {
    let wrapped = serde_json::json!({ "data": job_json("j1") }).to_string();
    let bare = job_json("j1").to_string();

    let a: Job = decode_item(&wrapped).unwrap();
    let b: Job = decode_item(&bare).unwrap();
    assert_eq!(a, b);
}
