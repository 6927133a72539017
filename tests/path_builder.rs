use serde_json::{Value, json};
use typesafe_url_rs::template::{PathArgs, TemplateError, build_path, fill_route};
use typesafe_url_rs::{QueryParams, RouteParams};

fn route_params(entries: &[(&str, Value)]) -> RouteParams {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn search_params(entries: &[(&str, Option<Value>)]) -> QueryParams {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn path(route: &str, rp: Option<RouteParams>, sp: Option<QueryParams>) -> String {
    build_path(&PathArgs {
        route: route.to_string(),
        route_params: rp,
        search_params: sp,
        ..PathArgs::default()
    })
    .expect("path should build")
}

#[test]
fn build_path_when_both_param_sets_absent_then_returns_route_unchanged() {
    assert_eq!(path("/", None, None), "/");
    assert_eq!(path("/foo", None, None), "/foo");
    assert_eq!(path("/foo/bar", None, None), "/foo/bar");
}

#[test]
fn build_path_when_search_params_given_then_appends_query_string() {
    assert_eq!(
        path("/foo/bar", None, Some(search_params(&[("baz", Some(json!("hi")))]))),
        "/foo/bar?baz=hi"
    );
    assert_eq!(
        path("/foo/bar", None, Some(search_params(&[("baz", Some(json!(1)))]))),
        "/foo/bar?baz=1"
    );
    assert_eq!(
        path("/foo/bar", None, Some(search_params(&[("baz", Some(json!(true)))]))),
        "/foo/bar?baz=true"
    );
    assert_eq!(
        path(
            "/foo/bar",
            None,
            Some(search_params(&[
                ("baz", Some(json!(true))),
                ("qux", Some(json!("hi"))),
                ("quux", Some(json!(1))),
            ]))
        ),
        "/foo/bar?baz=true&qux=hi&quux=1"
    );
}

#[test]
fn build_path_when_search_value_is_undefined_or_empty_then_emits_bare_key() {
    assert_eq!(
        path("/foo/bar", None, Some(search_params(&[("baz", None)]))),
        "/foo/bar?baz"
    );
    assert_eq!(
        path("/foo/bar", None, Some(search_params(&[("baz", Some(json!("")))]))),
        "/foo/bar?baz"
    );
}

#[test]
fn build_path_when_search_value_is_structured_then_json_encodes() {
    assert_eq!(
        path(
            "/foo/bar",
            None,
            Some(search_params(&[("baz", Some(json!(["hi", "bye"])))]))
        ),
        "/foo/bar?baz=%5B%22hi%22%2C%22bye%22%5D"
    );
    assert_eq!(
        path(
            "/foo/bar",
            None,
            Some(search_params(&[("baz", Some(json!({"hi": "bye"})))]))
        ),
        "/foo/bar?baz=%7B%22hi%22%3A%22bye%22%7D"
    );
}

#[test]
fn build_path_when_route_params_given_then_fills_dynamic_segments() {
    assert_eq!(
        path("/foo/[bar]", Some(route_params(&[("bar", json!("hi"))])), None),
        "/foo/hi"
    );
    assert_eq!(
        path("/foo/[bar]", Some(route_params(&[("bar", json!(1))])), None),
        "/foo/1"
    );
    assert_eq!(
        path("/foo/[bar]", Some(route_params(&[("bar", json!(null))])), None),
        "/foo/null"
    );
    assert_eq!(
        path(
            "/foo/[bar]/[baz]",
            Some(route_params(&[("bar", json!("hi")), ("baz", json!("bye"))])),
            None
        ),
        "/foo/hi/bye"
    );
}

#[test]
fn build_path_when_non_catch_all_receives_array_then_json_encodes_it() {
    assert_eq!(
        path(
            "/foo/[bar]",
            Some(route_params(&[("bar", json!(["hi", "bye"]))])),
            None
        ),
        "/foo/%5B%22hi%22%2C%22bye%22%5D"
    );
}

#[test]
fn build_path_when_catch_all_receives_array_then_flattens_into_parts() {
    assert_eq!(
        path(
            "/foo/[...bar]",
            Some(route_params(&[("bar", json!(["hi", "bye"]))])),
            None
        ),
        "/foo/hi/bye"
    );
    assert_eq!(
        path(
            "/foo/[[...bar]]",
            Some(route_params(&[("bar", json!(["hi", "bye"]))])),
            None
        ),
        "/foo/hi/bye"
    );
    assert_eq!(
        path(
            "/foo/[...bar]",
            Some(route_params(&[("bar", json!("baz"))])),
            None
        ),
        "/foo/baz"
    );
}

#[test]
fn build_path_when_optional_catch_all_is_absent_then_segment_vanishes() {
    assert_eq!(path("/foo/[[...bar]]", Some(route_params(&[])), None), "/foo");
}

#[test]
fn fill_route_when_required_segment_is_missing_then_fails() {
    let err = fill_route("/foo/[bar]", &route_params(&[])).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::MissingDynamicSegment { ref name, .. } if name == "bar"
    ));

    let err = fill_route("/foo/[...bar]", &route_params(&[])).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::MissingCatchAllSegment { ref name, .. } if name == "bar"
    ));

    assert_eq!(fill_route("/foo/[[...bar]]", &route_params(&[])).unwrap(), "/foo");
}

#[test]
fn fill_route_when_value_is_empty_string_then_fails() {
    assert!(fill_route("/foo/[bar]", &route_params(&[("bar", json!(""))])).is_err());
    assert!(fill_route("/foo/[[...bar]]", &route_params(&[("bar", json!(""))])).is_err());
}

#[test]
fn fill_route_when_catch_all_mixes_types_then_each_element_encodes_independently() {
    let filled = fill_route(
        "/foo/[bar]/[...baz]",
        &route_params(&[("bar", json!(true)), ("baz", json!([null, "goodbye"]))]),
    )
    .unwrap();
    assert_eq!(filled, "/foo/true/null/goodbye");
}

#[test]
fn build_path_when_stringified_literals_are_passed_then_quoting_survives() {
    assert_eq!(
        path(
            "/foo/[bar]",
            Some(route_params(&[("bar", json!("\"true\""))])),
            None
        ),
        "/foo/%22true%22"
    );
    assert_eq!(
        path(
            "/foo/bar",
            None,
            Some(search_params(&[("baz", Some(json!("\"1\"")))]))
        ),
        "/foo/bar?baz=%221%22"
    );
}

#[test]
fn build_path_when_route_and_search_params_combine_then_both_render() {
    assert_eq!(
        path(
            "/foo/[bar]/hello/[baz]/[[...qux]]",
            Some(route_params(&[
                ("bar", json!(true)),
                ("baz", json!(65)),
                ("qux", json!([null, "goodbye"])),
            ])),
            None
        ),
        "/foo/true/hello/65/null/goodbye"
    );

    assert_eq!(
        path(
            "/product/[productID]",
            Some(route_params(&[("productID", json!(23))])),
            Some(search_params(&[(
                "userInfo",
                Some(json!({"name": "bob", "age": 23}))
            )]))
        ),
        "/product/23?userInfo=%7B%22name%22%3A%22bob%22%2C%22age%22%3A23%7D"
    );
}
