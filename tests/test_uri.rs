use std::path::{Path, PathBuf};

use tiny::http::uri::{ContentKind, classify};

fn root() -> &'static Path {
    Path::new(".")
}

#[test]
fn test_static_uri_is_rooted() {
    let target = classify("/home.html", root());

    assert_eq!(target.path, PathBuf::from("./home.html"));
    assert_eq!(target.kind, ContentKind::Static);
    assert!(target.args.is_empty());
}

#[test]
fn test_static_uri_ending_in_slash_gets_default_document() {
    assert_eq!(classify("/", root()).path, PathBuf::from("./home.html"));
    assert_eq!(classify("/docs/", root()).path, PathBuf::from("./docs/home.html"));
}

#[test]
fn test_static_uri_never_has_args() {
    for uri in ["/", "/a.html?x=1", "/godzilla.gif", "/x?y?z"] {
        let target = classify(uri, root());
        assert!(target.is_static(), "{}", uri);
        assert_eq!(target.args, "", "{}", uri);
    }
}

#[test]
fn test_static_query_is_part_of_the_path() {
    assert_eq!(classify("/a.html?x=1", root()).path, PathBuf::from("./a.html?x=1"));
}

#[test]
fn test_legacy_adder_alias() {
    let target = classify("/adder", root());

    assert_eq!(target.path, PathBuf::from("./adder.html"));
    assert!(target.is_static());
}

#[test]
fn test_dynamic_uri_with_args() {
    let target = classify("/cgi-bin/adder?3&5", root());

    assert_eq!(target.kind, ContentKind::Dynamic);
    assert_eq!(target.path, PathBuf::from("./cgi-bin/adder"));
    assert_eq!(target.args, "3&5");
}

#[test]
fn test_dynamic_uri_without_question_mark() {
    let target = classify("/cgi-bin/adder", root());

    assert_eq!(target.kind, ContentKind::Dynamic);
    assert_eq!(target.path, PathBuf::from("./cgi-bin/adder"));
    assert_eq!(target.args, "");
}

#[test]
fn test_dynamic_split_at_first_question_mark() {
    for uri in ["/cgi-bin/a?b?c", "/cgi-bin/x?", "/cgi-bin/?q", "/cgi-bin/p"] {
        let (before, after) = uri.split_once('?').unwrap_or((uri, ""));
        let target = classify(uri, root());

        assert_eq!(target.path, PathBuf::from(format!(".{}", before)), "{}", uri);
        assert_eq!(target.args, after, "{}", uri);
    }
}

#[test]
fn test_marker_anywhere_makes_uri_dynamic() {
    assert!(!classify("/static/cgi-bin.html", root()).is_static());
    assert!(!classify("/x/cgi-bin/", root()).is_static());
}

#[test]
fn test_marker_in_query_of_static_looking_uri_is_dynamic() {
    let target = classify("/home.html?cgi-bin", root());

    assert_eq!(target.kind, ContentKind::Dynamic);
    assert_eq!(target.path, PathBuf::from("./home.html"));
}

#[test]
fn test_doc_root_with_trailing_slash() {
    let target = classify("/home.html", Path::new("/srv/www/"));

    assert_eq!(target.path, PathBuf::from("/srv/www/home.html"));
}
