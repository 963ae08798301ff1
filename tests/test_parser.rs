use tiny::http::parser::{ParseError, parse_http_request, request_method};
use tiny::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /home.html HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.uri, "/home.html");
    assert_eq!(parsed.version, "HTTP/1.0");
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_lowercase_method_is_get() {
    let req = b"get / HTTP/1.0\r\n\r\n";
    let (parsed, _) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.method, Method::GET);
}

#[test]
fn test_parse_keeps_unsupported_method() {
    let req = b"POST / HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.method, Method::Other("POST".to_string()));
    // The body is left in the buffer, unread
    assert_eq!(&req[consumed..], b"hello");
}

#[test]
fn test_parse_multiple_headers_in_order() {
    let req = b"GET /path HTTP/1.0\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req, 100).unwrap();

    let names: Vec<&str> = parsed.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["Host", "User-Agent", "Accept"]);
}

#[test]
fn test_parse_query_string_stays_in_uri() {
    let req = b"GET /cgi-bin/adder?3&5 HTTP/1.0\r\n\r\n";
    let (parsed, _) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.uri, "/cgi-bin/adder?3&5");
}

#[test]
fn test_parse_bare_newlines() {
    let req = b"GET / HTTP/1.0\nHost: a\n\n";
    let (parsed, consumed) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.uri, "/");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_missing_fields_are_empty() {
    let req = b"POST\r\n\r\n";
    let (parsed, _) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.method, Method::Other("POST".to_string()));
    assert_eq!(parsed.uri, "");
    assert_eq!(parsed.version, "");
}

#[test]
fn test_parse_lines_without_colon_are_skipped() {
    let req = b"GET / HTTP/1.0\r\nnonsense\r\nHost: a\r\n\r\n";
    let (parsed, _) = parse_http_request(req, 100).unwrap();

    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n";
    let result = parse_http_request(req, 100);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_line() {
    let result = parse_http_request(b"GET / HT", 100);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_too_many_headers() {
    let req = b"GET / HTTP/1.0\r\nA: 1\r\nB: 2\r\nC: 3\r\n\r\n";

    assert!(parse_http_request(req, 3).is_ok());
    assert_eq!(
        parse_http_request(req, 2).unwrap_err(),
        ParseError::TooManyHeaders
    );
}

#[test]
fn test_parse_too_many_headers_before_terminator_arrives() {
    let req = b"GET / HTTP/1.0\r\nA: 1\r\nB: 2\r\nC: 3\r\n";

    assert_eq!(
        parse_http_request(req, 2).unwrap_err(),
        ParseError::TooManyHeaders
    );
}

#[test]
fn test_parse_lines_without_colon_count_toward_cap() {
    let mut req = b"GET / HTTP/1.0\r\n".to_vec();
    for _ in 0..500 {
        req.extend_from_slice(b"junk\r\n");
    }
    req.extend_from_slice(b"\r\n");

    assert_eq!(
        parse_http_request(&req, 100).unwrap_err(),
        ParseError::TooManyHeaders
    );
}

#[test]
fn test_request_method_needs_complete_line() {
    assert_eq!(request_method(b"POST / HTTP/1.0"), None);
    assert_eq!(
        request_method(b"POST / HTTP/1.0\r\nX-Long: aaaa"),
        Some(Method::Other("POST".to_string()))
    );
    assert_eq!(request_method(b"get / HTTP/1.0\r\n"), Some(Method::GET));
}
