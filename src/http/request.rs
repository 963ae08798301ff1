/// HTTP request methods.
///
/// The server only implements GET. Every other token is kept verbatim so it
/// can be echoed back in the 501 error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any method the server does not implement, as sent by the client
    Other(String),
}

/// A parsed request head.
///
/// Header lines are read so the stream is positioned past the head, but the
/// server does not act on any of them.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request target as sent (e.g. "/cgi-bin/adder?3&5"), possibly empty
    pub uri: String,
    /// Protocol version token, possibly empty
    pub version: String,
    /// Request headers in arrival order
    pub headers: Vec<(String, String)>,
}

impl Method {
    /// Parses a method token, comparing case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use tiny::http::request::Method;
    /// assert_eq!(Method::parse("get"), Method::GET);
    /// assert_eq!(Method::parse("POST"), Method::Other("POST".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("GET") {
            Method::GET
        } else {
            Method::Other(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(s) => s,
        }
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
