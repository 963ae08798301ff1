use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// A failure reported to the client as an HTML error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    /// What the request asked for: the method or the resolved file name
    pub cause: String,
    pub status: StatusCode,
    pub long_msg: &'static str,
}

impl ClientError {
    pub fn new(cause: impl Into<String>, status: StatusCode, long_msg: &'static str) -> Self {
        Self {
            cause: cause.into(),
            status,
            long_msg,
        }
    }

    pub fn not_implemented(method: &str) -> Self {
        Self::new(method, StatusCode::NotImplemented, "Tiny does not implement this method")
    }

    pub fn not_found(path: &str) -> Self {
        Self::new(path, StatusCode::NotFound, "Tiny couldn't find this file")
    }

    pub fn forbidden(path: &str) -> Self {
        Self::new(path, StatusCode::Forbidden, "Tiny couldn't read the file")
    }

    pub fn forbidden_cgi(path: &str) -> Self {
        Self::new(path, StatusCode::Forbidden, "Tiny couldn't run the CGI program")
    }

    pub fn bad_request(cause: impl Into<String>) -> Self {
        Self::new(cause, StatusCode::BadRequest, "Tiny couldn't understand this request")
    }

    /// The HTML document sent as the response body.
    pub fn body(&self) -> String {
        format!(
            "<html><title>Tiny Error</title><body bgcolor=\"ffffff\">\r\n\
             {}: {}\r\n\
             <p>{}: {}\r\n\
             <hr><em>The Tiny Web Server</em>\r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.long_msg,
            escape_html(&self.cause),
        )
    }

    pub fn into_response(self) -> Response {
        let body = self.body().into_bytes();

        ResponseBuilder::new(self.status)
            .header("Content-type", "text/html")
            .header("Content-length", body.len().to_string())
            .header("Connection", "close")
            .body(body)
            .build()
    }
}

/// Escapes the characters that could open markup in the error page.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
