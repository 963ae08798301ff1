use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No blank line yet; more bytes are needed
    Incomplete,
    /// More header lines than the configured cap
    TooManyHeaders,
    /// Request head grew past the configured byte cap
    HeadTooLarge,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Incomplete => f.write_str("incomplete request head"),
            ParseError::TooManyHeaders => f.write_str("too many header lines"),
            ParseError::HeadTooLarge => f.write_str("request head too large"),
        }
    }
}

/// Parses a request head out of `buf`.
///
/// On success returns the request and the number of bytes consumed, which
/// ends right after the blank line terminating the headers. Missing request
/// line fields are left empty so the caller decides how to answer.
pub fn parse_http_request(
    buf: &[u8],
    max_header_lines: usize,
) -> Result<(Request, usize), ParseError> {
    let mut pos = 0;

    // Request line
    let request_line = next_line(buf, &mut pos).ok_or(ParseError::Incomplete)?;
    let request_line = String::from_utf8_lossy(request_line);
    let mut parts = request_line.split_whitespace();

    let method = Method::parse(parts.next().unwrap_or(""));
    let uri = parts.next().unwrap_or("").to_string();
    let version = parts.next().unwrap_or("").to_string();

    // Headers, up to and including the first empty line
    let mut headers = Vec::new();
    let mut lines = 0;

    loop {
        let line = next_line(buf, &mut pos).ok_or(ParseError::Incomplete)?;
        if line.is_empty() {
            break;
        }

        // Every header line counts, including ones that are skipped below
        if lines == max_header_lines {
            return Err(ParseError::TooManyHeaders);
        }
        lines += 1;

        // Header content is not interpreted; malformed lines are skipped
        let line = String::from_utf8_lossy(line);
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let request = Request {
        method,
        uri,
        version,
        headers,
    };

    Ok((request, pos))
}

/// Method of the request line, once that line is complete in `buf`.
///
/// Lets the caller answer an unsupported method even when the rest of the
/// head is rejected.
pub fn request_method(buf: &[u8]) -> Option<Method> {
    let mut pos = 0;
    let line = next_line(buf, &mut pos)?;
    let line = String::from_utf8_lossy(line);

    Some(Method::parse(line.split_whitespace().next().unwrap_or("")))
}

/// Next `\n`-terminated line starting at `pos`, without its `\r\n` or `\n`.
fn next_line<'a>(buf: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    let rest = &buf[*pos..];
    let end = rest.iter().position(|&b| b == b'\n')?;
    *pos += end + 1;

    let line = &rest[..end];
    Some(line.strip_suffix(b"\r").unwrap_or(line))
}
