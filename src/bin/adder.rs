//! Minimal CGI program that adds two numbers.
//!
//! Reads `QUERY_STRING` as `A&B` and writes the rest of an HTTP response
//! (headers, blank line, HTML body) to stdout. The server has already sent
//! the status line.

use std::io::Write;

fn main() -> std::io::Result<()> {
    let query = std::env::var("QUERY_STRING").unwrap_or_default();
    let (a, b) = parse_operands(&query);

    let content = format!(
        "Welcome to add.com: The Internet addition portal.\r\n<p>\
         The answer is: {} + {} = {}\r\n<p>\
         Thanks for visiting!\r\n",
        a,
        b,
        a.wrapping_add(b)
    );

    let mut out = std::io::stdout().lock();
    write!(out, "Connection: close\r\n")?;
    write!(out, "Content-length: {}\r\n", content.len())?;
    write!(out, "Content-type: text/html\r\n\r\n")?;
    write!(out, "{}", content)?;
    out.flush()
}

/// Splits `A&B` into two integers. Missing or unparsable operands count as 0.
fn parse_operands(query: &str) -> (i64, i64) {
    match query.split_once('&') {
        Some((a, b)) => (leading_int(a), leading_int(b)),
        None => (leading_int(query), 0),
    }
}

/// Integer value of the leading digits of `s`, with an optional sign.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0')));

    if negative { value.wrapping_neg() } else { value }
}
