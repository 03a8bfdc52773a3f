use crate::Result;
use crate::log::row::LogRecord;
use regex::Regex;

/// Longest line (in bytes, terminator excluded) a worker hands to the parser.
pub const MAX_LINE_BYTES: usize = 4096;

const MAX_CLIENT: usize = 63;
const MAX_USER: usize = 63;
const MAX_TIMESTAMP: usize = 63;
const MAX_REQUEST: usize = 1023;
const MAX_REFERRER: usize = 1023;
const MAX_AGENT: usize = 1023;
const MAX_METHOD: usize = 15;
const MAX_URL: usize = 255;
const MAX_PROTOCOL: usize = 15;

/// Matcher for Combined Log Format lines.
///
/// Expected layout:
/// client ident user [timestamp] "method url protocol" status bytes "referrer" "agent"
///
/// Example:
/// 10.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /a.gif HTTP/1.0" 200 2326 "http://x/" "curl/8"
///
/// The compiled pattern is immutable, so a single parser is shared by every
/// worker thread.
#[derive(Debug, Clone)]
pub struct LineParser {
    re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        // Capture:
        // 1) client  2) ident  3) user  4) timestamp (inside [])
        // 5) request line  6) status  7) bytes  8) referrer  9) agent
        // Field ceilings are checked after matching.
        let re = Regex::new(
            r#"^(\S+)\s+(\S+)\s+(\S+)\s+\[([^\]]+)\]\s+"([^"]+)"\s+(\d+)\s+(\d+)\s+"([^"]+)"\s+"([^"]*)"\s*$"#,
        )?;
        Ok(Self { re })
    }

    /// Parse one line. `None` means the line does not fit the grammar or one
    /// of its fields is over its length ceiling; nothing partial is returned.
    pub fn parse<'a>(&self, line: &'a str) -> Option<LogRecord<'a>> {
        if line.len() > MAX_LINE_BYTES {
            return None;
        }

        let caps = self.re.captures(line)?;
        let field = |idx: usize, max: usize| -> Option<&'a str> {
            let s = caps.get(idx)?.as_str();
            within(s, max).then_some(s)
        };

        let client = field(1, MAX_CLIENT)?;
        let ident = field(2, MAX_USER)?;
        let user = field(3, MAX_USER)?;
        let timestamp = field(4, MAX_TIMESTAMP)?;
        let request = field(5, MAX_REQUEST)?;
        let status: u32 = field(6, usize::MAX)?.parse().ok()?;
        let bytes: u64 = field(7, usize::MAX)?.parse().ok()?;
        let referrer = field(8, MAX_REFERRER)?;
        let agent = field(9, MAX_AGENT)?;

        let (method, url, protocol) = split_request(request)?;

        Some(LogRecord {
            client,
            ident,
            user,
            timestamp,
            method,
            url,
            protocol,
            status,
            bytes,
            referrer,
            agent,
        })
    }
}

/// "GET /index.html HTTP/1.1" => ("GET", "/index.html", "HTTP/1.1").
/// Exactly three tokens are required.
fn split_request(request: &str) -> Option<(&str, &str, &str)> {
    let mut parts = request.split_whitespace();
    let method = parts.next()?;
    let url = parts.next()?;
    let protocol = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if !within(method, MAX_METHOD) || !within(url, MAX_URL) || !within(protocol, MAX_PROTOCOL) {
        return None;
    }
    Some((method, url, protocol))
}

/// Length ceilings count characters, not bytes.
fn within(s: &str, max: usize) -> bool {
    s.len() <= max || s.chars().count() <= max
}
