/// One access-log line broken into its Combined Log Format fields.
///
/// Fields borrow from the source line; only `url`, `bytes` and `referrer`
/// feed the aggregation, the rest are kept for completeness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub client: &'a str,
    pub ident: &'a str,
    pub user: &'a str,
    pub timestamp: &'a str,
    pub method: &'a str,
    pub url: &'a str,
    pub protocol: &'a str,
    pub status: u32,
    pub bytes: u64,
    pub referrer: &'a str,
    pub agent: &'a str,
}
