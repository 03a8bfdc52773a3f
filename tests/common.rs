#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn log_line(url: &str, bytes: u64, referrer: &str) -> String {
    format!(
        r#"192.168.1.20 - - [28/Jul/2006:10:27:10 -0300] "GET {url} HTTP/1.1" 200 {bytes} "{referrer}" "Mozilla/5.0 (X11; Linux x86_64)""#
    )
}

pub fn write_log(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(&path, body).unwrap();
    path
}
