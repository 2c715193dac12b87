//! Access log format module
//!
//! Supports two formats:
//! - `combined` (Apache/Nginx combined format, the default)
//! - `json` (one JSON object per line)

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version as reported by hyper
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Format the entry according to the configured format name.
    /// Unknown names fall back to combined.
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    fn request_line(&self) -> String {
        match &self.query {
            Some(q) => format!("{} {}?{} {}", self.method, self.path, q, self.http_version),
            None => format!("{} {} {}", self.method, self.path, self.http_version),
        }
    }

    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "time": self.time.to_rfc3339(),
            "remote_addr": self.remote_addr,
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry {
        AccessLogEntry {
            remote_addr: "127.0.0.1".to_string(),
            time: Local::now(),
            method: "GET".to_string(),
            path: "/api/chains".to_string(),
            query: None,
            http_version: "HTTP/1.1".to_string(),
            status: 200,
            body_bytes: 42,
            referer: None,
            user_agent: Some("curl/8.0".to_string()),
            request_time_us: 150,
        }
    }

    #[test]
    fn test_combined_format() {
        let line = entry().format("combined");
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"GET /api/chains HTTP/1.1\" 200 42"));
        assert!(line.contains("\"-\" \"curl/8.0\""));
    }

    #[test]
    fn test_json_format() {
        let parsed: serde_json::Value = serde_json::from_str(&entry().format("json")).unwrap();
        assert_eq!(parsed["method"], "GET");
        assert_eq!(parsed["status"], 200);
        assert_eq!(parsed["body_bytes"], 42);
        assert!(parsed["referer"].is_null());
    }

    #[test]
    fn test_unknown_format_falls_back_to_combined() {
        let mut e = entry();
        e.query = Some("sort=name".to_string());
        let line = e.format("csv");
        assert!(line.contains("GET /api/chains?sort=name"));
    }
}
