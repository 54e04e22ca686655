use graphkit_core::format::OutputFormat;
use graphkit_core::graph::MAX_NODES;

/// Parse an output format, reporting the accepted values on failure
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a node count in `1..=MAX_NODES`
pub fn parse_node_count(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid node count", s))?;
    if n == 0 {
        return Err("node count must be at least 1".to_string());
    }
    if n > MAX_NODES {
        return Err(format!("node count must be at most {}", MAX_NODES));
    }
    Ok(n)
}
