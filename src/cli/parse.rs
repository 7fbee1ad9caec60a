use digraph_core::format::OutputFormat;
use digraph_core::{Algorithm, Edge, FrontierStrategy, Vertex, Weight};

/// Split `s` on `,` or `:` into trimmed fields
fn fields(s: &str) -> Vec<&str> {
    s.split([',', ':']).map(str::trim).collect()
}

fn parse_number<T: std::str::FromStr>(field: &str, what: &str, input: &str) -> Result<T, String> {
    field
        .parse::<T>()
        .map_err(|_| format!("invalid {} '{}' in '{}'", what, field, input))
}

/// Parse an edge from `FROM,TO[,WEIGHT]`; `:` is accepted as separator too
pub fn parse_edge(s: &str) -> std::result::Result<Edge, String> {
    match fields(s).as_slice() {
        [from, to] => Ok(Edge::unweighted(
            parse_number(from, "vertex", s)?,
            parse_number(to, "vertex", s)?,
        )),
        [from, to, weight] => Ok(Edge::new(
            parse_number(from, "vertex", s)?,
            parse_number(to, "vertex", s)?,
            parse_number::<Weight>(weight, "weight", s)?,
        )),
        _ => Err(format!("expected FROM,TO[,WEIGHT], got '{}'", s)),
    }
}

/// Parse a vertex pair from `FROM,TO`
pub fn parse_link(s: &str) -> std::result::Result<(Vertex, Vertex), String> {
    match fields(s).as_slice() {
        [from, to] => Ok((
            parse_number(from, "vertex", s)?,
            parse_number(to, "vertex", s)?,
        )),
        _ => Err(format!("expected FROM,TO, got '{}'", s)),
    }
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse frontier strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<FrontierStrategy, String> {
    s.parse::<FrontierStrategy>().map_err(|e| e.to_string())
}
