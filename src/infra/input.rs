//! Reader for the plain-text graph inputs used by the test corpus.
//!
//! The format is a whitespace/newline-delimited token stream: first the
//! node count, then a caller-specified number of query parameters (for
//! example `i j k` for a shortest-path input, or `s t` for a max-flow
//! input), then `node_count²` integers forming a dense adjacency matrix in
//! row-major order. Off the diagonal, `0` means "no edge".
//!
//! The algorithm types in [`algo`](crate::algo) never read input
//! themselves. A consumer parses a [`GraphInput`] and feeds the edges it
//! exposes to whichever component it targets.
//!
//! # Examples
//!
//! ```
//! use gral::algo::CycleDetector;
//! use gral::infra::input::GraphInput;
//!
//! let input = GraphInput::parse_str("3 0 1 0 0 0 1 1 0 0", 0).unwrap();
//!
//! let mut graph = CycleDetector::new(input.node_count());
//! for (from, to, weight) in input.directed_edges() {
//!     graph.add_edge(from, to, weight);
//! }
//!
//! assert!(graph.has_cycle());
//! ```

use std::io::{self, Read};

use thiserror::Error;

/// The error encountered while parsing a graph input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading from the source failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),

    /// The token stream ended before the expected matrix was complete.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A token is not an integer of the expected range.
    #[error("invalid token `{0}`")]
    InvalidToken(String),
}

/// Parsed graph input: node count, query parameters, and the dense
/// adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    node_count: usize,
    params: Vec<usize>,
    matrix: Vec<i64>,
}

impl GraphInput {
    /// Reads the whole source and parses it with
    /// [`parse_str`](Self::parse_str).
    pub fn parse(mut source: impl Read, param_count: usize) -> Result<Self, ParseError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;
        Self::parse_str(&text, param_count)
    }

    /// Parses a token stream with `param_count` query parameters between
    /// the node count and the matrix.
    pub fn parse_str(text: &str, param_count: usize) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();

        let node_count = next_token(&mut tokens)?;
        let params = (0..param_count)
            .map(|_| next_token(&mut tokens))
            .collect::<Result<_, _>>()?;
        let matrix = (0..node_count * node_count)
            .map(|_| next_token(&mut tokens))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            node_count,
            params,
            matrix,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Query parameters in input order.
    pub fn params(&self) -> &[usize] {
        &self.params
    }

    /// Every matrix cell as `(row, column, value)`.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.matrix.iter().enumerate().map(|(position, &value)| {
            (
                position / self.node_count,
                position % self.node_count,
                value,
            )
        })
    }

    /// Non-zero cells, the directed-graph edge convention.
    pub fn directed_edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.entries().filter(|&(_, _, value)| value != 0)
    }

    /// Non-zero cells strictly below the diagonal, the undirected-graph
    /// convention (each edge is listed once, in its lower triangle cell).
    pub fn undirected_edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.directed_edges()
            .filter(|&(row, column, _)| column < row)
    }
}

fn next_token<T>(tokens: &mut std::str::SplitWhitespace<'_>) -> Result<T, ParseError>
where
    T: std::str::FromStr,
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEnd)?;
    token
        .parse()
        .map_err(|_| ParseError::InvalidToken(token.to_owned()))
}
