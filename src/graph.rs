use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num,
};

use fnv::FnvHashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("malformed header; expected `n m`")]
    MalformedHeader,
    #[error("invalid edge line: {0}")]
    InvalidLine(String),
    #[error("vertex {0} out of range [1, {1}]")]
    VertexOutOfRange(u32, u32),
    #[error("self-loop on vertex {0}")]
    SelfLoop(u32),
    #[error("header declares {declared} edges, found {actual}")]
    EdgeCountMismatch { declared: usize, actual: usize },
    #[error("{0} vertices is too few for a hamiltonian cycle (need at least 3)")]
    Degenerate(u32),
    #[error("io error")]
    IO(#[from] io::Error),
    #[error("not a valid value")]
    ParseError(#[from] num::ParseIntError),
}

type Result<T> = std::result::Result<T, GraphError>;

/// An undirected simple graph with vertices `1..=n`. Immutable once built;
/// the adjacency sets are constructed up front and deduplicate repeated
/// edge lines implicitly.
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: u32,
    edges: Vec<(u32, u32)>,
    // Indexed directly by vertex id; slot 0 is unused.
    adjacency: Vec<FnvHashSet<u32>>,
}

impl Graph {
    pub fn new(vertex_count: u32, edges: Vec<(u32, u32)>) -> Result<Graph> {
        if vertex_count < 3 {
            return Err(GraphError::Degenerate(vertex_count));
        }
        let mut adjacency = vec![FnvHashSet::default(); vertex_count as usize + 1];
        for &(u, v) in &edges {
            for vertex in [u, v] {
                if vertex < 1 || vertex > vertex_count {
                    return Err(GraphError::VertexOutOfRange(vertex, vertex_count));
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            adjacency[u as usize].insert(v);
            adjacency[v as usize].insert(u);
        }
        Ok(Graph {
            vertex_count,
            edges,
            adjacency,
        })
    }

    /// Parse the line-based text format: a `n m` header, then one `u v`
    /// line per edge.
    pub fn parse(filename: &str) -> Result<Graph> {
        let file = File::open(filename)?;
        Self::read(BufReader::new(&file))
    }

    pub fn read<R: BufRead>(buffer: R) -> Result<Graph> {
        let mut lines = buffer
            .lines()
            // Keep errors! We need to terminate ASAP
            .filter(|l| !matches!(l, Ok(line) if line.trim().is_empty()));

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(GraphError::MalformedHeader),
        };
        let (vertex_count, edge_count) = match parse_pair(&header)? {
            Some(pair) => pair,
            None => return Err(GraphError::MalformedHeader),
        };

        let mut edges = Vec::with_capacity(edge_count as usize);
        for line in lines {
            let line = line?;
            match parse_pair(&line)? {
                Some(edge) => edges.push(edge),
                None => return Err(GraphError::InvalidLine(line)),
            }
        }
        if edges.len() != edge_count as usize {
            return Err(GraphError::EdgeCountMismatch {
                declared: edge_count as usize,
                actual: edges.len(),
            });
        }
        Graph::new(vertex_count, edges)
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// All vertex ids, `1..=n`.
    pub fn vertices(&self) -> impl Iterator<Item = u32> + Clone {
        1..=self.vertex_count
    }

    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    pub fn adjacent(&self, u: u32, v: u32) -> bool {
        self.adjacency[u as usize].contains(&v)
    }
}

fn parse_pair(line: &str) -> Result<Option<(u32, u32)>> {
    let mut words = line.split_ascii_whitespace();
    let pair = match (words.next(), words.next(), words.next()) {
        (Some(a), Some(b), None) => (a.parse::<u32>()?, b.parse::<u32>()?),
        _ => return Ok(None),
    };
    Ok(Some(pair))
}
