//! Matrix Market coordinate reader.
//!
//! Accepted layout:
//!
//! ```text
//! %%MatrixMarket matrix coordinate real general   (optional banner)
//! % comment lines
//! rows cols nnz
//! i j w                                             (nnz lines, 1-based ids)
//! ```
//!
//! Row/column ids become zero-based edge endpoints; the vertex count is
//! `rows`. `pattern` matrices carry no weight column and get weight 1.0.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SsspError};
use crate::graph::WeightedGraph;

/// Upper bound on edges reserved up front from the size line.
const MAX_PREALLOC_ENTRIES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Real,
    Integer,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixHeader {
    pub field: ValueField,
    pub symmetry: Symmetry,
    pub rows: usize,
    pub cols: usize,
    /// Entry lines declared by the size line.
    pub entries: usize,
}

impl Default for MatrixHeader {
    fn default() -> Self {
        Self { field: ValueField::Real, symmetry: Symmetry::General, rows: 0, cols: 0, entries: 0 }
    }
}

/// Parsed edges, already zero-based.
#[derive(Debug, Clone)]
pub struct EdgeList {
    pub header: MatrixHeader,
    pub edges: Vec<(u32, u32, f64)>,
}

impl EdgeList {
    pub fn vertex_count(&self) -> usize {
        self.header.rows
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn to_graph(&self) -> Result<WeightedGraph> {
        WeightedGraph::from_edges(self.vertex_count(), &self.edges)
    }
}

fn parse_banner(line: &str, lineno: usize) -> Result<(ValueField, Symmetry)> {
    let toks: Vec<String> = line.split_whitespace().map(|t| t.to_ascii_lowercase()).collect();
    if toks.len() != 5 || toks[1] != "matrix" {
        return Err(SsspError::malformed(lineno, "banner must read '%%MatrixMarket matrix <format> <field> <symmetry>'"));
    }
    if toks[2] != "coordinate" {
        return Err(SsspError::malformed(lineno, format!("unsupported format '{}'", toks[2])));
    }
    let field = match toks[3].as_str() {
        "real" | "double" => ValueField::Real,
        "integer" => ValueField::Integer,
        "pattern" => ValueField::Pattern,
        other => return Err(SsspError::malformed(lineno, format!("unsupported field '{}'", other))),
    };
    let symmetry = match toks[4].as_str() {
        "general" => Symmetry::General,
        "symmetric" => Symmetry::Symmetric,
        "skew-symmetric" => Symmetry::SkewSymmetric,
        other => return Err(SsspError::malformed(lineno, format!("unsupported symmetry '{}'", other))),
    };
    Ok((field, symmetry))
}

fn parse_num<T: std::str::FromStr>(tok: &str, what: &str, lineno: usize) -> Result<T> {
    tok.parse().map_err(|_| SsspError::malformed(lineno, format!("invalid {} '{}'", what, tok)))
}

fn parse_id(tok: &str, bound: usize, what: &str, lineno: usize) -> Result<u32> {
    let id: u64 = parse_num(tok, what, lineno)?;
    if id == 0 || id as usize > bound {
        return Err(SsspError::malformed(lineno, format!("{} {} outside 1..={}", what, id, bound)));
    }
    Ok((id - 1) as u32)
}

/// Parse a Matrix Market coordinate stream into zero-based edges.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut header = MatrixHeader::default();
    let mut have_size = false;
    let mut seen = 0usize;
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let trimmed = line.trim();
        if idx == 0 && trimmed.starts_with("%%MatrixMarket") {
            let (field, symmetry) = parse_banner(trimmed, lineno)?;
            header.field = field;
            header.symmetry = symmetry;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let toks: Vec<&str> = trimmed.split_whitespace().collect();

        if !have_size {
            if toks.len() != 3 {
                return Err(SsspError::malformed(lineno, "size line must hold 'rows cols nnz'"));
            }
            header.rows = parse_num(toks[0], "row count", lineno)?;
            header.cols = parse_num(toks[1], "column count", lineno)?;
            header.entries = parse_num(toks[2], "entry count", lineno)?;
            if header.rows == 0 {
                return Err(SsspError::malformed(lineno, "matrix has no rows"));
            }
            if header.rows > u32::MAX as usize {
                return Err(SsspError::malformed(lineno, "row count exceeds u32 id space"));
            }
            // declared count is untrusted until the entries are actually read
            edges.reserve(header.entries.min(MAX_PREALLOC_ENTRIES));
            have_size = true;
            continue;
        }

        if seen == header.entries {
            return Err(SsspError::malformed(lineno, format!("more than {} entries", header.entries)));
        }
        let want = if header.field == ValueField::Pattern { 2 } else { 3 };
        if toks.len() != want {
            return Err(SsspError::malformed(lineno, format!("expected {} tokens, found {}", want, toks.len())));
        }
        let src = parse_id(toks[0], header.rows, "row", lineno)?;
        let dst = parse_id(toks[1], header.rows, "column", lineno)?;
        let weight: f64 = match header.field {
            ValueField::Pattern => 1.0,
            ValueField::Integer => parse_num::<i64>(toks[2], "weight", lineno)? as f64,
            ValueField::Real => parse_num(toks[2], "weight", lineno)?,
        };
        if !weight.is_finite() {
            return Err(SsspError::malformed(lineno, format!("non-finite weight '{}'", toks[2])));
        }
        edges.push((src, dst, weight));
        if src != dst {
            match header.symmetry {
                Symmetry::General => {}
                Symmetry::Symmetric => edges.push((dst, src, weight)),
                Symmetry::SkewSymmetric => edges.push((dst, src, -weight)),
            }
        }
        seen += 1;
    }

    if !have_size {
        return Err(SsspError::malformed(0, "missing size line"));
    }
    if seen < header.entries {
        return Err(SsspError::malformed(0, format!("expected {} entries, found {}", header.entries, seen)));
    }
    debug!(rows = header.rows, cols = header.cols, entries = seen, edges = edges.len(), "matrix parsed");
    Ok(EdgeList { header, edges })
}

pub fn load_matrix_file<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let file = File::open(path.as_ref())?;
    read_matrix(BufReader::new(file))
}
