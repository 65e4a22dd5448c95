//! Graph file parsers
//!
//! The set of supported formats is closed; [`GraphFormat`] selects the parser.

pub mod basic;
pub mod db1b;

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::graph::LabeledGraph;
use crate::{Error, Result, Weight};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// One `FROM TO WEIGHT` edge per line
    Basic,
    /// DB1B flight market CSV, weighted by mean fare
    Db1b,
}

impl GraphFormat {
    /// Tag used on the command line
    pub fn tag(self) -> &'static str {
        match self {
            GraphFormat::Basic => "basic",
            GraphFormat::Db1b => "db1b",
        }
    }

    /// Parses graph text in this format
    pub fn parse_str(self, input: &str) -> Result<LabeledGraph<Weight>> {
        match self {
            GraphFormat::Basic => basic::parse(input),
            GraphFormat::Db1b => db1b::parse(input),
        }
    }
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" => Ok(GraphFormat::Basic),
            "db1b" => Ok(GraphFormat::Db1b),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Opens `path` and parses it as a graph in the given format
///
/// A missing file is reported as [`Error::SourceNotFound`].
pub fn parse_graph<P: AsRef<Path>>(format: GraphFormat, path: P) -> Result<LabeledGraph<Weight>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::SourceNotFound(path.display().to_string()),
        _ => Error::Io(e),
    })?;

    let mut input = String::new();
    BufReader::new(file).read_to_string(&mut input)?;

    let graph = format.parse_str(&input)?;
    info!("Parsed {} graph from {}", format.tag(), path.display());
    Ok(graph)
}
