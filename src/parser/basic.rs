use ordered_float::OrderedFloat;

use crate::graph::LabeledGraph;
use crate::{Error, Result, Weight};

/// Parses the basic edge-list format
///
/// Each non-empty line is either `FROM TO WEIGHT`, adding a directed edge, or
/// a single `LABEL`, declaring a node without edges. Anything after `#` is a
/// comment.
pub fn parse(input: &str) -> Result<LabeledGraph<Weight>> {
    let mut graph = LabeledGraph::new();

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [label] => {
                graph.get_or_create_node(label);
            }
            [from, to, weight] => {
                let weight: f64 = weight.parse().map_err(|_| Error::Parse {
                    line: line_no,
                    message: format!("invalid weight '{}'", weight),
                })?;
                let from = graph.get_or_create_node(from);
                let to = graph.get_or_create_node(to);
                graph
                    .add_directed_edge(from, to, OrderedFloat(weight))
                    .map_err(|e| Error::Parse {
                        line: line_no,
                        message: e.to_string(),
                    })?;
            }
            _ => {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!("expected 'FROM TO WEIGHT', found '{}'", line),
                });
            }
        }
    }

    Ok(graph)
}
