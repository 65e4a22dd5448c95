use std::collections::HashMap;

use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::graph::{LabeledGraph, NodeId};
use crate::{Error, Result, Weight};

const ORIGIN: &str = "ORIGIN";
const DEST: &str = "DEST";
const FARE: &str = "MARKET_FARE";

/// Position of a named column in the header
fn column(header: &csv::StringRecord, name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::Parse {
            line: 1,
            message: format!("missing column {}", name),
        })
}

fn csv_error(e: csv::Error) -> Error {
    let line = e.position().map_or(0, |pos| pos.line() as usize);
    Error::Parse {
        line,
        message: e.to_string(),
    }
}

/// Running fare total for one market
struct Market {
    from: NodeId,
    to: NodeId,
    total: f64,
    rows: usize,
}

/// Parses a DB1B market table into an airport graph
///
/// Every distinct `ORIGIN -> DEST` market becomes one directed edge weighted
/// by the mean `MARKET_FARE` over its rows. Rows with a missing, unparseable
/// or negative fare are skipped.
pub fn parse(input: &str) -> Result<LabeledGraph<Weight>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let header = reader.headers().map_err(csv_error)?.clone();
    if header.is_empty() {
        return Err(Error::Parse {
            line: 1,
            message: "missing header row".to_string(),
        });
    }
    let origin_col = column(&header, ORIGIN)?;
    let dest_col = column(&header, DEST)?;
    let fare_col = column(&header, FARE)?;
    let width = origin_col.max(dest_col).max(fare_col) + 1;

    let mut graph = LabeledGraph::new();
    let mut markets: Vec<Market> = Vec::new();
    let mut market_index: HashMap<(NodeId, NodeId), usize> = HashMap::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line_no = record.position().map_or(0, |pos| pos.line() as usize);
        if record.len() < width {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected at least {} fields, found {}", width, record.len()),
            });
        }

        let (origin, dest) = (&record[origin_col], &record[dest_col]);
        if origin.is_empty() || dest.is_empty() {
            return Err(Error::Parse {
                line: line_no,
                message: "empty airport code".to_string(),
            });
        }

        let fare = match record[fare_col].parse::<f64>() {
            Ok(fare) if fare.is_finite() && fare >= 0.0 => fare,
            _ => {
                warn!("Skipping line {}: invalid fare '{}'", line_no, &record[fare_col]);
                skipped += 1;
                continue;
            }
        };

        let from = graph.get_or_create_node(origin);
        let to = graph.get_or_create_node(dest);
        let slot = *market_index.entry((from, to)).or_insert_with(|| {
            markets.push(Market { from, to, total: 0.0, rows: 0 });
            markets.len() - 1
        });
        markets[slot].total += fare;
        markets[slot].rows += 1;
    }

    for market in &markets {
        let mean = market.total / market.rows as f64;
        graph.add_directed_edge(market.from, market.to, OrderedFloat(mean))?;
    }

    debug!(
        "Read {} markets between {} airports, skipped {} rows",
        markets.len(),
        graph.nodes().count(),
        skipped
    );

    Ok(graph)
}
