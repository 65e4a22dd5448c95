use ordered_float::OrderedFloat;
use shortest_paths::config::CliConfig;
use shortest_paths::graph::{Graph, GraphSummary};
use shortest_paths::report::{PathReport, ReachableReport};
use shortest_paths::{parse_graph, Error, GraphFormat, LabeledGraph, ShortestPaths, Weight};

fn resource(name: &str) -> String {
    format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_format_tags() {
    assert_eq!("basic".parse::<GraphFormat>().unwrap(), GraphFormat::Basic);
    assert_eq!("db1b".parse::<GraphFormat>().unwrap(), GraphFormat::Db1b);
    assert!(matches!(
        "xml".parse::<GraphFormat>(),
        Err(Error::UnsupportedFormat(tag)) if tag == "xml"
    ));
    assert_eq!(GraphFormat::Db1b.tag(), "db1b");
}

#[test]
fn test_missing_file_is_source_not_found() {
    let err = parse_graph(GraphFormat::Basic, resource("NoSuchGraph.txt")).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(path) if path.ends_with("NoSuchGraph.txt")));
}

#[test]
fn test_basic_parser() {
    let g = parse_graph(GraphFormat::Basic, resource("Simple2.txt")).unwrap();
    assert_eq!(g.report(), GraphSummary { nodes: 6, edges: 8 });

    let d = g.node("D").unwrap();
    let e = g.node("E").unwrap();
    assert_eq!(g.edge_weight(d, e), Some(OrderedFloat(2.0)));
    assert_eq!(g.edge_weight(e, d), None);
    assert_eq!(g.outgoing_edges(g.node("G").unwrap()).count(), 0);
}

#[test]
fn test_basic_parser_repeated_edge_overwrites() {
    let g = GraphFormat::Basic.parse_str("A B 5\nA B 2 # cheaper\n").unwrap();
    let (a, b) = (g.node("A").unwrap(), g.node("B").unwrap());
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_weight(a, b), Some(OrderedFloat(2.0)));
}

#[test]
fn test_basic_parser_errors() {
    assert!(matches!(
        GraphFormat::Basic.parse_str("A B 1\nA B\n"),
        Err(Error::Parse { line: 2, .. })
    ));
    assert!(matches!(
        GraphFormat::Basic.parse_str("A B one\n"),
        Err(Error::Parse { line: 1, .. })
    ));
    assert!(matches!(
        GraphFormat::Basic.parse_str("\n\nA B -3\n"),
        Err(Error::Parse { line: 3, .. })
    ));
}

#[test]
fn test_db1b_parser_averages_fares() {
    let g = parse_graph(GraphFormat::Db1b, resource("Flights.csv")).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 5);

    let sea = g.node("SEA").unwrap();
    let pdx = g.node("PDX").unwrap();
    let lax = g.node("LAX").unwrap();
    assert_eq!(g.edge_weight(sea, pdx), Some(OrderedFloat(120.0)));
    // The LAX -> SEA row has no fare and is skipped
    assert_eq!(g.edge_weight(lax, sea), None);
}

#[test]
fn test_db1b_shortest_route() {
    let g = parse_graph(GraphFormat::Db1b, resource("Flights.csv")).unwrap();
    let sea = g.node("SEA").unwrap();
    let lax = g.node("LAX").unwrap();

    let mut sp = ShortestPaths::new(&g);
    sp.compute(sea).unwrap();

    let labels: Vec<&str> = sp
        .shortest_path(lax)
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|node| g.label(node).unwrap())
        .collect();
    assert_eq!(labels, vec!["SEA", "PDX", "SFO", "LAX"]);
    assert_eq!(sp.shortest_path_length(lax).unwrap(), OrderedFloat(320.0));
}

#[test]
fn test_db1b_parser_requires_columns() {
    let err = GraphFormat::Db1b.parse_str("ORIGIN,DEST\nSEA,PDX\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 1, message } if message.contains("MARKET_FARE")));

    let err = GraphFormat::Db1b.parse_str("ORIGIN,DEST,MARKET_FARE\nSEA,PDX\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn test_cli_config() {
    let config = CliConfig::from_args(["db1b", "flights.csv", "SEA", "LAX", "--json"]).unwrap();
    assert_eq!(config.format, GraphFormat::Db1b);
    assert_eq!(config.path, "flights.csv");
    assert_eq!(config.origin, "SEA");
    assert_eq!(config.destination.as_deref(), Some("LAX"));
    assert!(config.json);

    let config = CliConfig::from_args(["basic", "g.txt", "A"]).unwrap();
    assert_eq!(config.destination, None);
    assert!(!config.json);

    assert!(matches!(CliConfig::from_args(["basic", "g.txt"]), Err(Error::Usage(_))));
    assert!(matches!(
        CliConfig::from_args(["basic", "g.txt", "A", "--verbose"]),
        Err(Error::Usage(_))
    ));
    assert!(matches!(
        CliConfig::from_args(["csv", "g.txt", "A"]),
        Err(Error::UnsupportedFormat(_))
    ));
}

fn report_graph() -> LabeledGraph<Weight> {
    GraphFormat::Basic
        .parse_str("A B 2\nA C 1\nC B 0.5\nD A 1\n")
        .unwrap()
}

#[test]
fn test_reachable_report() {
    let g = report_graph();
    let mut sp = ShortestPaths::new(&g);
    sp.compute(g.node("A").unwrap()).unwrap();

    let report = ReachableReport::build(&sp).unwrap();
    assert_eq!(report.origin, "A");
    let labels: Vec<&str> = report.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "C", "B"]);
    assert_eq!(report.to_string(), "A 0\nC 1\nB 1.5\n");
}

#[test]
fn test_path_report() {
    let g = report_graph();
    let mut sp = ShortestPaths::new(&g);
    sp.compute(g.node("A").unwrap()).unwrap();

    let report = PathReport::build(&sp, g.node("B").unwrap()).unwrap();
    assert_eq!(report.path, Some(vec!["A".to_string(), "C".to_string(), "B".to_string()]));
    assert_eq!(report.length, Some(1.5));
    assert_eq!(report.to_string(), "A C B\n1.5\n");

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["length"], 1.5);
    assert_eq!(json["path"][2], "B");

    let missing = PathReport::build(&sp, g.node("D").unwrap()).unwrap();
    assert_eq!(missing.path, None);
    assert_eq!(missing.to_string(), "No path from A to D\n");
    let json = serde_json::to_value(&missing).unwrap();
    assert!(json.get("length").is_none());
    assert!(json["path"].is_null());
}

#[test]
fn test_reports_require_compute() {
    let g = report_graph();
    let sp = ShortestPaths::new(&g);
    assert!(matches!(ReachableReport::build(&sp), Err(Error::NotComputed)));
}

#[test]
fn test_db1b_parser_keeps_quoted_commas_in_one_field() {
    let input = "\"ORIGIN_CITY\",\"ORIGIN\",\"DEST\",\"MARKET_FARE\"\n\
                 \"New York, NY\",\"JFK\",\"LAX\",300.00\n\
                 \"Los Angeles, CA\",\"LAX\",\"JFK\",280.00\n";
    let g = GraphFormat::Db1b.parse_str(input).unwrap();

    let jfk = g.node("JFK").expect("JFK row should be read");
    let lax = g.node("LAX").expect("LAX row should be read");
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_weight(jfk, lax), Some(OrderedFloat(300.0)));
    assert_eq!(g.edge_weight(lax, jfk), Some(OrderedFloat(280.0)));
    assert_eq!(g.node("New York"), None);
}
