use std::process::{Command, Output};

fn resource(name: &str) -> String {
    format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shortest_paths"))
        .args(args)
        .output()
        .expect("failed to run shortest_paths binary")
}

#[test]
fn test_json_path_output_is_a_json_document() {
    let simple0 = resource("Simple0.txt");
    let output = run_cli(&["basic", &simple0, "A", "B", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["origin"], "A");
    assert_eq!(json["destination"], "B");
    assert_eq!(json["path"][0], "A");
    assert_eq!(json["path"][1], "B");
    assert_eq!(json["length"], 1.0);
}

#[test]
fn test_json_reachable_output_is_a_json_document() {
    let flights = resource("Flights.csv");
    let output = run_cli(&["db1b", &flights, "SEA", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let labels: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["SEA", "PDX", "SFO", "LAX"]);
}

#[test]
fn test_plain_output_includes_summary_and_path() {
    let simple1 = resource("Simple1.txt");
    let output = run_cli(&["basic", &simple1, "S", "D"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Graph has 4 nodes and 5 edges\nS A D\n7\n");
}

#[test]
fn test_unreachable_and_bad_arguments() {
    let simple2 = resource("Simple2.txt");
    let output = run_cli(&["basic", &simple2, "D", "G"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().ends_with("No path from D to G\n"));

    let output = run_cli(&["basic", &simple2]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_cli(&["basic", &resource("Missing.txt"), "A"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Could not open file"));
}
