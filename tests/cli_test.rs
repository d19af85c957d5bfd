use std::process::Command;

fn venue_finder() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_venue-finder"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_name_search_prints_matching_card() {
    let output = venue_finder()
        .args(["--mode", "name", "--term", "serena"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[2] Serena Hotel"));
    assert!(!stdout.contains("Marriott"));
}

#[test]
fn test_type_search_with_no_match_prints_empty_state() {
    let output = venue_finder()
        .args(["--mode", "type", "--term", "stadium"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "No venues found matching your criteria.");
}

#[test]
fn test_capacity_without_term_filters_catalog_as_json() {
    let output = venue_finder()
        .args(["--capacity", "500+", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let venues: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = venues
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Kigali Convention Centre"]);
}

#[test]
fn test_details_for_known_venue() {
    let output = venue_finder().args(["--details", "3"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Marriott Hotel"));
    assert!(stdout.contains("Type: hall"));
}

#[test]
fn test_invalid_inputs_exit_with_error() {
    for args in [
        vec!["--capacity", "lots"],
        vec!["--mode", "price"],
        vec!["--details", "42"],
        vec!["--endpoint", "not-a-url"],
    ] {
        let output = venue_finder().args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
    }
}
