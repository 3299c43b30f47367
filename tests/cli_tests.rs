mod common;

use common::run_cli;
use regex::Regex;

fn stdout_of(args: &[&str]) -> String {
    let output = run_cli(args);
    if !output.status.success() {
        println!("STDERR:\n{}", String::from_utf8_lossy(&output.stderr));
        panic!("queenforge {:?} failed", args);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Fitness column of every population row, in printed order.
fn fitness_column(stdout: &str) -> Vec<u32> {
    let row = Regex::new(r"^\|\s*\d+\s*\|\s*\[[\d,]+\]\s*\|\s*(\d+)\s*\|$").unwrap();
    stdout
        .lines()
        .filter_map(|l| row.captures(l.trim()))
        .map(|c| c[1].parse().unwrap())
        .collect()
}

#[test]
fn test_cli_run_reports_population() {
    let stdout = stdout_of(&["run", "--seed", "3", "--set-iterations", "40"]);

    let iterations = Regex::new(r"Iterations took (\d+)").unwrap();
    let caps = iterations
        .captures(&stdout)
        .expect("iteration count missing from report");
    assert_eq!(&caps[1], "40");

    let fits = fitness_column(&stdout);
    assert!(!fits.is_empty(), "no population rows in:\n{}", stdout);
    assert!(fits.len() <= 100);
    assert!(fits.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", fits);
}

#[test]
fn test_cli_top_limits_rows() {
    let stdout = stdout_of(&["run", "--seed", "3", "-i", "10", "--top", "5"]);
    assert_eq!(fitness_column(&stdout).len(), 5);
    assert!(stdout.contains("more not shown"));
}

#[test]
fn test_cli_json_output() {
    let stdout = stdout_of(&["run", "--seed", "5", "-i", "20", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is not JSON");
    assert_eq!(value["iterations"], 20);
    let population = value["population"].as_array().unwrap();
    assert!(!population.is_empty() && population.len() <= 100);
    for member in population {
        assert_eq!(member["genes"].as_array().unwrap().len(), 8);
        assert!(member["fitness"].as_u64().is_some());
    }
}

#[test]
fn test_cli_check_solution() {
    let stdout = stdout_of(&["check", "1,3,0,2"]);
    assert!(stdout.contains("Fitness: 0 (max 6)"), "{}", stdout);
    assert!(stdout.contains("No two queens attack each other."));
}

#[test]
fn test_cli_check_lists_conflicts() {
    let stdout = stdout_of(&["check", "0 0 0 0"]);
    assert!(stdout.contains("Fitness: 6 (max 6)"), "{}", stdout);
    assert_eq!(stdout.matches("row").count(), 6);
}

#[test]
fn test_cli_rejects_bad_input() {
    let output = run_cli(&["check", "1,3,9,2"]);
    assert!(!output.status.success());

    let output = run_cli(&["run", "--n-best", "33"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("n_best"));
}
