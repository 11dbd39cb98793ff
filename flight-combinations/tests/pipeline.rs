//! End-to-end tests: CSV in, itineraries out.

use std::fs;

use clap::Parser;
use flight_combinations::cli::{Args, CliError, execute, run};

const HEADER: &str = "source,destination,departure,arrival,flight_number,price,bags_allowed,bag_price";

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["flight-combinations"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

fn execute_str(args: &Args, input: &str) -> Result<String, CliError> {
    let mut out = Vec::new();
    execute(args, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn sample_input() -> String {
    format!(
        "{HEADER}\n\
         USM,HKT,2017-02-11T06:25:00,2017-02-11T07:25:00,PV511,35,1,12\n\
         HKT,DPS,2017-02-11T09:50:00,2017-02-11T12:35:00,PV404,102,2,9\n\
         DPS,USM,2017-02-11T14:00:00,2017-02-11T17:00:00,PV999,80,2,5\n\
         HKT,USM,2017-02-11T13:30:00,2017-02-11T14:30:00,PV100,40,0,0\n"
    )
}

#[test]
fn csv_pipeline() {
    let output = execute_str(&args(&[]), &sample_input()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        [
            "source,destination,departure,arrival,transfers_count,flight_numbers_chain,bags_allowed,price,price_with_1_bag,price_with_2_bags",
            "USM,HKT,2017-02-11T06:25:00,2017-02-11T07:25:00,0,PV511,1,35,47,-",
            "HKT,DPS,2017-02-11T09:50:00,2017-02-11T12:35:00,0,PV404,2,102,111,120",
            "DPS,USM,2017-02-11T14:00:00,2017-02-11T17:00:00,0,PV999,2,80,85,90",
            "HKT,USM,2017-02-11T13:30:00,2017-02-11T14:30:00,0,PV100,0,40,-,-",
            "USM,DPS,2017-02-11T06:25:00,2017-02-11T12:35:00,1,PV511->PV404,1,137,158,-",
            "HKT,USM,2017-02-11T09:50:00,2017-02-11T17:00:00,1,PV404->PV999,2,182,196,210",
            "USM,USM,2017-02-11T06:25:00,2017-02-11T17:00:00,2,PV511->PV404->PV999,1,217,243,-",
        ]
    );
}

#[test]
fn json_pipeline() {
    let output = execute_str(&args(&["--format", "json"]), &sample_input()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 7);
    let round_trip = &rows[6];
    assert_eq!(round_trip["source"], "USM");
    assert_eq!(round_trip["destination"], "USM");
    assert_eq!(round_trip["transfers_count"], 2);
    assert_eq!(
        round_trip["flight_numbers"],
        serde_json::json!(["PV511", "PV404", "PV999"])
    );
    assert!(round_trip["price_with_2_bags"].is_null());
}

#[test]
fn headerless_input() {
    let input = "A,B,2021-09-01T10:00:00,2021-09-01T11:00:00,F1,10,1,1\n\
                 B,C,2021-09-01T13:00:00,2021-09-01T14:00:00,F2,20,1,1\n";
    let output = execute_str(&args(&["--no-header"]), input).unwrap();

    assert_eq!(output.lines().count(), 4);
    assert!(output.contains(",F1->F2,"));
}

#[test]
fn narrower_window_drops_connections() {
    let output = execute_str(&args(&["--max-connection-mins", "120"]), &sample_input()).unwrap();

    // PV511 -> PV404 has a 145 minute layover
    assert!(!output.contains("PV511->PV404"));
    assert!(output.contains("PV404->PV999"));
}

#[test]
fn header_error_maps_to_exit_code_two() {
    let input = "source,destination,departure,arrival,flight_number,price,bags_allowed,gate\n";
    let err = execute_str(&args(&[]), input).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("bag_price"));
}

#[test]
fn field_error_maps_to_exit_code_three() {
    let input = format!("{HEADER}\nA,B,2021-09-01T10:00:00,2021-09-01T11:00:00,F1,ten,1,1\n");
    let err = execute_str(&args(&[]), &input).unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn failed_load_writes_nothing() {
    let input = format!("{HEADER}\nA,B,2021-09-01T10:00:00,2021-09-01T11:00:00,F1,10,1,x\n");
    let mut out = Vec::new();

    assert!(execute(&args(&[]), input.as_bytes(), &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn run_with_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flights.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, sample_input()).unwrap();

    let args = args(&[
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    run(&args).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 8);
    assert!(written.contains("PV511->PV404->PV999"));
}

#[test]
fn run_failure_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flights.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "source,destination\n").unwrap();

    let args = args(&[
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    let err = run(&args).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(!output.exists());
}

#[test]
fn run_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let args = args(&[dir.path().join("absent.csv").to_str().unwrap()]);

    let err = run(&args).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}
