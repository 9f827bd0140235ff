//! Compare computed reduction matrices against exact rational references.
//!
//! Reference files are produced by `validation/reference.py` into
//! `validation/fixtures/`. Every entry must agree to within `TOLERANCE`.

use degree_reduction::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize)]
struct ReferenceData {
    name: String,
    params: Params,
    matrix: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
struct Params {
    n: i64,
    m: i64,
    r: i64,
    s: i64,
}

#[derive(Debug, Serialize)]
struct CaseReport {
    name: String,
    params: Params,
    max_abs_diff: f64,
    passed: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let input_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Run reference.py first.",
            input_dir
        );
        return Ok(ExitCode::SUCCESS);
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(&input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut reports = Vec::with_capacity(paths.len());
    for path in &paths {
        reports.push(process_file(path)?);
    }

    for report in &reports {
        println!(
            "{:<20} max |diff| = {:.3e}  {}",
            report.name,
            report.max_abs_diff,
            if report.passed { "ok" } else { "FAILED" }
        );
    }

    let summary_path = input_dir.join("../report.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&reports)?)?;

    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        eprintln!("{} of {} cases exceeded tolerance {:e}", failed, reports.len(), TOLERANCE);
        return Ok(ExitCode::FAILURE);
    }
    println!("all {} cases within {:e}", reports.len(), TOLERANCE);
    Ok(ExitCode::SUCCESS)
}

fn process_file(input_path: &Path) -> Result<CaseReport, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let data: ReferenceData = serde_json::from_reader(file)?;
    let p = data.params;

    let mut out = vec![0.0; data.matrix.len()];
    reduction_matrix_into(p.n, p.m, p.r, p.s, &mut out)?;

    let max_abs_diff = out
        .iter()
        .zip(&data.matrix)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);

    Ok(CaseReport {
        name: data.name,
        params: p,
        max_abs_diff,
        passed: max_abs_diff <= TOLERANCE,
    })
}
