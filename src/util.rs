use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::color::LpqSolution;

/** one row of the results CSV: everything describing a run and its outcome.
The `alpha` column is textual: "N/A" for greedy, one fixed-precision decimal
for randomized, a ';'-separated list for reactive. */
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    /// local datetime of the run (%Y-%m-%d %H:%M:%S)
    pub datetime: String,
    /// instance file name
    pub instance: String,
    /// minimum gap across edges
    pub p: usize,
    /// minimum gap across distance-2 pairs
    pub q: usize,
    /// algorithm name (greedy | randomized | reactive)
    pub algorithm: String,
    /// textual alpha descriptor
    pub alpha: String,
    /// number of iterations performed
    pub iterations: usize,
    /// block size (0 unless reactive)
    pub block_size: usize,
    /// RNG seed
    pub seed: u64,
    /// wall-clock solving time in seconds
    pub execution_time: f64,
    /// best maximum color found
    pub best_solution: usize,
    /// mean construction maximum color
    pub avg_solution: f64,
    /// best alpha (0 for greedy)
    pub best_alpha: f64,
}

const CSV_HEADER: &str =
    "datetime,instance,p,q,algorithm,alpha,iterations,blockSize,seed,executionTime,bestSolution,avgSolution,bestAlpha";

/** appends a result row to the CSV file, writing the header first if (and
only if) the file does not exist yet. Missing parent directories are
created. */
pub fn save_result_csv(result: &ExecutionResult, filename: &str) -> Result<()> {
    let path = Path::new(filename);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("unable to create directory '{}'", parent.display()))?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)
        .with_context(|| format!("unable to open results file '{}'", filename))?;
    if file.metadata()?.len() == 0 {
        writeln!(file, "{}", CSV_HEADER)?;
    }
    writeln!(
        file,
        "{},{},{},{},{},{},{},{},{},{:.6},{},{:.2},{:.3}",
        result.datetime, result.instance, result.p, result.q,
        result.algorithm, result.alpha, result.iterations, result.block_size,
        result.seed, result.execution_time, result.best_solution,
        result.avg_solution, result.best_alpha,
    )?;
    Ok(())
}

/** performance statistics exported as JSON next to the CSV row. */
#[derive(Debug, Clone, Serialize)]
pub struct SearchStats {
    /// instance file name
    pub instance: String,
    /// algorithm name
    pub algorithm: String,
    /// minimum gap across edges
    pub p: usize,
    /// minimum gap across distance-2 pairs
    pub q: usize,
    /// RNG seed
    pub seed: u64,
    /// best maximum color found
    pub best_max_color: usize,
    /// wall-clock solving time in seconds
    pub execution_time: f64,
    /// final alpha probabilities (reactive runs only)
    pub probabilities: Option<Vec<f64>>,
}

/// writes the performance statistics as a JSON file
pub fn export_stats(stats: &SearchStats, filename: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(filename, json)
        .with_context(|| format!("unable to write stats file '{}'", filename))?;
    Ok(())
}

/** writes a solution into a file: the maximum color on the first line, then
one `vertex color` line per vertex. */
pub fn write_solution(sol: &LpqSolution, filename: &str) -> Result<()> {
    let mut out = format!("max_color {}\n", sol.max_color);
    for (v, c) in sol.colors.iter().enumerate() {
        match c {
            Some(color) => out += format!("{} {}\n", v, color).as_str(),
            None => out += format!("{} -\n", v).as_str(),
        }
    }
    fs::write(filename, out)
        .with_context(|| format!("unable to write solution file '{}'", filename))?;
    Ok(())
}

/// local datetime formatted for the results CSV
pub fn current_datetime() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// time-derived seed, used when the command line provides none
pub fn generate_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
