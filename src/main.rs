//! L(p,q)-labeling solver executable.
//!
//! Selects one of three algorithms (greedy / randomized GRASP / reactive
//! GRASP), solves the instance, reports validity, and appends a result row
//! to a CSV file.

#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{App, load_yaml};

use lpq_color::color::{checker, LpqParams, LpqSolution};
use lpq_color::graph::Graph;
use lpq_color::search::grasp::grasp;
use lpq_color::search::greedy::greedy;
use lpq_color::search::reactive::reactive_grasp;
use lpq_color::util::{
    current_datetime, export_stats, generate_seed, save_result_csv, write_solution,
    ExecutionResult, SearchStats,
};

/// everything a finished run reports, whatever the algorithm
#[derive(Debug)]
struct RunOutcome {
    solution: LpqSolution,
    avg_max_color: f64,
    alpha_column: String,
    best_alpha: f64,
    probabilities: Option<Vec<f64>>,
    iterations: usize,
    block_size: usize,
}

fn parse_alphas(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| part.trim().parse::<f64>()
            .with_context(|| format!("unable to parse alpha value '{}'", part)))
        .collect()
}

/**
reads an instance, runs the selected algorithm, checks the solution, and
exports the results (console, CSV row, optional solution/stats files).

Exit code 0 on success or help display; 1 on missing required parameters,
unreadable instance file, or unrecognized algorithm name.
*/
pub fn main() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap();
    let p: usize = main_args.value_of("p").unwrap().parse()
        .context("unable to parse p")?;
    let q: usize = main_args.value_of("q").unwrap().parse()
        .context("unable to parse q")?;
    let algorithm = main_args.value_of("algorithm").unwrap();
    if !["greedy", "randomized", "reactive"].contains(&algorithm) {
        bail!("unrecognized algorithm '{}' (valid: greedy, randomized, reactive)", algorithm);
    }
    let alpha: f64 = main_args.value_of("alpha").unwrap().parse()
        .context("unable to parse alpha")?;
    let alphas: Vec<f64> = match main_args.value_of("alphas") {
        Some(list) => parse_alphas(list)?,
        None => vec![0.1, 0.3, 0.5],
    };
    let iterations_arg: Option<usize> = match main_args.value_of("iterations") {
        Some(v) => Some(v.parse().context("unable to parse the iteration count")?),
        None => None,
    };
    let block_size: usize = main_args.value_of("blocksize").unwrap().parse()
        .context("unable to parse the block size")?;
    let seed: u64 = match main_args.value_of("seed") {
        Some(v) => v.parse().context("unable to parse the seed")?,
        None => generate_seed(),
    };
    // read the instance
    println!("=========================================================");
    println!("reading instance: {}...", inst_filename);
    let inst = Graph::from_file(inst_filename)?;
    inst.display_statistics();
    println!("=======================");
    println!("p = {}, q = {}", p, q);
    println!("algorithm: {}", algorithm);
    println!("seed: {}", seed);
    let params = LpqParams { p, q };
    // solve
    let time_init = Instant::now();
    let outcome = match algorithm {
        "greedy" => {
            let solution = greedy(&inst, &params)?;
            let avg_max_color = solution.max_color as f64;
            RunOutcome {
                solution, avg_max_color,
                alpha_column: "N/A".to_string(),
                best_alpha: 0.0,
                probabilities: None,
                iterations: 0,
                block_size: 0,
            }
        }
        "randomized" => {
            let nb_iterations = iterations_arg.unwrap_or(30);
            println!("alpha = {}, iterations = {}", alpha, nb_iterations);
            let result = grasp(&inst, &params, alpha, nb_iterations, seed)?;
            RunOutcome {
                solution: result.solution,
                avg_max_color: result.avg_max_color,
                alpha_column: format!("{:.2}", alpha),
                best_alpha: alpha,
                probabilities: None,
                iterations: nb_iterations,
                block_size: 0,
            }
        }
        _ => { // reactive
            let nb_iterations = iterations_arg.unwrap_or(300);
            println!(
                "alphas = {:?}, iterations = {}, block size = {}",
                alphas, nb_iterations, block_size
            );
            let result = reactive_grasp(&inst, &params, &alphas, nb_iterations, block_size, seed)?;
            println!("final alpha probabilities: {:?}", result.probabilities);
            RunOutcome {
                solution: result.solution,
                avg_max_color: result.avg_max_color,
                alpha_column: alphas.iter()
                    .map(|a| format!("{:.2}", a))
                    .collect::<Vec<_>>().join(";"),
                best_alpha: result.best_alpha,
                probabilities: Some(result.probabilities),
                iterations: nb_iterations,
                block_size,
            }
        }
    };
    let execution_time = time_init.elapsed().as_secs_f64();
    // check the solution (advisory: the result is reported either way)
    let check = checker(&inst, &params, &outcome.solution);
    println!("=======================");
    println!("{:.6} \t seconds", execution_time);
    println!("{} \t max color used", outcome.solution.max_color);
    println!("{} \t valid solution", if check.is_ok() { "YES" } else { "NO" });
    if !check.is_ok() {
        println!("checker reported: {:?}", check);
    }
    // export solution / stats if requested
    if let Some(sol_filename) = main_args.value_of("solution") {
        write_solution(&outcome.solution, sol_filename)?;
        println!("solution written in: {}", sol_filename);
    }
    if let Some(perf_filename) = main_args.value_of("perf") {
        let stats = SearchStats {
            instance: inst_filename.to_string(),
            algorithm: algorithm.to_string(),
            p, q, seed,
            best_max_color: outcome.solution.max_color,
            execution_time,
            probabilities: outcome.probabilities.clone(),
        };
        export_stats(&stats, perf_filename)?;
        println!("stats written in: {}", perf_filename);
    }
    // append the result row
    let csv_filename = main_args.value_of("csv").unwrap();
    let result_row = ExecutionResult {
        datetime: current_datetime(),
        instance: inst_filename.to_string(),
        p, q,
        algorithm: algorithm.to_string(),
        alpha: outcome.alpha_column.clone(),
        iterations: outcome.iterations,
        block_size: outcome.block_size,
        seed,
        execution_time,
        best_solution: outcome.solution.max_color,
        avg_solution: outcome.avg_max_color,
        best_alpha: outcome.best_alpha,
    };
    save_result_csv(&result_row, csv_filename)?;
    println!("results appended to: {}", csv_filename);
    Ok(())
}
