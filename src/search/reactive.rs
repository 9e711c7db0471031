use anyhow::{anyhow, Result};
use fastrand::Rng;
use ordered_float::OrderedFloat;

use crate::color::{LpqParams, LpqSolution, VertexId};
use crate::eval::{construction_cost, smallest_feasible_color};
use crate::graph::Graph;
use crate::search::grasp::{select_from_rcl, VertexCost};
use crate::search::local_search::local_search;

/// number of local search passes applied to the best reactive solution
const REACTIVE_LS_PASSES: usize = 100;

/** result of a reactive GRASP run: best solution, mean construction maximum
color, and the final probability over the candidate alphas (diagnostics of
the adaptive process). */
#[derive(Debug, Clone)]
pub struct ReactiveResult {
    /// best solution found (after local search)
    pub solution: LpqSolution,
    /// mean construction maximum color over the iterations
    pub avg_max_color: f64,
    /// final probability assigned to each candidate alpha
    pub probabilities: Vec<f64>,
    /// alpha holding the highest final probability
    pub best_alpha: f64,
}

/** randomized greedy construction with incremental cost maintenance.

Behaves draw-for-draw like [`crate::search::grasp::build_solution`] for the
same random stream: a vertex cost only depends on its colored direct and
distance-2 neighbors, so after coloring a vertex only those neighborhoods are
marked for recomputation; every other cached cost is reused verbatim. */
pub fn build_solution_incremental(
    inst: &Graph, params: &LpqParams, alpha: f64, rng: &mut Rng,
) -> Result<LpqSolution> {
    let n = inst.nb_vertices();
    let mut sol = LpqSolution::new(n);
    let mut uncolored: Vec<VertexId> = (0..n).collect();
    let mut is_colored = vec![false; n];
    let mut needs_update = vec![true; n];
    let mut cached_costs = vec![0.0_f64; n];
    while !uncolored.is_empty() {
        let mut costs: Vec<VertexCost> = Vec::with_capacity(uncolored.len());
        for &v in &uncolored {
            if needs_update[v] {
                cached_costs[v] = construction_cost(inst, params, v, &sol.colors)
                    .ok_or_else(|| anyhow!("construction: no feasible color for vertex {}", v))?;
                needs_update[v] = false;
            }
            costs.push((OrderedFloat(cached_costs[v]), v));
        }
        costs.sort();
        let chosen = select_from_rcl(&costs, alpha, rng);
        let c = smallest_feasible_color(inst, params, chosen, &sol.colors)
            .ok_or_else(|| anyhow!("construction: no feasible color for vertex {}", chosen))?;
        sol.assign(chosen, c);
        is_colored[chosen] = true;
        // only the direct and distance-2 neighborhoods of the colored vertex
        // see a new constraint
        for &u in inst.neighbors(chosen) {
            if !is_colored[u] { needs_update[u] = true; }
        }
        for w in inst.dist2_neighbors(chosen) {
            if !is_colored[w] { needs_update[w] = true; }
        }
        if let Some(pos) = uncolored.iter().position(|&v| v == chosen) {
            uncolored.swap_remove(pos);
        }
    }
    Ok(sol)
}

/** redistributes the alpha probabilities proportionally to the average
quality observed during the block. Alphas unused in the block average to 0.
If no alpha accumulated any quality, the distribution is left unchanged. */
fn update_probabilities(
    probabilities: &mut [f64], block_quality: &[f64], block_usage: &[usize],
) {
    let nb_alphas = probabilities.len();
    let mut avg_quality = vec![0.0; nb_alphas];
    for i in 0..nb_alphas {
        if block_usage[i] > 0 {
            avg_quality[i] = block_quality[i] / block_usage[i] as f64;
        }
    }
    let sum_quality: f64 = avg_quality.iter().sum();
    if sum_quality > 0.0 {
        for (prob, avg) in probabilities.iter_mut().zip(avg_quality.iter()) {
            *prob = avg / sum_quality;
        }
    }
}

/// draws an index from a categorical distribution (cumulative inversion)
fn sample_index(probabilities: &[f64], rng: &mut Rng) -> usize {
    let draw = rng.f64();
    let mut cumulative = 0.0;
    for (i, prob) in probabilities.iter().enumerate() {
        cumulative += prob;
        if draw < cumulative { return i; }
    }
    probabilities.len() - 1 // rounding fallback
}

/** reactive GRASP orchestrator.

Maintains a categorical probability over the candidate alphas, initialized
uniform. Each iteration samples one alpha, builds a solution with the
incremental constructor, and credits the sampled alpha with
`quality = 1/(1 + max_color)`. Every block_size iterations the probabilities
are redistributed proportionally to the average quality per alpha and the
block accumulators reset. The overall best solution gets a bounded local
search at the end. */
pub fn reactive_grasp(
    inst: &Graph, params: &LpqParams,
    alphas: &[f64], nb_iterations: usize, block_size: usize, seed: u64,
) -> Result<ReactiveResult> {
    if alphas.is_empty() {
        return Err(anyhow!("reactive grasp: empty alpha candidate list"));
    }
    let mut rng = Rng::with_seed(seed);
    let nb_alphas = alphas.len();
    let mut probabilities = vec![1.0 / nb_alphas as f64; nb_alphas];
    let mut block_quality = vec![0.0; nb_alphas];
    let mut block_usage = vec![0_usize; nb_alphas];
    let mut iterations_in_block = 0;
    let mut best: Option<LpqSolution> = None;
    let mut total_max: usize = 0;
    for _ in 0..nb_iterations {
        let alpha_index = sample_index(&probabilities, &mut rng);
        let sol = build_solution_incremental(inst, params, alphas[alpha_index], &mut rng)?;
        let quality = 1.0 / (1.0 + sol.max_color as f64);
        block_quality[alpha_index] += quality;
        block_usage[alpha_index] += 1;
        iterations_in_block += 1;
        total_max += sol.max_color;
        let is_better = match &best {
            None => true,
            Some(b) => sol.max_color < b.max_color,
        };
        if is_better { best = Some(sol); }
        if iterations_in_block >= block_size {
            update_probabilities(&mut probabilities, &block_quality, &block_usage);
            block_quality.iter_mut().for_each(|x| *x = 0.0);
            block_usage.iter_mut().for_each(|x| *x = 0);
            iterations_in_block = 0;
        }
    }
    let best_sol = best.ok_or_else(|| anyhow!("reactive grasp: zero iterations requested"))?;
    let improved = local_search(inst, params, best_sol, REACTIVE_LS_PASSES);
    let best_alpha_index = probabilities.iter().enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);
    Ok(ReactiveResult {
        solution: improved,
        avg_max_color: total_max as f64 / nb_iterations as f64,
        probabilities,
        best_alpha: alphas[best_alpha_index],
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::checker;
    use crate::search::grasp::build_solution;

    fn prism() -> Graph {
        Graph::from_edges(6, &[
            (0,1),(1,2),(2,0),(3,4),(4,5),(5,3),(0,3),(1,4),(2,5),
        ])
    }

    #[test]
    fn test_incremental_matches_full_recomputation() {
        // same random stream -> identical draws -> identical solutions
        let inst = prism();
        let params = LpqParams { p:2, q:1 };
        for seed in 0..20 {
            let mut rng_full = Rng::with_seed(seed);
            let mut rng_incr = Rng::with_seed(seed);
            let full = build_solution(&inst, &params, 0.4, &mut rng_full).unwrap();
            let incremental =
                build_solution_incremental(&inst, &params, 0.4, &mut rng_incr).unwrap();
            assert_eq!(full, incremental);
        }
    }

    #[test]
    fn test_update_probabilities_proportional() {
        let mut probabilities = vec![0.5, 0.5];
        // alpha 0: avg quality 0.2 ; alpha 1: avg quality 0.6
        update_probabilities(&mut probabilities, &[0.4, 0.6], &[2, 1]);
        assert!((probabilities[0] - 0.25).abs() < 1e-9);
        assert!((probabilities[1] - 0.75).abs() < 1e-9);
        assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_probabilities_zero_quality_keeps_distribution() {
        let mut probabilities = vec![0.3, 0.7];
        update_probabilities(&mut probabilities, &[0.0, 0.0], &[0, 0]);
        assert_eq!(probabilities, vec![0.3, 0.7]);
    }

    #[test]
    fn test_update_probabilities_unused_alpha_drops_to_zero() {
        let mut probabilities = vec![0.5, 0.5];
        update_probabilities(&mut probabilities, &[0.5, 0.0], &[1, 0]);
        assert_eq!(probabilities, vec![1.0, 0.0]);
    }

    #[test]
    fn test_sample_index_degenerate_distribution() {
        let mut rng = Rng::with_seed(11);
        for _ in 0..50 {
            assert_eq!(sample_index(&[0.0, 1.0, 0.0], &mut rng), 1);
        }
    }

    #[test]
    fn test_reactive_deterministic_given_seed() {
        let inst = prism();
        let params = LpqParams { p:2, q:1 };
        let alphas = [0.1, 0.3, 0.5];
        let r1 = reactive_grasp(&inst, &params, &alphas, 60, 15, 777).unwrap();
        let r2 = reactive_grasp(&inst, &params, &alphas, 60, 15, 777).unwrap();
        assert_eq!(r1.solution, r2.solution);
        assert_eq!(r1.probabilities, r2.probabilities);
        assert_eq!(r1.best_alpha, r2.best_alpha);
    }

    #[test]
    fn test_reactive_output_is_valid() {
        let inst = prism();
        let params = LpqParams { p:3, q:2 };
        let alphas = [0.1, 0.3, 0.5];
        let result = reactive_grasp(&inst, &params, &alphas, 45, 15, 5).unwrap();
        assert!(checker(&inst, &params, &result.solution).is_ok());
        // the probability state is a distribution over the candidates
        assert_eq!(result.probabilities.len(), alphas.len());
        assert!((result.probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(alphas.contains(&result.best_alpha));
    }

    #[test]
    fn test_reactive_empty_alphas_is_an_error() {
        let inst = prism();
        let params = LpqParams { p:2, q:1 };
        assert!(reactive_grasp(&inst, &params, &[], 10, 5, 0).is_err());
    }
}
