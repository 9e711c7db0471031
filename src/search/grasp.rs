use anyhow::{anyhow, Result};
use fastrand::Rng;
use ordered_float::OrderedFloat;

use crate::color::{LpqParams, LpqSolution, VertexId};
use crate::eval::{construction_cost, smallest_feasible_color};
use crate::graph::Graph;
use crate::search::local_search::local_search;

/// cost/vertex pairs, sortable (ties broken by vertex id)
pub type VertexCost = (OrderedFloat<f64>, VertexId);

/// number of local search passes applied to the best GRASP solution
const GRASP_LS_PASSES: usize = 50;

/** result of a multi-start search: the best solution found plus the mean
maximum color over the individual constructions (before local search). */
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// best solution found (after local search)
    pub solution: LpqSolution,
    /// mean construction maximum color over the iterations
    pub avg_max_color: f64,
}

/** draws one vertex from the restricted candidate list.

`costs` must be sorted ascending. The RCL is the contiguous sorted prefix of
vertices whose cost is at most `min + alpha·(max − min)`, and the draw is
uniform within it. alpha = 0 restricts the draw to the minimum-cost vertices;
alpha = 1 makes it uniform over every candidate. */
pub fn select_from_rcl(costs: &[VertexCost], alpha: f64, rng: &mut Rng) -> VertexId {
    let min_cost = costs[0].0.into_inner();
    let max_cost = costs[costs.len() - 1].0.into_inner();
    let threshold = min_cost + alpha * (max_cost - min_cost);
    let mut rcl_len = 0;
    for (cost, _) in costs {
        // sorted, so the first cost above the threshold ends the RCL
        if cost.into_inner() <= threshold { rcl_len += 1; } else { break; }
    }
    costs[rng.usize(0..rcl_len)].1
}

/** one randomized greedy construction.

Repeats until every vertex is colored: compute the construction cost of every
uncolored vertex, sort ascending, draw one from the RCL, assign it its
smallest feasible color, and drop it from the uncolored set (O(1) by swapping
with the last element). */
pub fn build_solution(
    inst: &Graph, params: &LpqParams, alpha: f64, rng: &mut Rng,
) -> Result<LpqSolution> {
    let n = inst.nb_vertices();
    let mut sol = LpqSolution::new(n);
    let mut uncolored: Vec<VertexId> = (0..n).collect();
    while !uncolored.is_empty() {
        let mut costs: Vec<VertexCost> = Vec::with_capacity(uncolored.len());
        for &v in &uncolored {
            let cost = construction_cost(inst, params, v, &sol.colors)
                .ok_or_else(|| anyhow!("construction: no feasible color for vertex {}", v))?;
            costs.push((OrderedFloat(cost), v));
        }
        costs.sort();
        let chosen = select_from_rcl(&costs, alpha, rng);
        let c = smallest_feasible_color(inst, params, chosen, &sol.colors)
            .ok_or_else(|| anyhow!("construction: no feasible color for vertex {}", chosen))?;
        sol.assign(chosen, c);
        if let Some(pos) = uncolored.iter().position(|&v| v == chosen) {
            uncolored.swap_remove(pos);
        }
    }
    Ok(sol)
}

/** GRASP orchestrator: nb_iterations independent randomized constructions,
keeping the one with the smallest maximum color (the first one wins ties),
then a bounded local search on that best only. The same seed reproduces the
same result. */
pub fn grasp(
    inst: &Graph, params: &LpqParams,
    alpha: f64, nb_iterations: usize, seed: u64,
) -> Result<SearchResult> {
    let mut rng = Rng::with_seed(seed);
    let mut best: Option<LpqSolution> = None;
    let mut total_max: usize = 0;
    for _ in 0..nb_iterations {
        let sol = build_solution(inst, params, alpha, &mut rng)?;
        total_max += sol.max_color;
        let is_better = match &best {
            None => true,
            Some(b) => sol.max_color < b.max_color,
        };
        if is_better { best = Some(sol); }
    }
    let best_sol = best.ok_or_else(|| anyhow!("grasp: zero iterations requested"))?;
    let improved = local_search(inst, params, best_sol, GRASP_LS_PASSES);
    Ok(SearchResult {
        solution: improved,
        avg_max_color: total_max as f64 / nb_iterations as f64,
    })
}
