use std::cmp::Reverse;

use anyhow::{anyhow, Result};

use crate::color::{LpqParams, LpqSolution, VertexId};
use crate::eval::smallest_feasible_color;
use crate::graph::Graph;

/** deterministic greedy construction.

Orders all vertices once, descending by direct degree + distance-2 degree
(stable sort, so ties keep ascending vertex ids), then assigns each its
smallest feasible color. The order is static: it is NOT recomputed as
saturation changes, which keeps the output identical across runs.

Fails if some vertex admits no feasible color within the scan bound. */
pub fn greedy(inst: &Graph, params: &LpqParams) -> Result<LpqSolution> {
    let n = inst.nb_vertices();
    let mut sol = LpqSolution::new(n);
    let mut order: Vec<VertexId> = (0..n).collect();
    order.sort_by_key(|&v| Reverse(inst.degree(v) + inst.nb_dist2_neighbors(v)));
    for &v in &order {
        let c = smallest_feasible_color(inst, params, v, &sol.colors)
            .ok_or_else(|| anyhow!("greedy: no feasible color for vertex {}", v))?;
        sol.assign(v, c);
    }
    Ok(sol)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::checker;

    #[test]
    fn test_path4_exact_coloring() {
        // path 0-1-2-3, p=2, q=1. Total degrees: v1,v2 -> 3; v0,v3 -> 2,
        // so the static order is [1, 2, 0, 3]:
        //   v1 -> 0
        //   v2 -> 2   (p from v1)
        //   v0 -> 3   (p from v1 forbids 0..1, q from v2 forbids 2)
        //   v3 -> 4   (p from v2 forbids 1..3, q from v1 forbids 0)
        let inst = Graph::from_edges(4, &[(0,1),(1,2),(2,3)]);
        let params = LpqParams { p:2, q:1 };
        let sol = greedy(&inst, &params).unwrap();
        assert_eq!(sol.colors, vec![Some(3), Some(0), Some(2), Some(4)]);
        assert_eq!(sol.max_color, 4);
        assert!(checker(&inst, &params, &sol).is_ok());
    }

    #[test]
    fn test_greedy_is_deterministic() {
        let inst = Graph::from_edges(6, &[(0,1),(0,2),(1,2),(2,3),(3,4),(4,5),(5,0)]);
        let params = LpqParams { p:3, q:2 };
        let sol1 = greedy(&inst, &params).unwrap();
        let sol2 = greedy(&inst, &params).unwrap();
        assert_eq!(sol1, sol2);
        assert!(checker(&inst, &params, &sol1).is_ok());
    }

    #[test]
    fn test_greedy_valid_on_petersen_like() {
        // 3-regular graph: prism over 6 vertices
        let inst = Graph::from_edges(6, &[
            (0,1),(1,2),(2,0),(3,4),(4,5),(5,3),(0,3),(1,4),(2,5),
        ]);
        for &(p, q) in &[(1,1),(2,1),(3,2)] {
            let params = LpqParams { p, q };
            let sol = greedy(&inst, &params).unwrap();
            assert!(checker(&inst, &params, &sol).is_ok());
        }
    }

    #[test]
    fn test_greedy_exhaustion_is_an_error() {
        let inst = Graph::from_edges(2, &[(0,1)]);
        let params = LpqParams { p: crate::eval::COLOR_BOUND * 2, q: 1 };
        assert!(greedy(&inst, &params).is_err());
    }
}
