use crate::color::{LpqParams, LpqSolution};
use crate::eval::is_feasible;
use crate::graph::Graph;

/** descent local search shrinking the maximum color used.

Repeats up to nb_passes full passes: every vertex whose color is at least 70%
of the current maximum gets the first strictly smaller feasible color found
(first-improvement). The global maximum is then recomputed by a full scan.
Stops early when a pass brings no improvement. There is no escape from local
optima (no tabu, no acceptance of worsening moves), and the maximum color
never increases. */
pub fn local_search(
    inst: &Graph, params: &LpqParams,
    mut sol: LpqSolution, nb_passes: usize,
) -> LpqSolution {
    let n = inst.nb_vertices();
    let mut improved = true;
    let mut pass = 0;
    while improved && pass < nb_passes {
        improved = false;
        pass += 1;
        for v in 0..n {
            let current = match sol.colors[v] {
                Some(c) => c,
                None => continue,
            };
            // only vertices using a high color are worth recoloring
            if (current as f64) < sol.max_color as f64 * 0.7 { continue; }
            for c in 0..current {
                if is_feasible(inst, params, v, c, &sol.colors) {
                    sol.colors[v] = Some(c);
                    let new_max = sol.colors.iter().filter_map(|&x| x).max().unwrap_or(0);
                    if new_max < sol.max_color {
                        sol.max_color = new_max;
                        improved = true;
                    }
                    break;
                }
            }
        }
    }
    sol
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::checker;
    use crate::search::greedy::greedy;

    #[test]
    fn test_never_increases_max_color() {
        let inst = Graph::from_edges(6, &[(0,1),(1,2),(2,3),(3,4),(4,5),(5,0),(0,3)]);
        let params = LpqParams { p:2, q:1 };
        let sol = greedy(&inst, &params).unwrap();
        let before = sol.max_color;
        let improved_sol = local_search(&inst, &params, sol, 50);
        assert!(improved_sol.max_color <= before);
        assert!(checker(&inst, &params, &improved_sol).is_ok());
    }

    #[test]
    fn test_shrinks_wasteful_coloring() {
        // independent pair colored absurdly high: both can drop to color 0..q
        let inst = Graph::from_edges(3, &[(0,1),(1,2)]);
        let params = LpqParams { p:1, q:1 };
        let sol = LpqSolution {
            colors: vec![Some(9), Some(5), Some(7)],
            max_color: 9,
        };
        let improved_sol = local_search(&inst, &params, sol, 50);
        assert!(improved_sol.max_color < 9);
        assert!(checker(&inst, &params, &improved_sol).is_ok());
    }

    #[test]
    fn test_zero_passes_is_identity() {
        let inst = Graph::from_edges(2, &[(0,1)]);
        let params = LpqParams { p:2, q:1 };
        let sol = LpqSolution { colors: vec![Some(0), Some(9)], max_color: 9 };
        let unchanged = local_search(&inst, &params, sol.clone(), 0);
        assert_eq!(unchanged, sol);
    }
}
