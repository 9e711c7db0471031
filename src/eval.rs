use crate::color::{Color, LpqParams, VertexId};
use crate::graph::Graph;

/** safety bound on the smallest-feasible-color scan. A vertex that cannot be
colored below this bound is reported as a failure (None), never as a color. */
pub const COLOR_BOUND: Color = 10_000;

/** returns true iff vertex v may take color c given the partial coloring:
every colored direct neighbor must be at least p away, every colored
distance-2 neighbor at least q away. Unassigned neighbors impose nothing. */
pub fn is_feasible(
    inst: &Graph, params: &LpqParams,
    v: VertexId, c: Color, colors: &[Option<Color>],
) -> bool {
    for &u in inst.neighbors(v) {
        if let Some(cu) = colors[u] {
            if c.abs_diff(cu) < params.p { return false; }
        }
    }
    for w in inst.dist2_neighbors(v) {
        if let Some(cw) = colors[w] {
            if c.abs_diff(cw) < params.q { return false; }
        }
    }
    true
}

/** scans colors from 0 upward and returns the first feasible one for v.
Returns None if no feasible color exists below [`COLOR_BOUND`]. */
pub fn smallest_feasible_color(
    inst: &Graph, params: &LpqParams,
    v: VertexId, colors: &[Option<Color>],
) -> Option<Color> {
    (0..COLOR_BOUND).find(|&c| is_feasible(inst, params, v, c, colors))
}

/** saturation degree of v: number of already-colored vertices among its
direct and distance-2 neighbors. Used as a tie-breaking signal only. */
pub fn saturation_degree(inst: &Graph, v: VertexId, colors: &[Option<Color>]) -> usize {
    let direct = inst.neighbors(v).iter()
        .filter(|&&u| colors[u].is_some()).count();
    let dist2 = inst.dist2_neighbors(v)
        .filter(|&w| colors[w].is_some()).count();
    direct + dist2
}

/** construction cost of v: `100·smallest_feasible_color − saturation_degree`
(lower is better). The factor 100 makes the color the dominant term; the
saturation degree only breaks ties among vertices that would receive the same
color. Returns None when the color scan is exhausted. */
pub fn construction_cost(
    inst: &Graph, params: &LpqParams,
    v: VertexId, colors: &[Option<Color>],
) -> Option<f64> {
    let c = smallest_feasible_color(inst, params, v, colors)?;
    Some(c as f64 * 100.0 - saturation_degree(inst, v, colors) as f64)
}
