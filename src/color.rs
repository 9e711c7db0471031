use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Color (non-negative label assigned to a vertex) */
pub type Color = usize;

/** parameters of an L(p,q)-labeling:
minimum gap p between adjacent vertices,
minimum gap q between vertices at distance 2. */
#[derive(Debug, Clone, Copy)]
pub struct LpqParams {
    /// minimum color gap across an edge
    pub p: usize,
    /// minimum color gap across a distance-2 pair
    pub q: usize,
}

/** Solution of an L(p,q)-labeling problem.
Colors are filled incrementally during a construction;
an unassigned vertex has no color yet. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpqSolution {
    /// colors[v]: color assigned to vertex v (None if unassigned)
    pub colors: Vec<Option<Color>>,
    /// maximum assigned color (0 if nothing assigned)
    pub max_color: Color,
}

impl LpqSolution {
    /// creates an empty (fully unassigned) solution over n vertices
    pub fn new(n: usize) -> Self {
        Self { colors: vec![None; n], max_color: 0 }
    }

    /// assigns color c to vertex v, maintaining the maximum color
    pub fn assign(&mut self, v: VertexId, c: Color) {
        self.colors[v] = Some(c);
        if c > self.max_color { self.max_color = c; }
    }

    /// true iff every vertex has a color
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|c| c.is_some())
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.colors.len() }
}

/** result of checking a solution against the L(p,q) constraints. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the solution is valid; contains its maximum color
    Ok(Color),
    /// a vertex has no color
    UncoloredVertex(VertexId),
    /// two adjacent vertices closer than p
    ConflictP(VertexId, VertexId),
    /// two distance-2 vertices closer than q
    ConflictQ(VertexId, VertexId),
}

impl CheckerResult {
    /// true iff the check passed
    pub fn is_ok(&self) -> bool { matches!(self, CheckerResult::Ok(_)) }
}

/**
checks a solution against all L(p,q) constraints.
Reports the first uncolored vertex, or the first p/q violation found.
The check is advisory: algorithms always return a solution and the caller
decides what to do with an invalid one.
*/
pub fn checker(inst: &Graph, params: &LpqParams, sol: &LpqSolution) -> CheckerResult {
    let n = inst.nb_vertices();
    // check that all vertices are colored
    if let Some(v) = (0..n).find(|&v| sol.colors[v].is_none()) {
        return CheckerResult::UncoloredVertex(v);
    }
    // check the p constraint on every edge and the q constraint on every
    // distance-2 pair (each pair is seen twice; the first occurrence reports)
    for v in 0..n {
        let cv = sol.colors[v].unwrap();
        for &u in inst.neighbors(v) {
            let cu = sol.colors[u].unwrap();
            if cv.abs_diff(cu) < params.p {
                return CheckerResult::ConflictP(v, u);
            }
        }
        for w in inst.dist2_neighbors(v) {
            let cw = sol.colors[w].unwrap();
            if cv.abs_diff(cw) < params.q {
                return CheckerResult::ConflictQ(v, w);
            }
        }
    }
    CheckerResult::Ok(sol.max_color)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> Graph {
        Graph::from_edges(4, &[(0,1),(1,2),(2,3)])
    }

    #[test]
    fn test_checker_valid() {
        let inst = path4();
        let params = LpqParams { p:2, q:1 };
        let sol = LpqSolution {
            colors: vec![Some(3), Some(0), Some(2), Some(4)],
            max_color: 4,
        };
        assert_eq!(checker(&inst, &params, &sol), CheckerResult::Ok(4));
    }

    #[test]
    fn test_checker_uncolored() {
        let inst = path4();
        let params = LpqParams { p:2, q:1 };
        let sol = LpqSolution::new(4);
        assert_eq!(checker(&inst, &params, &sol), CheckerResult::UncoloredVertex(0));
    }

    #[test]
    fn test_checker_p_violation() {
        let inst = path4();
        let params = LpqParams { p:2, q:1 };
        // vertices 0 and 1 are adjacent but only 1 apart
        let sol = LpqSolution {
            colors: vec![Some(0), Some(1), Some(3), Some(5)],
            max_color: 5,
        };
        assert_eq!(checker(&inst, &params, &sol), CheckerResult::ConflictP(0, 1));
    }

    #[test]
    fn test_checker_q_violation() {
        let inst = path4();
        let params = LpqParams { p:2, q:2 };
        // vertices 0 and 2 are at distance 2 but only 1 apart
        let sol = LpqSolution {
            colors: vec![Some(3), Some(0), Some(2), Some(4)],
            max_color: 4,
        };
        assert_eq!(checker(&inst, &params, &sol), CheckerResult::ConflictQ(0, 2));
    }

    #[test]
    fn test_assign_updates_max() {
        let mut sol = LpqSolution::new(3);
        assert_eq!(sol.max_color, 0);
        sol.assign(1, 5);
        sol.assign(0, 2);
        assert_eq!(sol.max_color, 5);
        assert!(!sol.is_complete());
        sol.assign(2, 0);
        assert!(sol.is_complete());
    }
}
