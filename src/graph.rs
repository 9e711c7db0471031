use anyhow::Result;
use bit_set::BitSet;

use crate::color::VertexId;
use crate::dimacs::read_from_file;

/** models an undirected graph with precomputed distance-2 neighborhoods.

The adjacency lists are deduplicated and symmetric (adding edge (u,v) inserts
v into u's list and u into v's list). `dist2[v]` contains the vertices
reachable through exactly one intermediate neighbor, excluding v itself and
excluding direct neighbors of v. It is derived once, in the constructor; the
graph is read-only afterwards, which is what makes distance-2 constraint
checks O(1) set tests instead of graph traversals. */
#[derive(Debug)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[v]: list of vertices adjacent to v
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[v]: bitset of the neighbors of v
    adj_matrix: Vec<BitSet>,
    /// dist2[v]: bitset of the vertices at distance exactly 2 from v
    dist2: Vec<BitSet>,
}

impl Graph {

    /** constructor using an adjacency list (assumed symmetric, deduplicated,
    without self-loops). Computes the adjacency matrix and the distance-2
    neighborhoods. */
    pub fn new(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        // adjacency matrix
        let mut adj_matrix = vec![BitSet::with_capacity(n); n];
        for (v, matrix_v) in adj_matrix.iter_mut().enumerate() {
            for &u in &adj_list[v] { matrix_v.insert(u); }
        }
        // distance-2 neighborhoods: union of the neighbors of each neighbor,
        // minus v itself and the direct neighbors of v
        let mut dist2 = vec![BitSet::with_capacity(n); n];
        for (v, dist2_v) in dist2.iter_mut().enumerate() {
            for &u in &adj_list[v] {
                for &w in &adj_list[u] {
                    if w != v && !adj_matrix[v].contains(w) {
                        dist2_v.insert(w);
                    }
                }
            }
        }
        Self { n, m, adj_list, adj_matrix, dist2 }
    }

    /** builds a graph over n vertices from an edge list. Self-loops,
    out-of-range endpoints and duplicate edges are warned about and skipped
    (the graph is still built from the remaining edges). */
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Self {
        let mut adj_list = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n || v >= n || u == v {
                eprintln!("warning: ignoring invalid edge ({},{})", u, v);
                continue;
            }
            if !adj_list[u].contains(&v) { adj_list[u].push(v); }
            if !adj_list[v].contains(&u) { adj_list[v].push(u); }
        }
        Self::new(adj_list)
    }

    /// creates a graph from a DIMACS file
    pub fn from_file(filename: &str) -> Result<Self> {
        let (_, _, adj_list) = read_from_file(filename)?;
        Ok(Self::new(adj_list))
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex v
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] { &self.adj_list[v] }

    /// degree of vertex v
    pub fn degree(&self, v: VertexId) -> usize { self.adj_list[v].len() }

    /// returns true iff u and v are adjacent (O(1) through the adjacency matrix)
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    /// iterates over the vertices at distance exactly 2 from v (ascending ids)
    pub fn dist2_neighbors(&self, v: VertexId) -> impl Iterator<Item=VertexId> + '_ {
        self.dist2[v].iter()
    }

    /// number of vertices at distance exactly 2 from v
    pub fn nb_dist2_neighbors(&self, v: VertexId) -> usize { self.dist2[v].len() }

    /// returns true iff w is at distance exactly 2 from v
    pub fn at_distance2(&self, v: VertexId, w: VertexId) -> bool {
        self.dist2[v].contains(w)
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees: Vec<usize> = (0..self.n).map(|v| self.degree(v)).collect();
        println!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        println!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
        let nb_dist2: usize = (0..self.n).map(|v| self.nb_dist2_neighbors(v)).sum();
        println!("\t{} \t distance-2 pairs", nb_dist2 / 2);
    }
}
