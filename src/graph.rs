use bit_set::BitSet;
use log::{info, warn};

use crate::error::GraphError;

/** Vertex Id */
pub type VertexId = usize;

/** models an undirected graph over the vertices 0..n-1.
Built once from an edge list, read-only afterwards.
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// edges of the graph (u < v, each edge stored once)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: sorted list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}


impl Graph {

    /** builds a graph with n vertices from an edge list.
    Duplicated edges are ignored, self-loops are dropped.

    # Errors
    - `InvalidEdge` if an endpoint is not in [0, n)
    */
    pub fn build(n:usize, edge_list:&[(VertexId,VertexId)]) -> Result<Self, GraphError> {
        let mut adj_matrix = vec![BitSet::default(); n];
        let mut edges = Vec::new();
        for &(u,v) in edge_list {
            if u >= n || v >= n {
                return Err(GraphError::InvalidEdge { u, v, n });
            }
            if u == v {
                warn!("self-loop on vertex {} ignored", u);
                continue;
            }
            if adj_matrix[u].insert(v) { // first time this edge is seen
                adj_matrix[v].insert(u);
                edges.push((u.min(v), u.max(v)));
            }
        }
        let adj_list = adj_matrix.iter()
            .map(|row| row.iter().collect())
            .collect();
        Ok(Self { n, edges, adj_list, adj_matrix })
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of (distinct) edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// vertex ids of the graph
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /// sorted list of vertices adjacent to u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// bitset of the vertices adjacent to u
    pub fn neighbor_set(&self, u:VertexId) -> &BitSet { &self.adj_matrix[u] }

    /// number of neighbors of u
    pub fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    /// returns if a and b are adjacent (O(1), false if a == b)
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// logs statistics of the graph
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees = self.vertices().map(|i| self.degree(i));
        if let (Some(min), Some(max)) = (degrees.clone().min(), degrees.max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_square() {
        let g = Graph::build(4, &[(0,1), (1,3), (3,2), (2,0)]).unwrap();
        assert_eq!(g.nb_vertices(), 4);
        assert_eq!(g.nb_edges(), 4);
        assert_eq!(g.neighbors(0), &[1,2]);
        assert_eq!(g.neighbors(3), &[1,2]);
        assert!(g.are_adjacent(2, 0));
        assert!(!g.are_adjacent(0, 3));
    }

    #[test]
    fn test_duplicate_edges() {
        let g = Graph::build(3, &[(0,1), (1,0), (0,1), (1,2)]).unwrap();
        assert_eq!(g.nb_edges(), 2);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.edges(), &[(0,1), (1,2)]);
    }

    #[test]
    fn test_self_loop_ignored() {
        let g = Graph::build(2, &[(1,1), (0,1)]).unwrap();
        assert!(!g.are_adjacent(1, 1));
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn test_invalid_edge() {
        assert_eq!(
            Graph::build(3, &[(0,1), (2,3)]).unwrap_err(),
            GraphError::InvalidEdge { u:2, v:3, n:3 }
        );
        assert!(Graph::build(0, &[(0,0)]).is_err());
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::build(0, &[]).unwrap();
        assert_eq!(g.nb_vertices(), 0);
        assert_eq!(g.vertices().count(), 0);
        g.display_statistics();
    }
}
