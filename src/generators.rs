use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::graph::{Graph, VertexId};

/** Erdős–Rényi G(n,p) graph: each pair is an edge with probability p.
The same seed always produces the same graph.

# Panics
 - if p is not in [0, 1]
*/
pub fn random_graph(n:usize, p:f64, seed:u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u+1..n {
            if rng.gen_bool(p) { edges.push((u,v)); }
        }
    }
    build_valid(n, &edges)
}

/// complete graph K_n
pub fn complete_graph(n:usize) -> Graph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u+1..n { edges.push((u,v)); }
    }
    build_valid(n, &edges)
}

/// path 0 - 1 - ... - (n-1)
pub fn path_graph(n:usize) -> Graph {
    let edges:Vec<(VertexId,VertexId)> = (1..n).map(|v| (v-1, v)).collect();
    build_valid(n, &edges)
}

/// cycle 0 - 1 - ... - (n-1) - 0 (n >= 3)
pub fn cycle_graph(n:usize) -> Graph {
    let edges:Vec<(VertexId,VertexId)> = (0..n).map(|v| (v, (v+1) % n)).collect();
    build_valid(n, &edges)
}

/// edges generated above are always in range
fn build_valid(n:usize, edges:&[(VertexId,VertexId)]) -> Graph {
    match Graph::build(n, edges) {
        Ok(g) => g,
        Err(e) => unreachable!("generated an invalid graph: {}", e),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_is_seeded() {
        let g1 = random_graph(12, 0.5, 42);
        let g2 = random_graph(12, 0.5, 42);
        assert_eq!(g1.edges(), g2.edges());
        assert_eq!(random_graph(12, 0., 1).nb_edges(), 0);
        assert_eq!(random_graph(12, 1., 1).nb_edges(), 66);
    }

    #[test]
    #[should_panic]
    fn test_random_graph_invalid_probability() {
        random_graph(3, 1.5, 0);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(complete_graph(5).nb_edges(), 10);
        assert_eq!(path_graph(5).nb_edges(), 4);
        assert_eq!(path_graph(0).nb_vertices(), 0);
        assert_eq!(cycle_graph(5).nb_edges(), 5);
        assert!(cycle_graph(5).are_adjacent(4, 0));
    }
}
