use bit_set::BitSet;

use crate::graph::{Graph, VertexId};

/// largest graph accepted by the brute force enumeration
pub const BRUTE_FORCE_MAX_VERTICES:usize = 20;

/** result of a clique check */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid maximal clique of the given size
    Ok(usize),
    /// vertex id not in [0, n)
    InvalidVertex(VertexId),
    /// vertex present twice
    DuplicateVertex(VertexId),
    /// two members are not adjacent
    NotAClique(VertexId, VertexId),
    /// the vertex could be added to the clique
    NotMaximal(VertexId),
}

/** checks that clique is a maximal clique of graph */
pub fn check_clique(graph:&Graph, clique:&[VertexId]) -> CheckerResult {
    let mut members = BitSet::new();
    for v in clique {
        if *v >= graph.nb_vertices() { return CheckerResult::InvalidVertex(*v); }
        if !members.insert(*v) { return CheckerResult::DuplicateVertex(*v); }
    }
    for (i,u) in clique.iter().enumerate() {
        for v in &clique[i+1..] {
            if !graph.are_adjacent(*u, *v) { return CheckerResult::NotAClique(*u, *v); }
        }
    }
    // a vertex adjacent to every member would extend the clique
    for w in graph.vertices().filter(|w| !members.contains(*w)) {
        if clique.iter().all(|v| graph.are_adjacent(*v, w)) {
            return CheckerResult::NotMaximal(w);
        }
    }
    CheckerResult::Ok(clique.len())
}

/** enumerates the maximal cliques by checking every subset of vertices (sorted cliques,
in increasing order of their bitmask). Only meant to validate the searches on small graphs.

# Panics
 - if the graph has more than BRUTE_FORCE_MAX_VERTICES vertices
*/
pub fn brute_force_maximal_cliques(graph:&Graph) -> Vec<Vec<VertexId>> {
    let n = graph.nb_vertices();
    assert!(n <= BRUTE_FORCE_MAX_VERTICES, "brute force on {} vertices", n);
    let adj_masks:Vec<u32> = graph.vertices()
        .map(|v| graph.neighbors(v).iter().fold(0u32, |acc,u| acc | (1u32 << *u)))
        .collect();
    let mut res = Vec::new();
    for mask in 0..(1u32 << n) {
        let members:Vec<VertexId> = (0..n).filter(|v| mask & (1u32 << *v) != 0).collect();
        let is_clique = members.iter()
            .all(|v| mask & !(1u32 << *v) & !adj_masks[*v] == 0);
        let is_maximal = (0..n)
            .filter(|w| mask & (1u32 << *w) == 0)
            .all(|w| mask & !adj_masks[w] != 0);
        if is_clique && is_maximal {
            res.push(members);
        }
    }
    res
}
