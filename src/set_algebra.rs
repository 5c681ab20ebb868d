use crate::graph::{Graph, VertexId};

/** returns the elements of set adjacent to v, in the order of set. */
pub fn intersect_neighbors(set:&[VertexId], graph:&Graph, v:VertexId) -> Vec<VertexId> {
    let neighbors = graph.neighbor_set(v);
    set.iter().copied().filter(|u| neighbors.contains(*u)).collect()
}

/** returns the elements of set that are not adjacent to u, in the order of set.
u itself is kept if it belongs to set (a vertex is not its own neighbor).
*/
pub fn without_neighbors(set:&[VertexId], graph:&Graph, u:VertexId) -> Vec<VertexId> {
    let neighbors = graph.neighbor_set(u);
    set.iter().copied().filter(|v| !neighbors.contains(*v)).collect()
}

/** removes the first occurrence of v from set, preserving the order of the others.
returns true if v was present.
*/
pub fn remove_vertex(set:&mut Vec<VertexId>, v:VertexId) -> bool {
    match set.iter().position(|u| *u == v) {
        None => false,
        Some(i) => { set.remove(i); true }
    }
}

/** iterates over p then x (the iteration order used for pivot tie-breaks). */
pub fn union_order<'a>(p:&'a [VertexId], x:&'a [VertexId]) -> impl Iterator<Item=VertexId> + 'a {
    p.iter().chain(x.iter()).copied()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph {
        // 0 is the center, 1..4 leaves, plus 3-4
        Graph::build(5, &[(0,1), (0,2), (0,3), (0,4), (3,4)]).unwrap()
    }

    #[test]
    fn test_intersect_keeps_order() {
        let g = star();
        assert_eq!(intersect_neighbors(&[4,2,0,3], &g, 0), vec![4,2,3]);
        assert_eq!(intersect_neighbors(&[4,2,0,3], &g, 3), vec![4,0]);
        assert!(intersect_neighbors(&[], &g, 0).is_empty());
    }

    #[test]
    fn test_without_neighbors() {
        let g = star();
        assert_eq!(without_neighbors(&[0,1,2,3,4], &g, 0), vec![0]);
        assert_eq!(without_neighbors(&[0,1,2,3,4], &g, 3), vec![1,2,3]);
    }

    #[test]
    fn test_remove_vertex() {
        let mut s = vec![3,1,2];
        assert!(remove_vertex(&mut s, 1));
        assert_eq!(s, vec![3,2]);
        assert!(!remove_vertex(&mut s, 1));
        assert_eq!(s, vec![3,2]);
    }

    #[test]
    fn test_union_order() {
        let res:Vec<VertexId> = union_order(&[2,0], &[1]).collect();
        assert_eq!(res, vec![2,0,1]);
    }
}
