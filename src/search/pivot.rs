use crate::error::SearchError;
use crate::graph::{Graph, VertexId};
use crate::set_algebra::{intersect_neighbors, remove_vertex, union_order, without_neighbors};
use crate::sink::CliqueSink;

use super::stopping::StoppingCriterion;
use super::SearchContext;

/** chooses the pivot: the vertex of p ∪ x with the largest degree in the graph.
Ties are broken by the first vertex met when iterating over p, then over x.
Returns None if p and x are both empty.
*/
pub fn select_pivot(graph:&Graph, p:&[VertexId], x:&[VertexId]) -> Option<VertexId> {
    let mut best:Option<(VertexId, usize)> = None;
    for u in union_order(p, x) {
        let d = graph.degree(u);
        match best {
            Some((_, best_degree)) if best_degree >= d => {},
            _ => best = Some((u, d)),
        }
    }
    best.map(|(u,_)| u)
}

/**
Bron–Kerbosch with pivot.
Same as the naive variant, but only the candidates that are not adjacent to the pivot
are branched on: a maximal clique containing r contains either the pivot or one of
its non-neighbors. Cliques are reported with their vertices sorted.
*/
pub(crate) fn expand<S, C>(
    ctx:&mut SearchContext<'_, S, C>,
    r:Vec<VertexId>,
    mut p:Vec<VertexId>,
    mut x:Vec<VertexId>,
) -> Result<(), SearchError>
where S:CliqueSink + ?Sized, C:StoppingCriterion + ?Sized {
    ctx.enter()?;
    if p.is_empty() && x.is_empty() {
        let mut clique = r.clone();
        clique.sort_unstable();
        ctx.report(&clique);
    }
    let u = match select_pivot(ctx.graph, &p, &x) {
        None => return Ok(()),
        Some(u) => u,
    };
    let candidates = without_neighbors(&p, ctx.graph, u);
    for v in candidates {
        let mut next_r = r.clone();
        next_r.push(v);
        let next_p = intersect_neighbors(&p, ctx.graph, v);
        let next_x = intersect_neighbors(&x, ctx.graph, v);
        expand(ctx, next_r, next_p, next_x)?;
        remove_vertex(&mut p, v);
        x.push(v);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::{bron_kerbosch, maximal_cliques, Variant};
    use crate::search::stopping::NeverStoppingCriterion;
    use crate::sink::CliqueCollector;

    #[test]
    fn test_select_pivot_max_degree() {
        // 1 has degree 3, others less
        let g = Graph::build(4, &[(0,1), (1,2), (1,3)]).unwrap();
        assert_eq!(select_pivot(&g, &[0,2,3], &[1]), Some(1));
        assert_eq!(select_pivot(&g, &[0,2], &[3]), Some(0));
        assert_eq!(select_pivot(&g, &[], &[]), None);
    }

    #[test]
    fn test_select_pivot_tie_break() {
        // cycle: every vertex has degree 2
        let g = Graph::build(4, &[(0,1), (1,2), (2,3), (3,0)]).unwrap();
        assert_eq!(select_pivot(&g, &[2,0,1], &[3]), Some(2));
        assert_eq!(select_pivot(&g, &[], &[3,1]), Some(3));
        for _ in 0..10 {
            assert_eq!(select_pivot(&g, &[1,3], &[0]), Some(1));
        }
    }

    #[test]
    fn test_triangle() {
        let g = Graph::build(3, &[(0,1), (1,2), (0,2)]).unwrap();
        assert_eq!(maximal_cliques(&g, Variant::Pivot), vec![vec![0,1,2]]);
    }

    #[test]
    fn test_path() {
        let g = Graph::build(4, &[(0,1), (1,2), (2,3)]).unwrap();
        let mut res = maximal_cliques(&g, Variant::Pivot);
        res.sort();
        assert_eq!(res, vec![vec![0,1], vec![1,2], vec![2,3]]);
    }

    #[test]
    fn test_sorted_output() {
        // pivot 3 (degree 3) makes the search insert 3 before the smaller ids
        let g = Graph::build(4, &[(0,3), (1,3), (2,3), (0,1)]).unwrap();
        for clique in maximal_cliques(&g, Variant::Pivot) {
            let mut sorted = clique.clone();
            sorted.sort_unstable();
            assert_eq!(clique, sorted);
        }
    }

    #[test]
    fn test_fewer_calls_than_naive() {
        // complete graph K6: the pivot removes all branching
        let mut edges = Vec::new();
        for i in 0..6 { for j in i+1..6 { edges.push((i,j)); } }
        let g = Graph::build(6, &edges).unwrap();
        let mut c1 = CliqueCollector::default();
        let mut c2 = CliqueCollector::default();
        let naive = bron_kerbosch(&g, Variant::Naive, &mut c1, &NeverStoppingCriterion).unwrap();
        let pivot = bron_kerbosch(&g, Variant::Pivot, &mut c2, &NeverStoppingCriterion).unwrap();
        assert_eq!(c1.cliques(), c2.cliques());
        assert_eq!(pivot.nb_calls, 7);
        assert!(naive.nb_calls > pivot.nb_calls);
    }
}
