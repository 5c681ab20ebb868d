use crate::error::SearchError;
use crate::graph::VertexId;
use crate::set_algebra::{intersect_neighbors, remove_vertex};
use crate::sink::CliqueSink;

use super::stopping::StoppingCriterion;
use super::SearchContext;

/**
Bron–Kerbosch without pivot.
 - r: current clique (in insertion order)
 - p: candidates, common neighbors of r not tried yet
 - x: vertices already explored with r, common neighbors of r

r is reported iff p and x are both empty. Every vertex of p is then tried in turn;
once its branch is over it moves from p to x so that later siblings do not report
the same cliques again.
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
        ctx.report(&r);
    }
    // p is modified in the loop: iterate over the candidates at loop entry
    let candidates = p.clone();
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
    use crate::graph::Graph;
    use crate::search::{maximal_cliques, Variant};

    #[test]
    fn test_triangle() {
        let g = Graph::build(3, &[(0,1), (1,2), (0,2)]).unwrap();
        assert_eq!(maximal_cliques(&g, Variant::Naive), vec![vec![0,1,2]]);
    }

    #[test]
    fn test_path_insertion_order() {
        let g = Graph::build(4, &[(0,1), (1,2), (2,3)]).unwrap();
        assert_eq!(
            maximal_cliques(&g, Variant::Naive),
            vec![vec![0,1], vec![1,2], vec![2,3]]
        );
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::build(4, &[]).unwrap();
        assert_eq!(
            maximal_cliques(&g, Variant::Naive),
            vec![vec![0], vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn test_square_with_diagonal() {
        let g = Graph::build(4, &[(0,1), (1,2), (2,3), (3,0), (0,2)]).unwrap();
        assert_eq!(maximal_cliques(&g, Variant::Naive), vec![vec![0,1,2], vec![0,2,3]]);
    }
}
