//! Bron–Kerbosch enumeration of the maximal cliques of a graph.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::error::SearchError;
use crate::graph::{Graph, VertexId};
use crate::sink::{CliqueCollector, CliqueSink};

/// stopping criteria (time limit, cancellation)
pub mod stopping;

/// Bron–Kerbosch without pivot
pub mod naive;

/// Bron–Kerbosch with a maximum degree pivot
pub mod pivot;

use stopping::{NeverStoppingCriterion, StoppingCriterion};


/** search variant */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all="lowercase")]
pub enum Variant {
    /// no pivot, cliques are reported in insertion order
    Naive,
    /// maximum degree pivot, cliques are reported sorted
    Pivot,
}

impl fmt::Display for Variant {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Naive => write!(f, "naive"),
            Variant::Pivot => write!(f, "pivot"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s:&str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Variant::Naive),
            "pivot" => Ok(Variant::Pivot),
            _ => Err(format!("unknown variant '{}' (valid: 'naive', 'pivot')", s)),
        }
    }
}


/** statistics of a (complete) enumeration */
#[derive(Debug, Clone, Serialize)]
pub struct SearchStats {
    /// variant used
    pub variant: Variant,
    /// nb recursive calls
    pub nb_calls: u64,
    /// nb maximal cliques reported
    pub nb_cliques: usize,
    /// size of the largest maximal clique
    pub largest_clique: usize,
    /// seconds spent in the enumeration
    pub time_searched: f32,
}


/** state shared by the recursive calls of one enumeration */
pub(crate) struct SearchContext<'a, S:?Sized, C:?Sized> {
    pub(crate) graph: &'a Graph,
    sink: &'a mut S,
    stopping: &'a C,
    nb_calls: u64,
    nb_cliques: usize,
    largest_clique: usize,
}

impl<'a, S, C> SearchContext<'a, S, C>
where S:CliqueSink + ?Sized, C:StoppingCriterion + ?Sized {

    pub(crate) fn new(graph:&'a Graph, sink:&'a mut S, stopping:&'a C) -> Self {
        Self { graph, sink, stopping, nb_calls: 0, nb_cliques: 0, largest_clique: 0 }
    }

    /** registers a recursive call. Fails if the stopping criterion fired. */
    pub(crate) fn enter(&mut self) -> Result<(), SearchError> {
        self.nb_calls += 1;
        if self.stopping.is_finished() {
            debug!("stopping criterion reached after {} calls", self.nb_calls);
            return Err(SearchError::Cancelled { nb_cliques: self.nb_cliques });
        }
        Ok(())
    }

    /// hands a maximal clique to the sink
    pub(crate) fn report(&mut self, clique:&[VertexId]) {
        self.nb_cliques += 1;
        self.largest_clique = self.largest_clique.max(clique.len());
        self.sink.accept(clique);
    }

    fn into_stats(self, variant:Variant, time_searched:f32) -> SearchStats {
        SearchStats {
            variant,
            nb_calls: self.nb_calls,
            nb_cliques: self.nb_cliques,
            largest_clique: self.largest_clique,
            time_searched,
        }
    }
}


/** enumerates every maximal clique of graph, each one handed to sink once.

# Errors
 - `Cancelled` if the stopping criterion fires before completion
   (the cliques already reported stay in the sink)
*/
pub fn bron_kerbosch<S, C>(
    graph:&Graph,
    variant:Variant,
    sink:&mut S,
    stopping:&C,
) -> Result<SearchStats, SearchError>
where S:CliqueSink + ?Sized, C:StoppingCriterion + ?Sized {
    let t_start = Instant::now();
    let mut ctx = SearchContext::new(graph, sink, stopping);
    let candidates:Vec<VertexId> = graph.vertices().collect();
    match variant {
        Variant::Naive => naive::expand(&mut ctx, Vec::new(), candidates, Vec::new())?,
        Variant::Pivot => pivot::expand(&mut ctx, Vec::new(), candidates, Vec::new())?,
    }
    let stats = ctx.into_stats(variant, t_start.elapsed().as_secs_f32());
    debug!("{:?}", stats);
    Ok(stats)
}

/** returns all maximal cliques of graph (complete enumeration, discovery order). */
pub fn maximal_cliques(graph:&Graph, variant:Variant) -> Vec<Vec<VertexId>> {
    let mut collector = CliqueCollector::default();
    match bron_kerbosch(graph, variant, &mut collector, &NeverStoppingCriterion) {
        Ok(_) => {},
        Err(e) => unreachable!("a search without stopping criterion failed: {}", e),
    }
    collector.into_cliques()
}
