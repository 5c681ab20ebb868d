use std::io::Write;

use log::warn;

use crate::graph::VertexId;

/** receives each maximal clique as soon as it is discovered.
Implementations cannot abort the search: failures on the consumer side must be
handled (or ignored) inside `accept`.
*/
pub trait CliqueSink {
    /// called once per maximal clique
    fn accept(&mut self, clique:&[VertexId]);
}

impl<F> CliqueSink for F where F:FnMut(&[VertexId]) {
    fn accept(&mut self, clique:&[VertexId]) { self(clique) }
}


/** stores every clique in discovery order */
#[derive(Debug, Default, Clone)]
pub struct CliqueCollector {
    cliques: Vec<Vec<VertexId>>,
}

impl CliqueCollector {
    /// cliques found so far
    pub fn cliques(&self) -> &[Vec<VertexId>] { &self.cliques }

    /// consumes the collector
    pub fn into_cliques(self) -> Vec<Vec<VertexId>> { self.cliques }
}

impl CliqueSink for CliqueCollector {
    fn accept(&mut self, clique:&[VertexId]) { self.cliques.push(clique.to_vec()); }
}


/** counts the cliques and remembers the largest one */
#[derive(Debug, Default, Clone)]
pub struct CliqueCounter {
    /// nb cliques seen
    pub nb_cliques: usize,
    /// first clique of maximum size
    pub largest: Vec<VertexId>,
}

impl CliqueSink for CliqueCounter {
    fn accept(&mut self, clique:&[VertexId]) {
        self.nb_cliques += 1;
        if clique.len() > self.largest.len() {
            self.largest = clique.to_vec();
        }
    }
}


/** writes "<label> v1 v2 ..." for each clique.
Write errors are logged once and further output is dropped.
*/
#[derive(Debug)]
pub struct PrintSink<W:Write> {
    out: W,
    label: String,
    failed: bool,
}

impl<W:Write> PrintSink<W> {
    /// creates a printer with the given prefix
    pub fn new(out:W, label:&str) -> Self {
        Self { out, label: label.to_string(), failed: false }
    }

    /// true if a write failed
    pub fn failed(&self) -> bool { self.failed }

    /// returns the underlying writer
    pub fn into_inner(self) -> W { self.out }
}

impl<W:Write> CliqueSink for PrintSink<W> {
    fn accept(&mut self, clique:&[VertexId]) {
        if self.failed { return; }
        let mut line = self.label.clone();
        for v in clique {
            line += format!(" {}", v).as_str();
        }
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("unable to print clique: {}", e);
            self.failed = true;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut sizes = Vec::new();
        {
            let mut sink = |c:&[VertexId]| sizes.push(c.len());
            sink.accept(&[1,2]);
            sink.accept(&[]);
        }
        assert_eq!(sizes, vec![2,0]);
    }

    #[test]
    fn test_counter() {
        let mut counter = CliqueCounter::default();
        counter.accept(&[0,1]);
        counter.accept(&[2,3,4]);
        counter.accept(&[5,6,7]);
        assert_eq!(counter.nb_cliques, 3);
        assert_eq!(counter.largest, vec![2,3,4]);
    }

    #[test]
    fn test_print_sink() {
        let mut sink = PrintSink::new(Vec::new(), "Clique:");
        sink.accept(&[0,2]);
        sink.accept(&[]);
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Clique: 0 2\nClique:\n");
    }

    struct BrokenWriter;
    impl Write for BrokenWriter {
        fn write(&mut self, _:&[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    #[test]
    fn test_print_sink_failure_does_not_panic() {
        let mut sink = PrintSink::new(BrokenWriter, "Clique:");
        sink.accept(&[0]);
        sink.accept(&[1]);
        assert!(sink.failed());
    }
}
