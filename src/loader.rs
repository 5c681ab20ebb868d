use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::thread;

use log::info;
use serde::{Serialize, Deserialize};

use crate::dimacs::parse_dimacs;
use crate::dot::parse_dot;
use crate::error::{GraphError, LoadError};
use crate::graph::{Graph, VertexId};

/// stack size of the loader thread used by the command line tool (64 MiB)
pub const DEFAULT_LOADER_STACK:usize = 64 * 1024 * 1024;

/** output of every loader: a vertex count and an edge list.
Also the JSON instance format: `{"n": 3, "edges": [[0,1], [1,2]]}`
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    /// nb vertices
    pub n: usize,
    /// edges (u,v), 0 <= u,v < n
    pub edges: Vec<(VertexId,VertexId)>,
}

impl EdgeList {
    /// builds the graph
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        Graph::build(self.n, &self.edges)
    }
}


/** supported instance formats */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceFormat {
    /// DIMACS (p edge n m / e a b)
    Dimacs,
    /// Graphviz DOT
    Dot,
    /// serialized EdgeList
    Json,
}

impl InstanceFormat {
    /** guesses the format from the file extension (DIMACS if unknown) */
    pub fn from_path(path:&Path) -> Self {
        let extension = path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("dot") | Some("gv") => InstanceFormat::Dot,
            Some("json") => InstanceFormat::Json,
            _ => InstanceFormat::Dimacs,
        }
    }
}

impl fmt::Display for InstanceFormat {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceFormat::Dimacs => write!(f, "dimacs"),
            InstanceFormat::Dot => write!(f, "dot"),
            InstanceFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for InstanceFormat {
    type Err = String;

    fn from_str(s:&str) -> Result<Self, Self::Err> {
        match s {
            "dimacs" => Ok(InstanceFormat::Dimacs),
            "dot" => Ok(InstanceFormat::Dot),
            "json" => Ok(InstanceFormat::Json),
            _ => Err(format!("instance type unknown '{}' (valid: 'dimacs', 'dot', 'json')", s)),
        }
    }
}


/** parses the textual content of an instance */
pub fn parse_instance(content:&str, format:InstanceFormat) -> Result<EdgeList, LoadError> {
    match format {
        InstanceFormat::Dimacs => parse_dimacs(content),
        InstanceFormat::Dot => parse_dot(content),
        InstanceFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/** reads a graph from a file. If format is None, it is guessed from the extension.

# Errors
 - `Io` if the file cannot be read
 - `Parse` or `Json` if its content is malformed
 - `Graph` if an edge references an unknown vertex
*/
pub fn load_graph(path:&Path, format:Option<InstanceFormat>) -> Result<Graph, LoadError> {
    let format = format.unwrap_or_else(|| InstanceFormat::from_path(path));
    info!("reading {} instance: {}...", format, path.display());
    let content = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?
        .replace("\r", "");
    let edge_list = parse_instance(&content, format)?;
    Ok(edge_list.into_graph()?)
}

/** same as `load_graph`, but parses on a dedicated thread with the given stack size
(for deeply nested inputs). The caller thread waits for the result.
*/
pub fn load_graph_with_stack(
    path:&Path,
    format:Option<InstanceFormat>,
    stack_size:usize,
) -> Result<Graph, LoadError> {
    let path:PathBuf = path.to_path_buf();
    let handle = thread::Builder::new()
        .name("graph-loader".to_string())
        .stack_size(stack_size)
        .spawn(move || load_graph(&path, format))
        .map_err(|e| LoadError::Thread(e.to_string()))?;
    handle.join()
        .map_err(|_| LoadError::Thread("the loader thread panicked".to_string()))?
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InstanceFormat::from_path(Path::new("a/b.dot")), InstanceFormat::Dot);
        assert_eq!(InstanceFormat::from_path(Path::new("b.GV")), InstanceFormat::Dot);
        assert_eq!(InstanceFormat::from_path(Path::new("b.json")), InstanceFormat::Json);
        assert_eq!(InstanceFormat::from_path(Path::new("b.col")), InstanceFormat::Dimacs);
        assert_eq!(InstanceFormat::from_path(Path::new("grid2x2")), InstanceFormat::Dimacs);
        assert_eq!("dot".parse::<InstanceFormat>(), Ok(InstanceFormat::Dot));
        assert!("cgshop".parse::<InstanceFormat>().is_err());
    }

    #[test]
    fn test_parse_json() {
        let res = parse_instance("{\"n\": 3, \"edges\": [[0,1],[1,2]]}", InstanceFormat::Json).unwrap();
        assert_eq!(res, EdgeList { n:3, edges:vec![(0,1), (1,2)] });
        assert!(matches!(
            parse_instance("{\"n\": 3}", InstanceFormat::Json),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_load_dimacs() {
        let g = load_graph(Path::new("insts/grid2x2.col"), None).unwrap();
        assert_eq!(g.nb_vertices(), 4);
        assert_eq!(g.nb_edges(), 4);
        assert_eq!(g.neighbors(0), &[1,2]);
    }

    #[test]
    fn test_load_dot_with_stack() {
        let g = load_graph_with_stack(Path::new("insts/house.dot"), None, DEFAULT_LOADER_STACK).unwrap();
        assert_eq!(g.nb_vertices(), 5);
        assert_eq!(g.nb_edges(), 6);
    }

    #[test]
    fn test_load_json() {
        let g = load_graph(Path::new("insts/two_triangles.json"), None).unwrap();
        assert_eq!(g.nb_vertices(), 6);
        assert_eq!(g.nb_edges(), 6);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_graph(Path::new("insts/does-not-exist.col"), None),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_invalid_edge_is_a_graph_error() {
        assert!(matches!(
            load_graph(Path::new("insts/invalid_edge.json"), None),
            Err(LoadError::Graph(GraphError::InvalidEdge { u:1, v:3, n:3 }))
        ));
    }
}
