//! Enumeration of the maximal cliques of a graph (Bron–Kerbosch algorithm)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]


/// graph model (adjacency lists and matrix)
pub mod graph;

/// errors of the graph construction, loaders and searches
pub mod error;

/// order-preserving set operations used by the searches
pub mod set_algebra;

/// consumers of the cliques found
pub mod sink;

/// Bron–Kerbosch searches (naive and pivot)
pub mod search;

/// read DIMACS graphs
pub mod dimacs;

/// read Graphviz DOT graphs
pub mod dot;

/// instance formats and graph loading
pub mod loader;

/// clique checker and brute force enumeration
pub mod checker;

/// graph generators (random, complete, paths, cycles)
pub mod generators;

/// helper and utility methods for executables
pub mod util;
