/*
Reads undirected graphs written in (a subset of) the Graphviz DOT language:
 - optional `strict`, `graph` or `digraph`, optional graph name
 - node statements, edge chains (`--` or `->`, direction is ignored)
 - attribute lists (ignored), `graph/node/edge [...]` and `a = b` statements
 - `//`, `/* */` and `#` comments
Vertex ids must be integers in [0, MAX_VERTEX_ID] (bare or quoted). Subgraphs are not supported.
*/
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, tag_no_case, take_until, take_while, take_while1};
use nom::character::complete::{char, digit0, digit1, multispace1, not_line_ending, one_of, satisfy};
use nom::combinator::{all_consuming, map, map_res, not, opt, peek, recognize, value, verify};
use nom::multi::{many0, many1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};

use crate::error::LoadError;
use crate::graph::VertexId;
use crate::loader::EdgeList;

/// largest vertex id accepted (n = largest id + 1 vertices are allocated)
pub const MAX_VERTEX_ID:VertexId = (1 << 24) - 1;

/** statement of the graph body (only the parts relevant for the graph structure are kept) */
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stmt {
    /// node declaration
    Node(VertexId),
    /// edge chain a -- b -- c
    Edges(Vec<VertexId>),
    /// attributes or assignments
    Other,
}

/** parses a DOT graph into an edge list. n is the largest vertex id + 1.

# Errors
 - `Parse` on malformed input, or on a vertex id larger than MAX_VERTEX_ID
*/
pub fn parse_dot(content:&str) -> Result<EdgeList, LoadError> {
    let stmts = match all_consuming(graph)(content) {
        Ok((_, stmts)) => stmts,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(error_at(content, e.input));
        },
        Err(nom::Err::Incomplete(_)) => {
            return Err(error_at(content, ""));
        },
    };
    let mut n:usize = 0;
    let mut edges = Vec::new();
    for stmt in stmts {
        match stmt {
            Stmt::Node(v) => { n = n.max(v + 1); },
            Stmt::Edges(chain) => {
                for w in chain.windows(2) {
                    edges.push((w[0], w[1]));
                }
                n = chain.iter().fold(n, |acc,v| acc.max(v + 1));
            },
            Stmt::Other => {},
        }
    }
    Ok(EdgeList { n, edges })
}

/// builds a parse error located at the remaining input
fn error_at(content:&str, remaining:&str) -> LoadError {
    let offset = content.len() - remaining.len();
    let line = content[..offset].matches('\n').count() + 1;
    let snippet:String = remaining.lines().next().unwrap_or("").chars().take(40).collect();
    let message = if remaining.trim().is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!(
            "unexpected input near '{}' (vertex ids must be integers in [0, {}])",
            snippet.trim(), MAX_VERTEX_ID
        )
    };
    LoadError::Parse { format:"DOT", line, message }
}

/// skips whitespace and comments
fn ws(s:&str) -> IResult<&str, ()> {
    value((), many0(alt((
        value((), multispace1),
        value((), pair(tag("//"), not_line_ending)),
        value((), pair(char('#'), not_line_ending)),
        value((), tuple((tag("/*"), take_until("*/"), tag("*/")))),
    ))))(s)
}

/// reads a symbol after optional whitespace
fn sym<'a>(t:&'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(ws, tag(t))
}

/// reads a (case insensitive) keyword that is not the prefix of a longer identifier
fn keyword<'a>(k:&'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(
        preceded(ws, tag_no_case(k)),
        not(peek(satisfy(|c:char| c.is_alphanumeric() || c == '_')))
    )
}

/// alphabetic identifier
fn identifier(s:&str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c:char| c.is_alphabetic() || c == '_'),
        take_while(|c:char| c.is_alphanumeric() || c == '_')
    ))(s)
}

/// numeral: [-]?(.[0-9]+ | [0-9]+(.[0-9]*)?)
fn numeral(s:&str) -> IResult<&str, &str> {
    recognize(pair(
        opt(char('-')),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        ))
    ))(s)
}

/// double-quoted string (returns its content, escapes are kept)
fn quoted(s:&str) -> IResult<&str, &str> {
    delimited(
        char('"'),
        recognize(many0(alt((tag("\\\""), is_not("\\\""), tag("\\"))))),
        char('"')
    )(s)
}

/// DOT id
fn id(s:&str) -> IResult<&str, &str> {
    preceded(ws, alt((quoted, numeral, identifier)))(s)
}

/// node id (ports are ignored), must be an integer in [0, MAX_VERTEX_ID]
fn node_id(s:&str) -> IResult<&str, VertexId> {
    terminated(
        verify(map_res(id, |t:&str| t.parse::<VertexId>()), |v:&VertexId| *v <= MAX_VERTEX_ID),
        pair(opt(preceded(sym(":"), id)), opt(preceded(sym(":"), id)))
    )(s)
}

/// [a=b, c=d; e] [f=g]
fn attr_list(s:&str) -> IResult<&str, ()> {
    let a_item = tuple((
        id,
        opt(preceded(sym("="), id)),
        opt(preceded(ws, one_of(",;")))
    ));
    value((), many1(delimited(sym("["), many0(a_item), sym("]"))))(s)
}

/// graph [..] | node [..] | edge [..]
fn attr_stmt(s:&str) -> IResult<&str, Stmt> {
    value(Stmt::Other, pair(
        alt((keyword("graph"), keyword("node"), keyword("edge"))),
        attr_list
    ))(s)
}

/// a = b
fn assignment(s:&str) -> IResult<&str, Stmt> {
    value(Stmt::Other, tuple((id, sym("="), id)))(s)
}

/// a [..] | a -- b -- c [..]
fn node_or_edges(s:&str) -> IResult<&str, Stmt> {
    let edge_op = preceded(ws, alt((tag("--"), tag("->"))));
    map(
        tuple((node_id, many0(preceded(edge_op, node_id)), opt(attr_list))),
        |(first, rest, _)| {
            if rest.is_empty() {
                Stmt::Node(first)
            } else {
                let mut chain = vec![first];
                chain.extend(rest);
                Stmt::Edges(chain)
            }
        }
    )(s)
}

fn stmt(s:&str) -> IResult<&str, Stmt> {
    alt((attr_stmt, assignment, node_or_edges))(s)
}

/// [strict] (graph|digraph) [name] { stmt_list }
fn graph(s:&str) -> IResult<&str, Vec<Stmt>> {
    let (s, _) = opt(keyword("strict"))(s)?;
    let (s, _) = alt((keyword("graph"), keyword("digraph")))(s)?;
    let (s, _) = opt(id)(s)?;
    let (s, stmts) = delimited(
        sym("{"),
        many0(terminated(stmt, opt(sym(";")))),
        sym("}")
    )(s)?;
    let (s, _) = ws(s)?;
    Ok((s, stmts))
}
