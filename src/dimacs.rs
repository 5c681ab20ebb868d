use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, not_line_ending, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::multi::many1;
use nom::sequence::{delimited, preceded, separated_pair, terminated, tuple};
use log::warn;

use crate::error::LoadError;
use crate::graph::VertexId;
use crate::loader::EdgeList;

const FORMAT:&str = "DIMACS";

/** reads a DIMACS graph (WARNING: indices start at 1 in the DIMACS format, they are shifted
to start at 0).

 - `c ...`: comment
 - `p edge n m` (or `p col n m`): header
 - `e a b`: edge, possibly several per line
*/
pub fn parse_dimacs(content:&str) -> Result<EdgeList, LoadError> {
    let mut header:Option<(usize,usize)> = None;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for (i,raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || skip_comment(line).is_ok() { continue; }
        let parse_error = |message:String| LoadError::Parse { format:FORMAT, line:i+1, message };
        match header {
            None => {
                let (_,(n,m)) = all_consuming(terminated(read_header, space0))(line)
                    .map_err(|_| parse_error(format!("expected a 'p edge n m' header, found '{}'", line)))?;
                header = Some((n,m));
            },
            Some(_) => {
                let (_,line_edges) = all_consuming(many1(delimited(space0, read_edge, space0)))(line)
                    .map_err(|_| parse_error(format!("expected an 'e a b' edge, found '{}'", line)))?;
                for (a,b) in line_edges {
                    if a == 0 || b == 0 {
                        return Err(parse_error("DIMACS vertex ids start at 1".to_string()));
                    }
                    edges.push((a-1, b-1));
                }
            }
        }
    }
    let (n,m) = header.ok_or_else(|| LoadError::Parse {
        format:FORMAT, line:content.lines().count(), message:"missing 'p edge n m' header".to_string()
    })?;
    // some generators count each edge in both directions
    if edges.len() != m && 2*edges.len() != m {
        warn!("DIMACS header announces {} edges, {} read", m, edges.len());
    }
    Ok(EdgeList { n, edges })
}

/// skips a single comment line
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(tag("c"), not_line_ending)(s)
}

/// reads an unsigned integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(integer, space1, integer)(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        tuple((tag("p"), space1, alt((tag("edge"), tag("col"), tag("clq"))), space1)),
        read_two_integers
    )(s)
}

/// reads edge (a,b) (1-based)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tuple((tag("e"), space1)), read_two_integers)(s)
}
