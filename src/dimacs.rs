use std::fs;

use anyhow::{anyhow, Context, Result};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_until};
use nom::character::complete::{digit1, multispace0, multispace1, space1};
use nom::combinator::{map_res, rest};
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, terminated};

use crate::color::VertexId;

/// reads an unsigned integer
fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, |x: &str| x.parse::<usize>())(s)
}

/// skips a single comment line (starting with 'c')
fn skip_comment(s: &str) -> IResult<&str, &str> {
    preceded(tag("c"), alt((terminated(take_until("\n"), take(1usize)), rest)))(s)
}

/// skips comments and blank lines
pub fn skip_noise(s: &str) -> IResult<&str, Vec<&str>> {
    many0(alt((skip_comment, multispace1)))(s)
}

/// reads the problem header `p edge <n> <m>` containing (n,m)
pub fn read_header(s: &str) -> IResult<&str, (usize, usize)> {
    terminated(
        preceded(
            alt((tag("p edge "), tag("p col "))),
            separated_pair(integer, space1, integer),
        ),
        multispace0,
    )(s)
}

/// reads an edge line `e <u> <v>` (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s: &str) -> IResult<&str, (usize, usize)> {
    terminated(
        preceded(tag("e "), separated_pair(integer, space1, integer)),
        multispace0,
    )(s)
}

/** reads an instance from a file.
Returns (n, declared nb edges, adjacency list). See [`read_from_str`]. */
pub fn read_from_file(filename: &str) -> Result<(usize, usize, Vec<Vec<VertexId>>)> {
    let content = fs::read_to_string(filename)
        .with_context(|| format!("unable to read instance file '{}'", filename))?;
    read_from_str(&content.replace('\r', ""))
}

/** reads a DIMACS instance from a string, returns (n, declared nb edges, adj_list).

Comments and blank lines may appear anywhere. Edges referencing out-of-range
vertices (or self-loops) are warned about and skipped; duplicate edges are
deduplicated. The 1-based DIMACS indices are converted to 0-based. A missing
header is an error: no graph can be allocated without it. */
pub fn read_from_str(s: &str) -> Result<(usize, usize, Vec<Vec<VertexId>>)> {
    let after_noise = match skip_noise(s) {
        Ok((r, _)) => r,
        Err(_) => s,
    };
    let (mut remaining, (n, m)) = read_header(after_noise)
        .map_err(|_| anyhow!("missing or malformed 'p edge <n> <m>' header"))?;
    let mut adj_list = vec![Vec::new(); n];
    let mut nb_kept = 0;
    loop {
        if let Ok((r, (a, b))) = read_edge(remaining) {
            remaining = r;
            if a < 1 || b < 1 || a > n || b > n {
                eprintln!("warning: ignoring edge ({},{}): out of range (n={})", a, b, n);
            } else if a == b {
                eprintln!("warning: ignoring self-loop on vertex {}", a);
            } else {
                let (u, v) = (a - 1, b - 1);
                if !adj_list[u].contains(&v) {
                    adj_list[u].push(v);
                    adj_list[v].push(u);
                    nb_kept += 1;
                }
            }
            continue;
        }
        // not an edge: skip interleaved comments / blank lines, stop otherwise
        match skip_noise(remaining) {
            Ok((r, _)) if r.len() < remaining.len() => { remaining = r; }
            _ => break,
        }
    }
    if !remaining.is_empty() {
        eprintln!("warning: ignoring trailing content in instance file");
    }
    if nb_kept != m {
        eprintln!("warning: header declares {} edges, {} kept", m, nb_kept);
    }
    Ok((n, m, adj_list))
}
