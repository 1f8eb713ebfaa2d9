use nom::{
    bytes::complete::is_not,
    character::complete::{i64 as signed_integer, line_ending, not_line_ending, space1},
    combinator::{all_consuming, rest},
    multi::separated_list0,
    sequence::separated_pair,
    IResult,
};
use nom_locate::LocatedSpan;
use tracing::{debug, trace};

use crate::{error::PuzzleError, lists::LocationLists};

type Span<'a> = LocatedSpan<&'a str>;

fn parse_lines(input: Span) -> IResult<Span, Vec<Span>> {
    separated_list0(line_ending, not_line_ending)(input)
}

// first run of spaces splits the two raw tokens
fn parse_record(line: Span) -> IResult<Span, (Span, Span)> {
    separated_pair(is_not(" "), space1, rest)(line)
}

fn parse_integer(token: &str) -> IResult<&str, i64> {
    all_consuming(signed_integer)(token)
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_lists(input: &str) -> Result<LocationLists, PuzzleError> {
    let body = input.trim_end();
    if body.is_empty() {
        debug!("no records in input");
        return Ok(LocationLists::new());
    }

    let malformed = |line: &Span| PuzzleError::MalformedLine {
        line: line.location_line(),
        src: input.to_string(),
        span: (line.location_offset(), line.fragment().len()).into(),
    };

    let (remaining, lines) = parse_lines(Span::new(body)).map_err(|_| PuzzleError::MalformedLine {
        line: 1,
        src: input.to_string(),
        span: (0, body.lines().next().map_or(0, str::len)).into(),
    })?;
    if !remaining.fragment().is_empty() {
        // a stray carriage return stops the line splitter early
        let line_len = remaining.fragment().find('\n').unwrap_or(remaining.fragment().len());
        return Err(PuzzleError::MalformedLine {
            line: remaining.location_line(),
            src: input.to_string(),
            span: (remaining.location_offset(), line_len).into(),
        });
    }

    let mut lists = LocationLists::new();
    for line in &lines {
        let Ok((_, (left, right))) = parse_record(*line) else {
            return Err(malformed(line));
        };

        let right_token = right.fragment().trim_end();
        if right_token.is_empty() {
            return Err(malformed(line));
        }

        let first = parse_token(input, line, left.location_offset(), left.fragment())?;
        let second = parse_token(input, line, right.location_offset(), right_token)?;
        trace!(line = line.location_line(), first, second, "parsed record");
        lists.push((first, second));
    }

    debug!(count = lists.count(), "parsed location lists");
    Ok(lists)
}

fn parse_token(input: &str, line: &Span, offset: usize, token: &str) -> Result<i64, PuzzleError> {
    parse_integer(token)
        .map(|(_, value)| value)
        .map_err(|_| PuzzleError::NonNumericToken {
            line: line.location_line(),
            token: token.to_string(),
            src: input.to_string(),
            span: (offset, token.len()).into(),
        })
}
