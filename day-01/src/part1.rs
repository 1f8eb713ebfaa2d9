use itertools::Itertools;

use crate::{lists::LocationLists, parser::parse_lists};

// both lists sorted and of equal length; u128 holds any sum of i64 distances
pub fn total_distance(first: &[i64], second: &[i64]) -> u128 {
    first
        .iter()
        .zip_eq(second)
        .map(|(a, b)| u128::from(a.abs_diff(*b)))
        .sum()
}

pub fn answer(lists: &LocationLists) -> u128 {
    total_distance(lists.first(), lists.second())
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let mut lists = parse_lists(input)?;
    lists.sort();

    Ok(answer(&lists).to_string())
}
