use std::fmt::{self, Display, Formatter};

use tracing::debug;

pub mod error;
pub mod input;
pub mod lists;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod sort;

pub use error::PuzzleError;
pub use lists::LocationLists;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub total_distance: u128,
    pub weighted_sum: i128,
}

impl Display for Answers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "first part: {}", self.total_distance)?;
        write!(f, "second part: {}", self.weighted_sum)
    }
}

#[tracing::instrument(skip(input))]
pub fn solve(input: &str) -> miette::Result<Answers> {
    let mut lists = parser::parse_lists(input)?;
    lists.sort();

    let answers = Answers {
        total_distance: part1::answer(&lists),
        weighted_sum: part2::answer(&lists),
    };
    debug!(count = lists.count(), ?answers, "solved");
    Ok(answers)
}
