use crate::{lists::LocationLists, parser::parse_lists};

// plain double loop, so list order does not matter; i128 so large matches cannot overflow
pub fn weighted_occurrences(first: &[i64], second: &[i64]) -> i128 {
    let mut result = 0;
    for &value in first {
        for &other in second {
            if value == other {
                result += i128::from(value);
            }
        }
    }
    result
}

pub fn answer(lists: &LocationLists) -> i128 {
    weighted_occurrences(lists.first(), lists.second())
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_lists(input)?;

    Ok(answer(&lists).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;

    fn grouped(first: &[i64], second: &[i64]) -> i128 {
        let counts = second.iter().counts();
        first
            .iter()
            .map(|value| i128::from(*value) * counts.get(value).copied().unwrap_or(0) as i128)
            .sum()
    }

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        assert_eq!("31", process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_empty() -> miette::Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }

    #[test]
    fn test_process_extreme_rows() -> miette::Result<()> {
        let input = "9223372036854775807 9223372036854775807
9223372036854775807 9223372036854775807";
        let expected = 4 * i128::from(i64::MAX);
        assert_eq!(expected.to_string(), process(input)?);
        Ok(())
    }

    #[rstest]
    #[case(&[3, 4, 2, 1, 3, 3], &[4, 3, 5, 3, 9, 3], 31)]
    #[case(&[1, 2, 3, 3, 3, 4], &[3, 3, 3, 4, 5, 9], 31)]
    #[case(&[1, 2, 3], &[4, 5, 6], 0)]
    #[case(&[], &[1, 2], 0)]
    #[case(&[-2, 5], &[-2, -2, 5], 1)]
    #[case(&[i64::MAX, i64::MAX], &[i64::MAX, i64::MAX], 4 * i128::from(i64::MAX))]
    #[case(&[i64::MIN, i64::MIN], &[i64::MIN, i64::MIN], 4 * i128::from(i64::MIN))]
    fn test_weighted_occurrences(
        #[case] first: &[i64],
        #[case] second: &[i64],
        #[case] expected: i128,
    ) {
        assert_eq!(expected, weighted_occurrences(first, second));
    }

    #[rstest]
    #[case("3 4\n4 3\n2 5\n1 3\n3 9\n3 3")]
    #[case("7 7\n7 1\n1 7\n-3 -3\n0 0")]
    #[case("10 20\n30 40")]
    fn test_grouped_matches_brute_force(#[case] input: &str) -> miette::Result<()> {
        let lists = parse_lists(input)?;
        assert_eq!(grouped(lists.first(), lists.second()), answer(&lists));
        Ok(())
    }
}
