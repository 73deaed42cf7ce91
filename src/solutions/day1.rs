use anyhow::{Context, Result};

use crate::ParseError;

const TARGET: usize = 2020;

pub fn day1(input: &str) -> Result<(usize, usize)> {
    let numbers = parse_numbers(input)?;

    let (a, b) = find_pair(&numbers, TARGET).context("no pair of entries sums to 2020")?;
    let (x, y, z) = find_triple(&numbers, TARGET).context("no triple of entries sums to 2020")?;

    Ok((a * b, x * y * z))
}

pub fn parse_numbers(input: &str) -> Result<Vec<usize>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            line.parse().map_err(|_| ParseError::InvalidNumber {
                line: i + 1,
                text: line.to_string(),
            })
        })
        .collect()
}

/// Exhaustive search; an entry may be paired with itself. `None` when no
/// combination hits the target.
pub fn find_pair(numbers: &[usize], target: usize) -> Option<(usize, usize)> {
    for &a in numbers {
        for &b in numbers {
            if a + b == target {
                return Some((a, b));
            }
        }
    }
    None
}

pub fn find_triple(numbers: &[usize], target: usize) -> Option<(usize, usize, usize)> {
    for &a in numbers {
        for &b in numbers {
            for &c in numbers {
                if a + b + c == target {
                    return Some((a, b, c));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        1721
        979
        366
        299
        675
        1456
    "};

    #[test]
    fn test_day1() -> Result<()> {
        assert_eq!(day1(EXAMPLE)?, (514579, 241861950));
        Ok(())
    }

    #[test]
    fn pair_sums_to_target() -> Result<()> {
        let numbers = parse_numbers(EXAMPLE)?;
        let (a, b) = find_pair(&numbers, 2020).unwrap();
        assert_eq!(a + b, 2020);
        Ok(())
    }

    #[test]
    fn missing_combination_is_none() {
        assert_eq!(find_pair(&[1, 2, 3], 2020), None);
        assert_eq!(find_triple(&[1, 2, 3], 2020), None);
    }

    #[test]
    fn entry_may_pair_with_itself() {
        assert_eq!(find_pair(&[1010], 2020), Some((1010, 1010)));
    }

    #[test]
    fn non_numeric_line_fails() {
        assert_eq!(
            parse_numbers("12\nforty\n"),
            Err(ParseError::InvalidNumber {
                line: 2,
                text: "forty".to_string()
            })
        );
    }
}
