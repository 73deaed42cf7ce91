use anyhow::Result;

use crate::ParseError;

pub fn day2(input: &str) -> Result<(usize, usize)> {
    let policies = parse_policies(input)?;

    Ok((
        count_valid(&policies, Policy::Count),
        count_valid(&policies, Policy::Positional),
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// `letter` must occur between `min` and `max` times (inclusive).
    Count,
    /// Exactly one of positions `min` and `max` (1-indexed) holds `letter`.
    Positional,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PasswordPolicy<'a> {
    min: usize,
    max: usize,
    letter: u8,
    password: &'a str,
}

impl PasswordPolicy<'_> {
    pub fn is_valid(&self, policy: Policy) -> bool {
        match policy {
            Policy::Count => {
                let count = self.password.bytes().filter(|&b| b == self.letter).count();
                (self.min..=self.max).contains(&count)
            }
            Policy::Positional => {
                // Positions past the end of the password don't match.
                let at = |pos: usize| {
                    pos.checked_sub(1)
                        .and_then(|i| self.password.as_bytes().get(i))
                        == Some(&self.letter)
                };
                at(self.min) != at(self.max)
            }
        }
    }
}

pub fn count_valid(policies: &[PasswordPolicy], policy: Policy) -> usize {
    policies.iter().filter(|p| p.is_valid(policy)).count()
}

/// Parses `min-max letter: password` lines, skipping empty ones.
pub fn parse_policies(input: &str) -> Result<Vec<PasswordPolicy>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            parse_policy_line(line).ok_or_else(|| ParseError::MalformedPolicy {
                line: i + 1,
                text: line.to_string(),
            })
        })
        .collect()
}

fn parse_policy_line(line: &str) -> Option<PasswordPolicy> {
    let (bounds, rest) = line.split_once(' ')?;
    let (min, max) = bounds.split_once('-')?;
    let (letter, password) = rest.split_once(": ")?;

    if letter.len() != 1 || password.is_empty() {
        return None;
    }

    Some(PasswordPolicy {
        min: min.parse().ok()?,
        max: max.parse().ok()?,
        letter: letter.as_bytes()[0],
        password,
    })
}
