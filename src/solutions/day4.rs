use anyhow::Result;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::ParseError;

pub type FieldMap<'a> = FxHashMap<&'a str, &'a str>;

const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

pub fn day4(input: &str) -> Result<(usize, usize)> {
    let passports = parse_passports(input)?;
    let checks = FieldChecks::new()?;

    let complete = passports.iter().filter(|p| has_required_fields(p)).count();
    let valid = passports.iter().filter(|p| checks.is_valid(p)).count();

    Ok((complete, valid))
}

/// Splits the input into blank-line-delimited blocks and each block into
/// whitespace-separated `key:value` fields. All-whitespace blocks are
/// dropped.
pub fn parse_passports(input: &str) -> Result<Vec<FieldMap>, ParseError> {
    input
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(parse_fields)
        .collect()
}

fn parse_fields(block: &str) -> Result<FieldMap, ParseError> {
    block
        .split_whitespace()
        .map(|field| {
            field.split_once(':').ok_or_else(|| ParseError::MalformedField {
                text: field.to_string(),
            })
        })
        .collect()
}

pub fn has_required_fields(passport: &FieldMap) -> bool {
    REQUIRED_FIELDS.iter().all(|name| passport.contains_key(name))
}

/// The strict per-field rules. Each check fails closed on a missing key or a
/// value that doesn't match the field's shape.
pub struct FieldChecks {
    hair_color: Regex,
    eye_color: Regex,
    passport_id: Regex,
}

impl FieldChecks {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            hair_color: Regex::new("^#[0-9a-f]{6}$")?,
            eye_color: Regex::new("^(amb|blu|brn|gry|grn|hzl|oth)$")?,
            passport_id: Regex::new("^[0-9]{9}$")?,
        })
    }

    pub fn is_valid(&self, passport: &FieldMap) -> bool {
        valid_year(passport, "byr", 1920, 2002)
            && valid_year(passport, "iyr", 2010, 2020)
            && valid_year(passport, "eyr", 2020, 2030)
            && valid_height(passport)
            && matches_pattern(passport, "hcl", &self.hair_color)
            && matches_pattern(passport, "ecl", &self.eye_color)
            && matches_pattern(passport, "pid", &self.passport_id)
    }
}

fn matches_pattern(passport: &FieldMap, name: &str, pattern: &Regex) -> bool {
    passport.get(name).is_some_and(|value| pattern.is_match(value))
}

fn valid_year(passport: &FieldMap, name: &str, min: usize, max: usize) -> bool {
    passport
        .get(name)
        .and_then(|value| value.parse::<usize>().ok())
        .is_some_and(|year| (min..=max).contains(&year))
}

fn valid_height(passport: &FieldMap) -> bool {
    let Some(value) = passport.get("hgt") else {
        return false;
    };

    let (range, number) = if let Some(number) = value.strip_suffix("cm") {
        (150..=193, number)
    } else if let Some(number) = value.strip_suffix("in") {
        (59..=76, number)
    } else {
        return false;
    };

    number
        .parse::<usize>()
        .is_ok_and(|height| range.contains(&height))
}
