use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use anyhow::Result;

use aoc2020::{default_input, ALL_SOLUTIONS};

fn main() -> Result<()> {
    let mut total = Duration::default();
    for (i, day) in ALL_SOLUTIONS.into_iter().enumerate() {
        total += execute_day(i + 1, day)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day<S: Display, T: Display>(
    n: usize,
    f: fn(&str) -> Result<(S, T)>,
) -> Result<Duration> {
    println!("Day {}:", n);
    let input = default_input(n)?;

    let start = Instant::now();
    let (part1, part2) = f(&input)?;
    let elapsed = start.elapsed();

    println!("  Part 1: {}", part1);
    println!("  Part 2: {}", part2);
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
