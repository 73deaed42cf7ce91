use anyhow::Result;

pub const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

pub fn day3(input: &str) -> Result<(usize, usize)> {
    Ok((count_trees(input, 3, 1), slope_product(input)))
}

/// Walks the grid from the top-left with the given slope, wrapping
/// horizontally, and counts visited `#` cells.
pub fn count_trees(map: &str, right: usize, down: usize) -> usize {
    map.lines()
        .filter(|line| !line.is_empty())
        .step_by(down)
        .enumerate()
        .filter(|(i, row)| row.as_bytes()[(i * right) % row.len()] == b'#')
        .count()
}

pub fn slope_product(map: &str) -> usize {
    SLOPES
        .iter()
        .map(|&(right, down)| count_trees(map, right, down))
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ..##.......
        #...#...#..
        .#....#..#.
        ..#.#...#.#
        .#...##..#.
        ..#.##.....
        .#.#.#....#
        .#........#
        #.##...#...
        #...##....#
        .#..#...#.#
    "};

    #[test]
    fn test_day3() -> Result<()> {
        assert_eq!(day3(EXAMPLE)?, (7, 336));
        Ok(())
    }

    #[test]
    fn individual_slopes() {
        let counts: Vec<_> = SLOPES
            .iter()
            .map(|&(right, down)| count_trees(EXAMPLE, right, down))
            .collect();
        assert_eq!(counts, [2, 7, 3, 4, 2]);
    }

    #[test]
    fn wraps_past_the_right_edge() {
        // Third visit of slope (3,1) lands on column 6 % 4 == 2.
        assert_eq!(count_trees("....\n....\n..#.\n", 3, 1), 1);
    }

    #[test]
    fn down_step_skips_rows() {
        assert_eq!(count_trees("#\n#\n#\n#\n", 0, 2), 2);
    }
}
