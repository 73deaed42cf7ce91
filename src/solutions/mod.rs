mod day1;
mod day2;
mod day3;
mod day4;

pub use day1::day1;
pub use day2::day2;
pub use day3::day3;
pub use day4::day4;

use crate::Solution;

pub const ALL_SOLUTIONS: [Solution; 4] = [day1, day2, day3, day4];
