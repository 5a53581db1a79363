pub fn mean(numbers: &[i32]) -> f64 {
    debug_assert!(!numbers.is_empty(), "mean of zero numbers");
    numbers.iter().map(|&n| i64::from(n)).sum::<i64>() as f64 / numbers.len() as f64
}

// `sorted` must be ascending.
pub fn median(sorted: &[i32]) -> f64 {
    debug_assert!(!sorted.is_empty(), "median of zero numbers");
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (i64::from(sorted[mid - 1]) + i64::from(sorted[mid])) as f64 / 2.0
    } else {
        f64::from(sorted[mid])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
}

impl Statistics {
    pub fn from_sorted(sorted: &[i32]) -> Self {
        Statistics {
            mean: mean(sorted),
            median: median(sorted),
        }
    }
}
