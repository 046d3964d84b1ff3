//! List-processing exercises
//!
//! Column-wise averages over score tables and the even-square /
//! odd-cube list transform.

/// Column-wise means of a table of scores.
///
/// Each row is one student's marks; the result holds one average per
/// subject. Rows shorter than the first row are ignored past their end.
pub fn average_scores(rows: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let subjects = first.len();
    let mut totals = vec![0.0; subjects];
    let mut counts = vec![0u32; subjects];

    for row in rows {
        for (i, score) in row.iter().take(subjects).enumerate() {
            totals[i] += score;
            counts[i] += 1;
        }
    }

    totals
        .into_iter()
        .zip(counts)
        .map(|(total, count)| if count == 0 { 0.0 } else { total / count as f64 })
        .collect()
}

/// Square even values, cube odd values.
pub fn process_list(values: &[i64]) -> Vec<i64> {
    process_list_iter(values).collect()
}

/// Lazy form of [`process_list`].
pub fn process_list_iter(values: &[i64]) -> impl Iterator<Item = i64> + '_ {
    values
        .iter()
        .map(|&x| if x % 2 == 0 { x * x } else { x * x * x })
}

/// Sum of any number of values; an empty slice sums to zero.
pub fn sum_all<T>(values: &[T]) -> T
where
    T: Copy + std::iter::Sum<T>,
{
    values.iter().copied().sum()
}

/// Sum and difference of a pair.
pub fn sum_and_diff<T>(a: T, b: T) -> (T, T)
where
    T: Copy + std::ops::Add<Output = T> + std::ops::Sub<Output = T>,
{
    (a + b, a - b)
}
