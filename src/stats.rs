use itertools::Itertools;

/// Index of the smallest value, first occurrence on ties.
///
/// A NaN anywhere in `data` is treated as the minimum, so the first NaN wins.
pub fn argmin(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, &value) in data.iter().enumerate() {
        if value.is_nan() {
            return Some(idx);
        }
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((idx, value)),
        }
    }

    best.map(|(idx, _)| idx)
}

/// Differences between neighbouring samples: `data[i + 1] - data[i]`.
pub fn consecutive_diffs(data: &[f64]) -> Vec<f64> {
    data.iter()
        .tuple_windows()
        .map(|(prev, next)| next - prev)
        .collect()
}

pub fn mean(data: &[f64]) -> Option<f64> {
    match data.len() {
        0 => None,
        count => Some(data.iter().sum::<f64>() / count as f64),
    }
}

/// Population standard deviation.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    let data_mean = mean(data)?;
    let variance = data
        .iter()
        .map(|value| {
            let diff = data_mean - *value;

            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;

    Some(variance.sqrt())
}
