//! Sparkline geometry.
//!
//! `points` maps a series onto a `width × height` box with y growing downward:
//! x = i / (n-1) · width, y = height − (v − min) / range · height. A flat
//! series (range 0) uses range 1 so it lies on the bottom edge.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

pub fn points(data: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let finite = data.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() {
        return Vec::new();
    }
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let n = data.len();
    data.iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n > 1 {
                i as f64 / (n - 1) as f64 * width
            } else {
                0.0
            };
            let v = if v.is_finite() { v } else { min };
            let y = height - (v - min) / range * height;
            (x, y)
        })
        .collect()
}

/// Up when the last sample is above the first.
pub fn trend(data: &[f64]) -> Trend {
    match (data.first(), data.last()) {
        (Some(first), Some(last)) if last > first => Trend::Up,
        _ => Trend::Down,
    }
}

/// Integer bar heights in `0..=max` for terminal sparklines. Lowest sample
/// maps to 0; a flat series maps to all zeros.
pub fn levels(data: &[f64], max: u64) -> Vec<u64> {
    let height = max as f64;
    points(data, 0.0, height)
        .into_iter()
        .map(|(_, y)| (height - y).round().clamp(0.0, height) as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_span_the_box() {
        let pts = points(&[1.0, 3.0, 2.0], 100.0, 30.0);
        assert_eq!(pts[0], (0.0, 30.0));
        assert_eq!(pts[1], (50.0, 0.0));
        assert_eq!(pts[2], (100.0, 15.0));
    }

    #[test]
    fn flat_series_sits_on_bottom() {
        let pts = points(&[5.0, 5.0], 10.0, 8.0);
        assert!(pts.iter().all(|&(_, y)| y == 8.0));
    }

    #[test]
    fn single_point_at_origin_x() {
        assert_eq!(points(&[7.0], 10.0, 8.0), vec![(0.0, 8.0)]);
        assert!(points(&[], 10.0, 8.0).is_empty());
    }

    #[test]
    fn trend_compares_ends() {
        assert_eq!(trend(&[1.0, 0.5, 2.0]), Trend::Up);
        assert_eq!(trend(&[2.0, 3.0, 2.0]), Trend::Down);
        assert_eq!(trend(&[]), Trend::Down);
    }

    #[test]
    fn levels_scale_to_max() {
        assert_eq!(levels(&[0.0, 5.0, 10.0], 8), vec![0, 4, 8]);
        assert_eq!(levels(&[3.0, 3.0], 8), vec![0, 0]);
    }
}
