//! Sampled size-window curve for visualisation.

use crate::calibration::Calibration;
use crate::transfer::score_size;

/// Lazy iterator of `(size_nm, score)` points: the size transfer
/// function sampled at linearly spaced sizes across a range.
///
/// Cloning and re-iterating from the same parameters yields an
/// identical sequence; there is no internal state beyond the cursor.
#[derive(Debug, Clone)]
pub struct SizeWindowCurve {
    cal: Calibration,
    min_nm: f64,
    step: f64,
    samples: usize,
    cursor: usize,
}

impl Iterator for SizeWindowCurve {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.samples {
            return None;
        }
        let size = self.min_nm + self.step * self.cursor as f64;
        self.cursor += 1;
        Some((size, score_size(size, &self.cal)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SizeWindowCurve {}

/// Sample the size window over `[min_nm, max_nm]` with `samples`
/// points, endpoints included. A single sample sits at `min_nm`.
pub fn size_window_curve(
    cal: &Calibration,
    min_nm: f64,
    max_nm: f64,
    samples: usize,
) -> SizeWindowCurve {
    let step = if samples > 1 {
        (max_nm - min_nm) / (samples - 1) as f64
    } else {
        0.0
    };
    SizeWindowCurve {
        cal: cal.clone(),
        min_nm,
        step,
        samples,
        cursor: 0,
    }
}
