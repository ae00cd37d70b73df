//! Caller-held curve selection
//!
//! Viewers step through curves one at a time. The selection lives in a
//! [`CurveCursor`] borrowed from a [`Segmentation`], so several independent
//! selections over the same result can coexist.

use crate::curve::Curve;
use crate::segmenter::Segmentation;

/// Position within a [`Segmentation`]
///
/// Starts on curve 1 (or nothing, for an empty result). Stepping past either
/// end leaves the selection unchanged.
#[derive(Debug, Clone, Copy)]
pub struct CurveCursor<'a> {
    segmentation: &'a Segmentation,
    position: usize,
}

impl<'a> CurveCursor<'a> {
    /// Cursor on the first curve
    pub fn new(segmentation: &'a Segmentation) -> Self {
        Self {
            segmentation,
            position: 0,
        }
    }

    /// Selected curve
    pub fn current(&self) -> Option<&'a Curve> {
        self.segmentation.curves().get(self.position)
    }

    /// 1-based number of the selected curve
    pub fn number(&self) -> Option<usize> {
        self.current().map(|curve| curve.curve_number)
    }

    /// Select curve `number` (1-based); out-of-range numbers keep the selection
    pub fn select(&mut self, number: usize) -> Option<&'a Curve> {
        let curve = self.segmentation.curve(number)?;
        self.position = number - 1;
        Some(curve)
    }

    /// Move to the following curve, if any
    pub fn next_curve(&mut self) -> Option<&'a Curve> {
        let next = self.position + 1;
        let curve = self.segmentation.curves().get(next)?;
        self.position = next;
        Some(curve)
    }

    /// Move to the preceding curve, if any
    pub fn previous_curve(&mut self) -> Option<&'a Curve> {
        let previous = self.position.checked_sub(1)?;
        let curve = self.segmentation.curves().get(previous)?;
        self.position = previous;
        Some(curve)
    }

    /// True when more than one curve is available to step through
    pub fn can_navigate(&self) -> bool {
        self.segmentation.count() > 1
    }
}

impl Segmentation {
    /// Cursor on the first curve
    pub fn cursor(&self) -> CurveCursor<'_> {
        CurveCursor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Sample, Series};
    use crate::Segmenter;
    use alloc::vec::Vec;

    fn bakes(count: usize) -> Segmentation {
        let mut samples = Vec::new();
        for _ in 0..count {
            let base = samples.len();
            for i in 0..400 {
                let temp = match i {
                    0..=49 => 25.0,
                    50..=149 => 25.0 + (i - 49) as f64 * 0.7,
                    150..=249 => 95.0 - (i - 149) as f64 * 0.7,
                    _ => 25.0,
                };
                let state = if (50..150).contains(&i) { "Predicting" } else { "Probe Not Inserted" };
                samples.push(Sample::new((base + i) as f64 * 5.0, temp).with_state(state));
            }
        }
        if samples.is_empty() {
            samples = (0..100).map(|i| Sample::new(i as f64 * 5.0, 25.0)).collect();
        }
        Segmenter::multi_curve().segment(&Series::new(samples).unwrap())
    }

    #[test]
    fn steps_through_curves() {
        let result = bakes(3);
        assert_eq!(result.count(), 3);

        let mut cursor = result.cursor();
        assert_eq!(cursor.number(), Some(1));
        assert!(cursor.can_navigate());
        assert!(cursor.previous_curve().is_none());
        assert_eq!(cursor.number(), Some(1));

        assert_eq!(cursor.next_curve().map(|c| c.curve_number), Some(2));
        assert_eq!(cursor.next_curve().map(|c| c.curve_number), Some(3));
        assert!(cursor.next_curve().is_none());
        assert_eq!(cursor.number(), Some(3));

        assert_eq!(cursor.previous_curve().map(|c| c.curve_number), Some(2));
    }

    #[test]
    fn select_ignores_out_of_range() {
        let result = bakes(2);
        let mut cursor = result.cursor();
        assert_eq!(cursor.select(2).map(|c| c.curve_number), Some(2));
        assert!(cursor.select(0).is_none());
        assert!(cursor.select(5).is_none());
        assert_eq!(cursor.number(), Some(2));
    }

    #[test]
    fn empty_result_has_no_selection() {
        let result = bakes(0);
        let cursor = result.cursor();
        assert!(cursor.current().is_none());
        assert!(!cursor.can_navigate());
    }
}
