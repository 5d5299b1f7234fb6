//! Piecewise cubic Hermite interpolation.
//!
//! Coefficients are computed once from an ordered knot set, then the
//! interpolant is evaluated with a bisection lookup of the bracketing
//! segment. Storage is inline for the six-knot temperature case.

use smallvec::SmallVec;

use crate::error::{ForcingError, Result};

/// Inline capacity for knot and segment storage.
pub const INLINE_KNOTS: usize = 6;

/// A fixed point of the interpolant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub time: f64,
    pub value: f64,
    /// First derivative of the interpolant at `time`.
    pub slope: f64,
}

impl Knot {
    pub fn new(time: f64, value: f64, slope: f64) -> Self {
        Self { time, value, slope }
    }

    /// Knot with zero slope, i.e. a local extremum of the interpolant.
    pub fn extremum(time: f64, value: f64) -> Self {
        Self::new(time, value, 0.0)
    }
}

/// Higher-order coefficients of one cubic segment.
///
/// Together with the left knot's value and slope these fully determine
/// `v + dx*(s + dx*(third + dx*fourth))` on the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub third: f64,
    pub fourth: f64,
}

pub type Segments = SmallVec<[Segment; INLINE_KNOTS]>;

/// Compute segment coefficients for every interval between adjacent knots.
///
/// Returns `knots.len() - 1` segments. Knot times must be finite and
/// strictly increasing.
pub fn hermite(knots: &[Knot]) -> Result<Segments> {
    if knots.len() < 2 {
        return Err(ForcingError::PreconditionViolation {
            operation: "hermite",
            details: format!("need at least 2 knots, got {}", knots.len()),
        });
    }

    let mut segments = Segments::with_capacity(knots.len() - 1);
    for (i, pair) in knots.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        let dx = hi.time - lo.time;
        if !(dx > 0.0 && dx.is_finite()) {
            return Err(ForcingError::PreconditionViolation {
                operation: "hermite",
                details: format!(
                    "knot times must be strictly increasing: t[{}] = {}, t[{}] = {}",
                    i,
                    lo.time,
                    i + 1,
                    hi.time
                ),
            });
        }
        let divdf = (hi.value - lo.value) / dx;
        let defect = lo.slope + hi.slope - 2.0 * divdf;
        segments.push(Segment {
            third: (divdf - lo.slope - defect) / dx,
            fourth: defect / (dx * dx),
        });
    }
    Ok(segments)
}

/// Index of the knot starting the segment that brackets `query`.
///
/// Queries before the first knot map to segment 0 and queries past the last
/// knot map to the final segment.
#[inline]
fn bracket(query: f64, knots: &[Knot]) -> usize {
    let mut klo = 0;
    let mut khi = knots.len() - 1;
    while khi - klo > 1 {
        let k = (khi + klo) >> 1;
        if knots[k].time > query {
            khi = k;
        } else {
            klo = k;
        }
    }
    klo
}

/// Evaluate the interpolant at `query`.
///
/// `segments` must come from [`hermite`] on the same knots. Outside the knot
/// range the nearest segment's cubic is extrapolated.
pub(crate) fn hermint(query: f64, knots: &[Knot], segments: &[Segment]) -> f64 {
    debug_assert_eq!(segments.len() + 1, knots.len());
    let klo = bracket(query, knots);
    let k = knots[klo];
    let c = segments[klo];
    let dx = query - k.time;
    k.value + dx * (k.slope + dx * (c.third + dx * c.fourth))
}

/// First derivative of the interpolant at `query`.
pub(crate) fn hermint_slope(query: f64, knots: &[Knot], segments: &[Segment]) -> f64 {
    let klo = bracket(query, knots);
    let k = knots[klo];
    let c = segments[klo];
    let dx = query - k.time;
    k.slope + dx * (2.0 * c.third + 3.0 * dx * c.fourth)
}

/// Knots and their segment coefficients, built once and evaluated many times.
#[derive(Debug, Clone)]
pub struct HermiteSpline {
    knots: SmallVec<[Knot; INLINE_KNOTS]>,
    segments: Segments,
}

impl HermiteSpline {
    pub fn new(knots: &[Knot]) -> Result<Self> {
        let segments = hermite(knots)?;
        Ok(Self {
            knots: SmallVec::from_slice(knots),
            segments,
        })
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        hermint(t, &self.knots, &self.segments)
    }

    pub fn derivative(&self, t: f64) -> f64 {
        hermint_slope(t, &self.knots, &self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extrema_knots() -> Vec<Knot> {
        vec![
            Knot::extremum(6.5, 2.0),
            Knot::extremum(15.5, 14.0),
            Knot::extremum(30.5, 4.0),
            Knot::extremum(39.5, 18.0),
            Knot::extremum(54.5, 1.0),
            Knot::extremum(63.5, 11.0),
        ]
    }

    // -- hermite --

    #[test]
    fn one_segment_per_interval() {
        let segs = hermite(&extrema_knots()).unwrap();
        assert_eq!(segs.len(), 5);
    }

    #[test]
    fn linear_data_has_no_higher_order_terms() {
        // Slopes equal to the divided difference reproduce the straight line.
        let knots = [Knot::new(0.0, 1.0, 2.0), Knot::new(3.0, 7.0, 2.0)];
        let segs = hermite(&knots).unwrap();
        assert!(segs[0].third.abs() < 1e-12);
        assert!(segs[0].fourth.abs() < 1e-12);
        assert!((hermint(1.5, &knots, &segs) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_single_knot() {
        let err = hermite(&[Knot::extremum(0.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ForcingError::PreconditionViolation { .. }));
    }

    #[test]
    fn spline_needs_two_knots() {
        assert!(HermiteSpline::new(&[]).is_err());
        assert!(HermiteSpline::new(&[Knot::extremum(3.0, 1.0)]).is_err());
        let spline = HermiteSpline::new(&[Knot::extremum(0.0, 1.0), Knot::extremum(2.0, 5.0)]).unwrap();
        assert_eq!(spline.evaluate(0.0), 1.0);
    }

    #[test]
    fn rejects_repeated_time() {
        let knots = [Knot::extremum(5.0, 1.0), Knot::extremum(5.0, 3.0)];
        let err = hermite(&knots).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn rejects_decreasing_time() {
        let knots = [
            Knot::extremum(0.0, 1.0),
            Knot::extremum(8.0, 3.0),
            Knot::extremum(4.0, 2.0),
        ];
        let err = hermite(&knots).unwrap_err();
        assert!(err.to_string().contains("t[1] = 8"));
    }

    #[test]
    fn rejects_nan_time() {
        let knots = [Knot::extremum(0.0, 1.0), Knot::extremum(f64::NAN, 3.0)];
        assert!(hermite(&knots).is_err());
    }

    // -- hermint --

    #[test]
    fn exact_at_knots() {
        let spline = HermiteSpline::new(&extrema_knots()).unwrap();
        for k in spline.knots() {
            assert!((spline.evaluate(k.time) - k.value).abs() < 1e-10);
        }
    }

    #[test]
    fn zero_slope_at_knots() {
        let spline = HermiteSpline::new(&extrema_knots()).unwrap();
        for k in spline.knots() {
            assert!(spline.derivative(k.time).abs() < 1e-10);
        }
    }

    #[test]
    fn continuous_across_interior_knots() {
        let spline = HermiteSpline::new(&extrema_knots()).unwrap();
        for k in &spline.knots()[1..5] {
            let before = spline.evaluate(k.time - 1e-7);
            let after = spline.evaluate(k.time + 1e-7);
            assert!((before - k.value).abs() < 1e-6);
            assert!((after - k.value).abs() < 1e-6);
        }
    }

    #[test]
    fn stays_between_extrema_on_each_segment() {
        let spline = HermiteSpline::new(&extrema_knots()).unwrap();
        for pair in spline.knots().windows(2) {
            let (lo, hi) = (pair[0].value.min(pair[1].value), pair[0].value.max(pair[1].value));
            for s in 1..20 {
                let t = pair[0].time + (pair[1].time - pair[0].time) * s as f64 / 20.0;
                let v = spline.evaluate(t);
                assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
            }
        }
    }

    #[test]
    fn extrapolates_with_end_segments() {
        let knots = extrema_knots();
        let segs = hermite(&knots).unwrap();
        let first = knots[0];
        let dx = 5.0 - first.time;
        let expected = first.value + dx * (first.slope + dx * (segs[0].third + dx * segs[0].fourth));
        assert!((hermint(5.0, &knots, &segs) - expected).abs() < 1e-12);

        let last = knots[4];
        let dx = 70.0 - last.time;
        let expected = last.value + dx * (last.slope + dx * (segs[4].third + dx * segs[4].fourth));
        assert!((hermint(70.0, &knots, &segs) - expected).abs() < 1e-12);
    }

    #[test]
    fn midpoint_of_flat_ended_segment_is_mean() {
        // Zero end slopes give a symmetric cubic through the midpoint.
        let knots = [Knot::extremum(0.0, 0.0), Knot::extremum(10.0, 8.0)];
        let segs = hermite(&knots).unwrap();
        assert!((hermint(5.0, &knots, &segs) - 4.0).abs() < 1e-12);
    }
}
