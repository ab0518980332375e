//! Linear interpolation tables for tabulated heat capacities.

/// A fixed (temperature, cp) table, sorted ascending in temperature.
///
/// Evaluation interpolates linearly between points and extrapolates
/// linearly along the end segments outside the tabulated range.
/// Extrapolation is silent: callers downstream must tolerate values
/// outside the table, which trades physical accuracy for never
/// failing mid-flowsheet.
pub struct CpTable {
    points: &'static [(f64, f64)],
}

impl CpTable {
    /// Table points must be sorted ascending and contain at least two
    /// entries; both are debug-checked at evaluation.
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        Self { points }
    }

    pub fn eval(&self, t: f64) -> f64 {
        debug_assert!(self.points.len() >= 2);
        debug_assert!(self.points.windows(2).all(|w| w[0].0 < w[1].0));

        let pts = self.points;
        let n = pts.len();

        // Pick the segment: end segments double as extrapolation lines
        let seg = if t <= pts[0].0 {
            (pts[0], pts[1])
        } else if t >= pts[n - 1].0 {
            (pts[n - 2], pts[n - 1])
        } else {
            let hi = pts.partition_point(|p| p.0 < t);
            (pts[hi - 1], pts[hi])
        };

        let ((t0, c0), (t1, c1)) = seg;
        c0 + (c1 - c0) * (t - t0) / (t1 - t0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: CpTable = CpTable::new(&[(100.0, 10.0), (200.0, 20.0), (400.0, 30.0)]);

    #[test]
    fn hits_table_points() {
        assert_eq!(TABLE.eval(100.0), 10.0);
        assert_eq!(TABLE.eval(200.0), 20.0);
        assert_eq!(TABLE.eval(400.0), 30.0);
    }

    #[test]
    fn interpolates_between_points() {
        assert!((TABLE.eval(150.0) - 15.0).abs() < 1e-12);
        assert!((TABLE.eval(300.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_with_end_segments() {
        // Below: slope 0.1 per K; above: slope 0.05 per K
        assert!((TABLE.eval(50.0) - 5.0).abs() < 1e-12);
        assert!((TABLE.eval(500.0) - 35.0).abs() < 1e-12);
    }
}
