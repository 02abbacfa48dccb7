/// Axis-aligned orthorhombic simulation cell.
///
/// Supplied by format readers and trajectory iterators; consumed by the
/// periodic wrap/unwrap operations. Lengths are always derived from the
/// bounds, never stored. Triclinic cells are out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimBox {
    pub mins: [f64; 3],
    pub maxs: [f64; 3],
}

impl SimBox {
    pub fn new(mins: [f64; 3], maxs: [f64; 3]) -> Self {
        Self { mins, maxs }
    }

    /// Cell with the given edge lengths and its minimum corner at the origin.
    pub fn from_lengths(lengths: [f64; 3]) -> Self {
        Self {
            mins: [0.0; 3],
            maxs: lengths,
        }
    }

    #[inline]
    pub fn length(&self, axis: usize) -> f64 {
        self.maxs[axis] - self.mins[axis]
    }

    #[inline]
    pub fn lengths(&self) -> [f64; 3] {
        [self.length(0), self.length(1), self.length(2)]
    }

    /// Replaces the bounds along one axis. Only `mirror` resizes a box.
    pub fn set_axis(&mut self, axis: usize, min: f64, max: f64) {
        self.mins[axis] = min;
        self.maxs[axis] = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_are_derived_from_bounds() {
        let cell = SimBox::new([-1.0, 0.0, 2.0], [3.0, 5.0, 4.0]);
        assert_eq!(cell.lengths(), [4.0, 5.0, 2.0]);
        assert_eq!(cell.length(1), 5.0);
    }

    #[test]
    fn from_lengths_anchors_at_origin() {
        let cell = SimBox::from_lengths([10.0, 20.0, 30.0]);
        assert_eq!(cell.mins, [0.0; 3]);
        assert_eq!(cell.maxs, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn set_axis_replaces_one_dimension() {
        let mut cell = SimBox::from_lengths([1.0, 1.0, 1.0]);
        cell.set_axis(2, -2.0, 6.0);
        assert_eq!(cell.mins, [0.0, 0.0, -2.0]);
        assert_eq!(cell.maxs, [1.0, 1.0, 6.0]);
        assert_eq!(cell.length(2), 8.0);
    }
}
