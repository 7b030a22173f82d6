use nalgebra::DVector;

/// A bounded little-endian mixed-radix odometer.
///
/// Digit `i` counts through `[0, bounds[i])`; digit 0 increments fastest.
/// A counter with zero digits holds exactly one state (the empty vector)
/// and becomes invalid on its first advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorCounter {
    current: DVector<i64>,
    bounds: DVector<i64>,
    valid: bool,
}

impl VectorCounter {
    /// Create a counter at all zeros with the given exclusive upper bounds
    pub fn new(bounds: DVector<i64>) -> Self {
        debug_assert!(bounds.iter().all(|&b| b >= 1), "digit bounds must be positive");
        Self {
            current: DVector::zeros(bounds.len()),
            bounds,
            valid: true,
        }
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Check if the counter has digits
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Current digit values
    pub fn current(&self) -> &DVector<i64> {
        &self.current
    }

    /// False once every state has been visited
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Step to the next state. Returns false when the counter rolls over,
    /// after which it is no longer valid.
    pub fn advance(&mut self) -> bool {
        if !self.valid {
            return false;
        }
        for digit in 0..self.current.len() {
            self.current[digit] += 1;
            if self.current[digit] < self.bounds[digit] {
                return true;
            }
            self.current[digit] = 0;
        }
        self.valid = false;
        false
    }

    /// Restart the sweep from all zeros
    pub fn reset(&mut self) {
        self.current.fill(0);
        self.valid = true;
    }
}
