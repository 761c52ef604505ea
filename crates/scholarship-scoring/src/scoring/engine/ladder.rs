//! Threshold tables backing the scoring rubric.

/// Ordered `(lower_bound, value)` steps, highest bound first. The first step
/// whose bound the input reaches wins; inputs below every bound get the floor.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<K: 'static, V: 'static> {
    steps: &'static [(K, V)],
    floor: V,
}

impl<K, V> Ladder<K, V>
where
    K: PartialOrd + Copy,
    V: Copy,
{
    pub const fn new(steps: &'static [(K, V)], floor: V) -> Self {
        Self { steps, floor }
    }

    pub fn lookup(&self, input: K) -> V {
        self.steps
            .iter()
            .find(|(bound, _)| input >= *bound)
            .map(|(_, value)| *value)
            .unwrap_or(self.floor)
    }

    pub fn steps(&self) -> &'static [(K, V)] {
        self.steps
    }

    pub fn floor(&self) -> V {
        self.floor
    }
}

/// Linear interpolation between `(x, y)` knots sorted by `x`, held flat
/// outside the first and last knot.
#[derive(Debug, Clone, Copy)]
pub struct PiecewiseLinear {
    knots: &'static [(f64, f64)],
}

impl PiecewiseLinear {
    pub const fn new(knots: &'static [(f64, f64)]) -> Self {
        Self { knots }
    }

    pub fn knots(&self) -> &'static [(f64, f64)] {
        self.knots
    }

    pub fn eval(&self, x: f64) -> f64 {
        let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) =
            (self.knots.first(), self.knots.last())
        else {
            return 0.0;
        };

        if x <= first_x {
            return first_y;
        }
        if x > last_x {
            return last_y;
        }

        for pair in self.knots.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                return y0 + ((x - x0) / (x1 - x0)) * (y1 - y0);
            }
        }

        last_y
    }
}
