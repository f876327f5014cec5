/// Linear count-up from 0 to `target` over a fixed number of ticks.
///
/// After tick `k` the value is `floor(k * target / steps)`, clamped to `target`.
/// Integer arithmetic keeps the last tick landing exactly on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    steps: u32,
    ticks: u32,
    value: u64,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            ticks: 0,
            value: 0,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.target == 0 || self.ticks >= self.steps
    }

    /// Advances one tick and returns the value to display. No-op once finished.
    pub fn tick(&mut self) -> u64 {
        if self.is_finished() {
            return self.value;
        }
        self.ticks += 1;
        let scaled = u128::from(self.target) * u128::from(self.ticks) / u128::from(self.steps);
        self.value = u64::try_from(scaled).unwrap_or(self.target).min(self.target);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_tick_is_one_hundredth_floored() {
        let mut c = CounterAnimation::new(1247, 100);
        assert_eq!(c.tick(), 12);
    }

    #[rstest]
    fn lands_exactly_on_target_after_all_steps() {
        let mut c = CounterAnimation::new(1247, 100);
        for _ in 0..100 {
            c.tick();
        }
        assert_eq!(c.value(), 1247);
        assert!(c.is_finished());
        assert_eq!(c.tick(), 1247);
        assert_eq!(c.tick(), 1247);
    }

    #[rstest]
    fn zero_target_finishes_on_first_tick() {
        let mut c = CounterAnimation::new(0, 100);
        assert_eq!(c.tick(), 0);
        assert!(c.is_finished());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(99)]
    #[case(100)]
    #[case(1247)]
    #[case(8934)]
    #[case(35680)]
    #[case(u64::MAX)]
    fn never_decreases_never_overshoots(#[case] target: u64) {
        let mut c = CounterAnimation::new(target, 100);
        let mut prev = c.value();
        for _ in 0..150 {
            let v = c.tick();
            assert!(v >= prev, "dropped from {prev} to {v}");
            assert!(v <= target);
            prev = v;
        }
        assert_eq!(prev, target);
    }

    #[rstest]
    fn small_targets_stall_then_finish() {
        let mut c = CounterAnimation::new(3, 100);
        assert_eq!(c.tick(), 0);
        for _ in 1..100 {
            c.tick();
        }
        assert_eq!(c.value(), 3);
    }

    #[rstest]
    fn instances_are_independent() {
        let mut a = CounterAnimation::new(1247, 100);
        let mut b = CounterAnimation::new(35680, 100);
        a.tick();
        a.tick();
        assert_eq!(b.value(), 0);
        assert_eq!(b.tick(), 356);
        assert_eq!(a.value(), 24);
    }

    #[rstest]
    fn zero_steps_is_treated_as_one() {
        let mut c = CounterAnimation::new(50, 0);
        assert_eq!(c.tick(), 50);
        assert!(c.is_finished());
    }
}
