//! Template selection.
//!
//! Which template a session uses is the only non-deterministic step in generation,
//! so it sits behind [`TemplatePicker`]. Production uses [`RandomPicker`]; tests and
//! the CLI's `--template` option use [`FixedPicker`].

/// Chooses one template out of `count` candidates.
pub trait TemplatePicker {
    /// Returns an index into a list of `count >= 1` candidates. An index past the end
    /// is reported by the caller as a missing template.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform random choice.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: fastrand::Rng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A picker whose sequence of choices is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplatePicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.usize(..count)
    }
}

/// Always picks the same position, whatever the number of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl TemplatePicker for FixedPicker {
    fn pick(&mut self, _count: usize) -> usize {
        self.0
    }
}

impl<P: TemplatePicker + ?Sized> TemplatePicker for &mut P {
    fn pick(&mut self, count: usize) -> usize {
        (**self).pick(count)
    }
}

impl<P: TemplatePicker + ?Sized> TemplatePicker for Box<P> {
    fn pick(&mut self, count: usize) -> usize {
        (**self).pick(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_picks_stay_in_range() {
        let mut picker = RandomPicker::new();
        for count in 1..20 {
            for _ in 0..50 {
                assert!(picker.pick(count) < count);
            }
        }
    }

    #[test]
    fn random_picks_reach_every_template() {
        let mut picker = RandomPicker::with_seed(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[picker.pick(5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn seeded_pickers_repeat_themselves() {
        let mut a = RandomPicker::with_seed(42);
        let mut b = RandomPicker::with_seed(42);
        let left: Vec<usize> = (0..32).map(|_| a.pick(5)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.pick(5)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn fixed_picker_ignores_the_candidate_count() {
        let mut picker = FixedPicker(4);
        assert_eq!(picker.pick(5), 4);
        assert_eq!(picker.pick(3), 4);
    }

    #[test]
    fn boxed_pickers_delegate() {
        let mut picker: Box<dyn TemplatePicker> = Box::new(FixedPicker(2));
        assert_eq!(picker.pick(3), 2);
    }
}
