//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and population data for a single
//! generation, so callers can observe a running world without inspecting
//! the grid.

/// Timing and population metrics collected during a single step.
///
/// The engine fills these in after each `step()`; the most recent values
/// are available from [`World::last_metrics`](crate::World::last_metrics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation number reached by this step (1 for the first step).
    pub generation: u64,
    /// Wall-clock time for the rule pass and buffer swap, in microseconds.
    pub total_us: u64,
    /// Cells that were dead and became alive.
    pub births: usize,
    /// Cells that were alive and died.
    pub deaths: usize,
    /// Live cells after the step.
    pub alive: usize,
}

impl StepMetrics {
    /// Whether the step left the population unchanged cell for cell.
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.generation, 0);
        assert_eq!(m.total_us, 0);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.alive, 0);
        assert!(m.is_stable());
    }

    #[test]
    fn births_or_deaths_are_unstable() {
        let m = StepMetrics {
            births: 1,
            ..Default::default()
        };
        assert!(!m.is_stable());
        let m = StepMetrics {
            deaths: 2,
            ..Default::default()
        };
        assert!(!m.is_stable());
    }
}
