use std::time::Instant;

/// Optional cutoffs for a single engine run.
///
/// Both limits default to off, in which case an engine runs until its own
/// termination condition (goal found, frontier exhausted, all branches
/// decided). Hitting a limit is reported as an aborted run, distinct from
/// the no-solution outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    /// Wall-clock limit in seconds.
    pub time_limit: Option<f64>,
    /// Maximum number of nodes to expand.
    pub expansion_limit: Option<usize>,
}

impl SearchLimits {
    /// Returns whether the elapsed time exceeds the time limit.
    pub fn out_of_time(&self, watch: &Stopwatch) -> bool {
        self.time_limit
            .map_or(false, |limit| watch.elapsed() >= limit)
    }

    /// Returns whether the expansion count exceeds the expansion limit.
    pub fn out_of_expansions(&self, expanded: usize) -> bool {
        self.expansion_limit.map_or(false, |limit| expanded >= limit)
    }
}

/// Elapsed-time measurement for one engine run.
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Starts measuring.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Returns the elapsed time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_limits() {
        let limits = SearchLimits::default();
        let watch = Stopwatch::start();

        assert!(!limits.out_of_time(&watch));
        assert!(!limits.out_of_expansions(usize::MAX));
    }

    #[test]
    fn test_expansion_limit() {
        let limits = SearchLimits {
            expansion_limit: Some(10),
            ..Default::default()
        };

        assert!(!limits.out_of_expansions(9));
        assert!(limits.out_of_expansions(10));
        assert!(limits.out_of_expansions(11));
    }

    #[test]
    fn test_zero_time_limit() {
        let limits = SearchLimits {
            time_limit: Some(0.0),
            ..Default::default()
        };
        let watch = Stopwatch::start();

        assert!(limits.out_of_time(&watch));
    }

    #[test]
    fn test_stopwatch_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed();
        let second = watch.elapsed();

        assert!(second >= first);
        assert!(first >= 0.0);
    }
}
