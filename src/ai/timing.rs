use std::fmt;
use std::time::Duration;

/// Wall-clock cost of both searches for one AI turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    pub minimax: Duration,
    pub alpha_beta: Duration,
}

/// Per-round search timings for one match, in play order.
#[derive(Debug, Clone, Default)]
pub struct TimingRecord {
    rounds: Vec<RoundTiming>,
}

impl TimingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, minimax: Duration, alpha_beta: Duration) {
        self.rounds.push(RoundTiming {
            minimax,
            alpha_beta,
        });
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    pub fn rounds(&self) -> &[RoundTiming] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn total_minimax(&self) -> Duration {
        self.rounds.iter().map(|r| r.minimax).sum()
    }

    pub fn total_alpha_beta(&self) -> Duration {
        self.rounds.iter().map(|r| r.alpha_beta).sum()
    }

    /// Total minimax time over total alpha-beta time.
    pub fn speedup(&self) -> Option<f64> {
        let alpha_beta = self.total_alpha_beta();
        if self.is_empty() || alpha_beta.is_zero() {
            return None;
        }
        Some(self.total_minimax().as_secs_f64() / alpha_beta.as_secs_f64())
    }
}

impl fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round | Minimax (s) | Alpha-Beta (s)")?;
        for (i, round) in self.rounds.iter().enumerate() {
            writeln!(
                f,
                "{:^6}| {:<12.5}| {:.5}",
                i + 1,
                round.minimax.as_secs_f64(),
                round.alpha_beta.as_secs_f64()
            )?;
        }
        Ok(())
    }
}
