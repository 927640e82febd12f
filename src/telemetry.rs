//! Run statistics
//!
//! Process-wide counters for one hunting session:
//! - addresses generated
//! - matches found, in total and per rule category
//!
//! Created at startup, shared by every worker and read by the shutdown
//! handler. Nothing is persisted; a restart starts from zero.

use chrono::{DateTime, Local};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Shared counters, safe to bump from concurrent workers
pub struct RunStatistics {
    iterations: AtomicU64,
    matches: AtomicU64,
    matches_by_rule: DashMap<String, u64>,
    started: Instant,
    started_at: DateTime<Local>,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self {
            iterations: AtomicU64::new(0),
            matches: AtomicU64::new(0),
            matches_by_rule: DashMap::new(),
            started: Instant::now(),
            started_at: Local::now(),
        }
    }

    /// Count one generated address; returns the new total
    #[inline]
    pub fn record_iteration(&self) -> u64 {
        self.iterations.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Count one match for `category`
    pub fn record_match(&self, category: &str) {
        self.matches.fetch_add(1, Ordering::Relaxed);
        *self.matches_by_rule.entry(category.to_string()).or_insert(0) += 1;
    }

    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn matches(&self) -> u64 {
        self.matches.load(Ordering::Relaxed)
    }

    /// Point-in-time copy for reporting
    pub fn snapshot(&self) -> RunSummary {
        let mut matches_by_rule: Vec<(String, u64)> = self
            .matches_by_rule
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        matches_by_rule.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        RunSummary {
            iterations: self.iterations(),
            matches: self.matches(),
            elapsed: self.started.elapsed(),
            started_at: self.started_at,
            matches_by_rule,
        }
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen statistics, rendered by the shutdown report
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub iterations: u64,
    pub matches: u64,
    pub elapsed: Duration,
    pub started_at: DateTime<Local>,
    /// Sorted by count, highest first
    pub matches_by_rule: Vec<(String, u64)>,
}

impl RunSummary {
    /// Addresses per second
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }

    /// Elapsed time in whole seconds, e.g. `1h 2m 5s`
    pub fn humanized_elapsed(&self) -> String {
        let whole = Duration::from_secs(self.elapsed.as_secs());
        if whole.is_zero() {
            return "0s".to_string();
        }
        humantime::format_duration(whole).to_string()
    }

    /// Shutdown report text
    pub fn report(&self) -> String {
        let mut out = format!(
            r#"
🛑 Hunt stopped.

   Started:            {}
   Total run time:     {}
   Addresses tried:    {}
   Matches found:      {}
   Rate:               {:.0} addr/s
"#,
            self.started_at.format("%Y-%m-%d %H:%M:%S"),
            self.humanized_elapsed(),
            self.iterations,
            self.matches,
            self.rate(),
        );

        if !self.matches_by_rule.is_empty() {
            out.push_str("\n   By category:\n");
            for (rule, count) in &self.matches_by_rule {
                out.push_str(&format!("     {:<20} {}\n", rule, count));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = RunStatistics::new();
        assert_eq!(stats.record_iteration(), 1);
        assert_eq!(stats.record_iteration(), 2);
        stats.record_match("Digit-run");
        stats.record_match("pddo");
        stats.record_match("Digit-run");

        let summary = stats.snapshot();
        assert_eq!(summary.iterations, 2);
        assert_eq!(summary.matches, 3);
        assert_eq!(
            summary.matches_by_rule,
            vec![("Digit-run".to_string(), 2), ("pddo".to_string(), 1)]
        );
    }

    #[test]
    fn test_snapshot_does_not_reset() {
        let stats = RunStatistics::new();
        stats.record_iteration();
        let _ = stats.snapshot();
        assert_eq!(stats.snapshot().iterations, 1);
    }

    #[test]
    fn test_report_shows_exact_counts() {
        let summary = RunSummary {
            iterations: 123_456,
            matches: 7,
            elapsed: Duration::from_secs(3725),
            started_at: Local::now(),
            matches_by_rule: vec![("Lowercase-run".to_string(), 7)],
        };

        let report = summary.report();
        assert!(report.contains("123456"));
        assert!(report.contains("Matches found:      7"));
        assert!(report.contains("1h 2m 5s"));
        assert!(report.contains("Lowercase-run"));
    }

    #[test]
    fn test_zero_elapsed() {
        let summary = RunSummary {
            iterations: 0,
            matches: 0,
            elapsed: Duration::from_millis(300),
            started_at: Local::now(),
            matches_by_rule: Vec::new(),
        };
        assert_eq!(summary.humanized_elapsed(), "0s");
        assert!(summary.rate() >= 0.0);
        assert!(!summary.report().contains("By category"));
    }

    #[test]
    fn test_concurrent_increments() {
        let stats = std::sync::Arc::new(RunStatistics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = stats.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_iteration();
                        stats.record_match("Digit-run");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let summary = stats.snapshot();
        assert_eq!(summary.iterations, 4000);
        assert_eq!(summary.matches, 4000);
        assert_eq!(summary.matches_by_rule[0].1, 4000);
    }
}
