//! Generator performance counters

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Snapshot of a generator's counters and budgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Calls to any `generate_*` entry point that consults the catalogue
    pub generations: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Generations served from the limited fallback set
    pub degraded_generations: u64,
    /// Generations that ended in error content
    pub failed_generations: u64,
    /// Full-catalogue renders cut short by a budget
    pub truncations: u64,
    pub cache_entries: usize,
    pub cache_capacity: usize,
    pub caching_enabled: bool,
    pub max_commands: usize,
    pub max_characters: usize,
}

impl PerformanceMetrics {
    /// Share of cache lookups that hit, 0.0 when nothing was looked up
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        let mut metrics = PerformanceMetrics::default();
        assert_eq!(metrics.hit_rate(), 0.0);

        metrics.cache_hits = 3;
        metrics.cache_misses = 1;
        assert_eq!(metrics.hit_rate(), 0.75);
    }

    #[test]
    fn test_to_json() {
        let metrics = PerformanceMetrics {
            generations: 2,
            ..PerformanceMetrics::default()
        };
        let json = metrics.to_json().unwrap();
        assert!(json.contains("\"generations\": 2"));
    }
}
