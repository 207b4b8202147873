use crate::filter::Filter;
use crate::incident::Incident;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Per-severity counts over one collection. Derived, never stored upstream.
///
/// `total` counts every incident; the buckets only count recognized
/// severities, so they may sum to less than `total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl StatsSummary {
    pub fn bucket(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn count(&self, filter: Filter) -> usize {
        match filter.severity() {
            Some(severity) => self.bucket(severity),
            None => self.total,
        }
    }

    pub fn classified(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

pub fn aggregate(incidents: &[Incident]) -> StatsSummary {
    let mut stats = StatsSummary {
        total: incidents.len(),
        ..StatsSummary::default()
    };
    for incident in incidents {
        match incident.severity() {
            Some(Severity::Critical) => stats.critical += 1,
            Some(Severity::High) => stats.high += 1,
            Some(Severity::Medium) => stats.medium += 1,
            Some(Severity::Low) => stats.low += 1,
            None => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_severity(severity: Option<&str>) -> Incident {
        Incident {
            severity: severity.map(ToString::to_string),
            ..Incident::default()
        }
    }

    #[test]
    fn empty_collection_is_all_zero() {
        assert_eq!(aggregate(&[]), StatsSummary::default());
    }

    #[test]
    fn single_critical_incident() {
        let stats = aggregate(&[with_severity(Some("critical"))]);
        assert_eq!(
            stats,
            StatsSummary {
                total: 1,
                critical: 1,
                high: 0,
                medium: 0,
                low: 0,
            }
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let stats = aggregate(&[
            with_severity(Some("HIGH")),
            with_severity(Some("High")),
            with_severity(Some("low")),
        ]);
        assert_eq!(stats.high, 2);
        assert_eq!(stats.low, 1);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn unrecognized_severities_only_count_toward_total() {
        let incidents = vec![
            with_severity(Some("critical")),
            with_severity(Some("sev0")),
            with_severity(None),
            with_severity(Some("medium")),
        ];
        let stats = aggregate(&incidents);
        assert_eq!(stats.total, incidents.len());
        assert_eq!(stats.classified(), 2);
        assert!(stats.classified() < stats.total);
    }

    #[test]
    fn totals_hold_across_shapes() {
        let labels = [Some("critical"), Some("high"), Some("medium"), Some("low"), Some("x"), None];
        for n in 0..24 {
            let incidents: Vec<_> = (0..n).map(|i| with_severity(labels[i % labels.len()])).collect();
            let stats = aggregate(&incidents);
            assert_eq!(stats.total, incidents.len());
            assert!(stats.classified() <= stats.total);
            let all_known = incidents.iter().all(|i| i.severity().is_some());
            assert_eq!(stats.classified() == stats.total, all_known, "n={n}");
            assert_eq!(aggregate(&incidents), stats);
        }
    }

    #[test]
    fn count_follows_filter() {
        let stats = aggregate(&[with_severity(Some("high")), with_severity(Some("high"))]);
        assert_eq!(stats.count(Filter::All), 2);
        assert_eq!(stats.count(Filter::High), 2);
        assert_eq!(stats.count(Filter::Critical), 0);
    }
}
