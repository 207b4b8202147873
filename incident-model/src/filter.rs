use crate::incident::Incident;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Critical,
    High,
    Medium,
    Low,
}

impl Filter {
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Critical,
        Filter::High,
        Filter::Medium,
        Filter::Low,
    ];

    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::All => None,
            Self::Critical => Some(Severity::Critical),
            Self::High => Some(Severity::High),
            Self::Medium => Some(Severity::Medium),
            Self::Low => Some(Severity::Low),
        }
    }

    pub fn label(self) -> &'static str {
        self.severity().map(Severity::label).unwrap_or("All")
    }

    pub fn matches(self, incident: &Incident) -> bool {
        match self.severity() {
            None => true,
            Some(wanted) => incident.severity() == Some(wanted),
        }
    }
}

impl From<Severity> for Filter {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Critical => Self::Critical,
            Severity::High => Self::High,
            Severity::Medium => Self::Medium,
            Severity::Low => Self::Low,
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Severity::parse(s)
            .map(Self::from)
            .ok_or_else(|| format!("unknown filter '{s}'"))
    }
}

pub fn visible(incidents: &[Incident], filter: Filter) -> Vec<&Incident> {
    incidents.iter().filter(|i| filter.matches(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: &str, severity: Option<&str>) -> Incident {
        Incident {
            id: id.into(),
            message: format!("incident {id}"),
            severity: severity.map(ToString::to_string),
            ..Incident::default()
        }
    }

    fn ids(list: &[&Incident]) -> Vec<String> {
        list.iter().map(|i| i.id.0.clone()).collect()
    }

    #[test]
    fn all_is_identity() {
        let incidents = vec![
            incident("3", Some("low")),
            incident("1", None),
            incident("2", Some("weird")),
        ];
        let shown = visible(&incidents, Filter::All);
        assert_eq!(shown.len(), incidents.len());
        assert!(shown.iter().zip(&incidents).all(|(a, b)| *a == b));
    }

    #[test]
    fn severity_filter_keeps_order_and_matches_case_insensitively() {
        let incidents = vec![
            incident("a", Some("High")),
            incident("b", Some("low")),
            incident("c", Some("HIGH")),
            incident("d", None),
            incident("e", Some("high")),
        ];
        let shown = visible(&incidents, Filter::High);
        assert_eq!(ids(&shown), vec!["a", "c", "e"]);
        assert!(shown.iter().all(|i| i.severity() == Some(Severity::High)));
    }

    #[test]
    fn one_of_each_severity_toggles_through_all_tabs() {
        let mixed = vec![
            incident("1", Some("critical")),
            incident("2", Some("high")),
            incident("3", Some("medium")),
            incident("4", Some("low")),
            incident("5", Some("unknown")),
        ];
        assert_eq!(visible(&mixed, Filter::All).len(), 5);
        for filter in [Filter::Critical, Filter::High, Filter::Medium, Filter::Low] {
            assert_eq!(visible(&mixed, filter).len(), 1, "{filter:?}");
        }
    }

    #[test]
    fn single_critical_scenario() {
        let incidents = vec![incident("1", Some("critical"))];
        assert_eq!(ids(&visible(&incidents, Filter::Critical)), vec!["1"]);
        assert!(visible(&incidents, Filter::Low).is_empty());
    }

    #[test]
    fn parses_names() {
        assert_eq!("ALL".parse::<Filter>(), Ok(Filter::All));
        assert_eq!("Medium".parse::<Filter>(), Ok(Filter::Medium));
        assert!("severe".parse::<Filter>().is_err());
        assert_eq!(Filter::ALL.map(Filter::label), ["All", "Critical", "High", "Medium", "Low"]);
    }
}
