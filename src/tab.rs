//! Tab Identifiers
//!
//! The closed set of dashboard tabs and the per-metric trackers they show.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// A dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Heart,
    Sleep,
    Bmi,
    Water,
    Nutrition,
    Workout,
    Profile,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 8] = [
        Tab::Overview,
        Tab::Heart,
        Tab::Sleep,
        Tab::Bmi,
        Tab::Water,
        Tab::Nutrition,
        Tab::Workout,
        Tab::Profile,
    ];

    /// Id used in the `tab` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Heart => "heart",
            Tab::Sleep => "sleep",
            Tab::Bmi => "bmi",
            Tab::Water => "water",
            Tab::Nutrition => "nutrition",
            Tab::Workout => "workout",
            Tab::Profile => "profile",
        }
    }

    /// Label shown in the tab strip
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Heart => "Heart Rate",
            Tab::Sleep => "Sleep",
            Tab::Bmi => "BMI",
            Tab::Water => "Water",
            Tab::Nutrition => "Nutrition",
            Tab::Workout => "Workout",
            Tab::Profile => "Profile",
        }
    }

    /// The single tracker a metric tab shows full width
    pub fn tracker(&self) -> Option<Tracker> {
        match self {
            Tab::Heart => Some(Tracker::HeartRate),
            Tab::Sleep => Some(Tracker::Sleep),
            Tab::Bmi => Some(Tracker::Bmi),
            Tab::Water => Some(Tracker::WaterIntake),
            Tab::Nutrition => Some(Tracker::Nutrition),
            Tab::Workout => Some(Tracker::Workout),
            Tab::Overview | Tab::Profile => None,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownTab(s.to_string()))
    }
}

/// Per-metric display collaborators
///
/// The core only decides where these are mounted; what they draw is up
/// to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tracker {
    HeartRate,
    Sleep,
    Bmi,
    WaterIntake,
    Nutrition,
    Workout,
}

impl Tracker {
    pub fn title(&self) -> &'static str {
        match self {
            Tracker::HeartRate => "Heart Rate Monitor",
            Tracker::Sleep => "Sleep Tracker",
            Tracker::Bmi => "BMI Calculator",
            Tracker::WaterIntake => "Water Intake",
            Tracker::Nutrition => "Nutrition Tracker",
            Tracker::Workout => "Workout Tracker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_tab() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case() {
        assert!(matches!("xyz".parse::<Tab>(), Err(DashboardError::UnknownTab(_))));
        assert!("Heart".parse::<Tab>().is_err());
        assert!("".parse::<Tab>().is_err());
    }

    #[test]
    fn test_default_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_metric_tabs_map_to_distinct_trackers() {
        let trackers: Vec<Tracker> = Tab::ALL.iter().filter_map(|t| t.tracker()).collect();
        assert_eq!(trackers.len(), 6);
        assert_eq!(Tab::Water.tracker(), Some(Tracker::WaterIntake));
        assert_eq!(Tab::Overview.tracker(), None);
        assert_eq!(Tab::Profile.tracker(), None);
    }

    #[test]
    fn test_serde_uses_url_id() {
        assert_eq!(serde_json::to_string(&Tab::Bmi).unwrap(), "\"bmi\"");
        let tab: Tab = serde_json::from_str("\"nutrition\"").unwrap();
        assert_eq!(tab, Tab::Nutrition);
    }
}
