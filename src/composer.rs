//! View Composer
//!
//! Pure mapping from the active tab and the user's data to a layout tree.
//! Renderers walk the tree; nothing in here touches the DOM.

use serde::Serialize;

use crate::query::tab_href;
use crate::session::UserProfile;
use crate::tab::{Tab, Tracker};

/// Profile defaults used when a field is missing from the session
pub const DEFAULT_WEIGHT: &str = "68.2 kg";
pub const DEFAULT_HEIGHT: &str = "175 cm";
pub const DEFAULT_BMI: f64 = 22.3;
pub const DEFAULT_AGE: u32 = 32;
pub const DEFAULT_MEMBER_SINCE: &str = "January 2023";

/// Overview grid, top to bottom
pub const OVERVIEW_ROWS: [[Tracker; 2]; 3] = [
    [Tracker::HeartRate, Tracker::Sleep],
    [Tracker::WaterIntake, Tracker::Bmi],
    [Tracker::Nutrition, Tracker::Workout],
];

/// Profile merged with today's simulated activity figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub name: String,
    pub steps: u32,
    pub calories_burned: u32,
    pub water_glasses: u32,
    pub meals_tracked: u32,
    pub weight: String,
    pub height: String,
    pub bmi: f64,
    pub age: u32,
    pub member_since: String,
}

impl DashboardData {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            steps: 8435,
            calories_burned: 340,
            water_glasses: 5,
            meals_tracked: 3,
            weight: text_or(&profile.weight, DEFAULT_WEIGHT),
            height: text_or(&profile.height, DEFAULT_HEIGHT),
            bmi: profile.bmi.filter(|bmi| *bmi != 0.0).unwrap_or(DEFAULT_BMI),
            age: profile.age.filter(|age| *age != 0).unwrap_or(DEFAULT_AGE),
            member_since: text_or(&profile.member_since, DEFAULT_MEMBER_SINCE),
        }
    }
}

// Blank values count as missing.
fn text_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Direction of change since yesterday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }
}

/// Trend arrow plus its caption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendIndicator {
    pub trend: Trend,
    pub label: String,
}

/// One of the headline figures on the overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryFigure {
    pub title: String,
    pub value: String,
    pub description: String,
    pub trend: Option<TrendIndicator>,
}

impl SummaryFigure {
    fn new(title: &str, value: String, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value,
            description: description.to_string(),
            trend: None,
        }
    }

    fn trend(mut self, trend: Trend, label: &str) -> Self {
        self.trend = Some(TrendIndicator {
            trend,
            label: label.to_string(),
        });
        self
    }
}

/// Labelled value on the profile card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileFact {
    pub label: String,
    pub value: String,
}

/// Health goal row with a fixed target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthGoal {
    pub label: String,
    pub target: String,
}

/// Read-only identity card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub member_since: String,
    pub facts: Vec<ProfileFact>,
    pub goals: Vec<HealthGoal>,
}

/// Content area for one tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Layout {
    Overview {
        figures: Vec<SummaryFigure>,
        rows: Vec<[Tracker; 2]>,
    },
    /// One tracker, full width
    Single { tracker: Tracker },
    Profile(ProfileCard),
}

impl Layout {
    /// Which tab this layout belongs to
    pub fn tab(&self) -> Tab {
        match self {
            Layout::Overview { .. } => Tab::Overview,
            Layout::Single { tracker } => match tracker {
                Tracker::HeartRate => Tab::Heart,
                Tracker::Sleep => Tab::Sleep,
                Tracker::Bmi => Tab::Bmi,
                Tracker::WaterIntake => Tab::Water,
                Tracker::Nutrition => Tab::Nutrition,
                Tracker::Workout => Tab::Workout,
            },
            Layout::Profile(_) => Tab::Profile,
        }
    }

    /// Every tracker mounted by this layout, in render order
    pub fn trackers(&self) -> Vec<Tracker> {
        match self {
            Layout::Overview { rows, .. } => rows.iter().flatten().copied().collect(),
            Layout::Single { tracker } => vec![*tracker],
            Layout::Profile(_) => Vec::new(),
        }
    }
}

/// Build the layout for `tab`
pub fn compose(tab: Tab, data: &DashboardData) -> Layout {
    match tab {
        Tab::Overview => Layout::Overview {
            figures: summary_figures(data),
            rows: OVERVIEW_ROWS.to_vec(),
        },
        Tab::Heart => Layout::Single { tracker: Tracker::HeartRate },
        Tab::Sleep => Layout::Single { tracker: Tracker::Sleep },
        Tab::Bmi => Layout::Single { tracker: Tracker::Bmi },
        Tab::Water => Layout::Single { tracker: Tracker::WaterIntake },
        Tab::Nutrition => Layout::Single { tracker: Tracker::Nutrition },
        Tab::Workout => Layout::Single { tracker: Tracker::Workout },
        Tab::Profile => Layout::Profile(profile_card(data)),
    }
}

fn summary_figures(data: &DashboardData) -> Vec<SummaryFigure> {
    vec![
        SummaryFigure::new("Steps", data.steps.to_string(), "Daily Goal: 10,000 steps")
            .trend(Trend::Up, "12% from yesterday"),
        SummaryFigure::new(
            "Calories Burned",
            format!("{} kcal", data.calories_burned),
            "Daily Goal: 500 kcal",
        )
        .trend(Trend::Neutral, "Same as yesterday"),
        SummaryFigure::new(
            "Water Intake",
            format!("{} glasses", data.water_glasses),
            "Daily Goal: 8 glasses",
        )
        .trend(Trend::Down, "1 less than yesterday"),
        SummaryFigure::new(
            "Meals Tracked",
            data.meals_tracked.to_string(),
            "Breakfast, Lunch, Dinner",
        ),
    ]
}

fn profile_card(data: &DashboardData) -> ProfileCard {
    let fact = |label: &str, value: String| ProfileFact {
        label: label.to_string(),
        value,
    };
    let goal = |label: &str, target: &str| HealthGoal {
        label: label.to_string(),
        target: target.to_string(),
    };

    ProfileCard {
        name: data.name.clone(),
        member_since: data.member_since.clone(),
        facts: vec![
            fact("Height", data.height.clone()),
            fact("Weight", data.weight.clone()),
            fact("BMI", data.bmi.to_string()),
            fact("Age", data.age.to_string()),
        ],
        goals: vec![
            goal("Daily Steps", "10,000 steps"),
            goal("Water Intake", "8 glasses"),
            goal("Sleep Duration", "8 hours"),
        ],
    }
}

/// Entry in the tab strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabLink {
    pub tab: Tab,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Tab strip with `active` highlighted
pub fn tab_strip(base: &str, active: Tab) -> Vec<TabLink> {
    Tab::ALL
        .into_iter()
        .map(|tab| TabLink {
            tab,
            label: tab.label().to_string(),
            href: tab_href(base, tab),
            active: tab == active,
        })
        .collect()
}

/// Full dashboard page for a signed-in user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub greeting: String,
    pub subtitle: String,
    pub active: Tab,
    pub tabs: Vec<TabLink>,
    pub layout: Layout,
}

impl Page {
    pub fn build(base: &str, active: Tab, profile: &UserProfile) -> Self {
        let data = DashboardData::from_profile(profile);
        Self {
            greeting: format!("Welcome back, {}", data.name),
            subtitle: "Here's an overview of your health metrics".to_string(),
            active,
            tabs: tab_strip(base, active),
            layout: compose(active, &data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_data() -> DashboardData {
        DashboardData::from_profile(&UserProfile::new("Jordan"))
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let data = bare_data();
        assert_eq!(data.weight, "68.2 kg");
        assert_eq!(data.height, "175 cm");
        assert_eq!(data.bmi, 22.3);
        assert_eq!(data.age, 32);
        assert_eq!(data.member_since, "January 2023");
    }

    #[test]
    fn test_blank_and_zero_fields_use_defaults() {
        let session = crate::Session::from_json(
            r#"{"authenticated":true,"profile":{"name":"P","weight":"","height":"","bmi":0.0,"age":0,"memberSince":""}}"#,
        )
        .unwrap();
        let data = DashboardData::from_profile(session.user().unwrap());
        assert_eq!(data.weight, "68.2 kg");
        assert_eq!(data.height, "175 cm");
        assert_eq!(data.bmi, 22.3);
        assert_eq!(data.age, 32);
        assert_eq!(data.member_since, "January 2023");
    }

    #[test]
    fn test_profile_values_override_defaults() {
        let profile = UserProfile::new("Jordan")
            .weight("81 kg")
            .height("182 cm")
            .bmi(24.5)
            .age(45);
        let data = DashboardData::from_profile(&profile);
        assert_eq!(data.weight, "81 kg");
        assert_eq!(data.height, "182 cm");
        assert_eq!(data.bmi, 24.5);
        assert_eq!(data.age, 45);
    }

    #[test]
    fn test_every_tab_renders_its_own_branch() {
        let data = bare_data();
        for tab in Tab::ALL {
            assert_eq!(compose(tab, &data).tab(), tab);
        }
    }

    #[test]
    fn test_overview_figures() {
        let Layout::Overview { figures, rows } = compose(Tab::Overview, &bare_data()) else {
            panic!("expected overview layout");
        };

        let titles: Vec<&str> = figures.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Steps", "Calories Burned", "Water Intake", "Meals Tracked"]);

        assert_eq!(figures[0].description, "Daily Goal: 10,000 steps");
        assert_eq!(figures[1].description, "Daily Goal: 500 kcal");
        assert_eq!(figures[2].description, "Daily Goal: 8 glasses");

        assert_eq!(figures[0].value, "8435");
        assert_eq!(figures[1].value, "340 kcal");
        assert_eq!(figures[2].value, "5 glasses");
        assert_eq!(figures[3].value, "3");

        let trends: Vec<Option<Trend>> =
            figures.iter().map(|f| f.trend.as_ref().map(|t| t.trend)).collect();
        assert_eq!(
            trends,
            [Some(Trend::Up), Some(Trend::Neutral), Some(Trend::Down), None]
        );

        assert_eq!(rows, OVERVIEW_ROWS.to_vec());
    }

    #[test]
    fn test_overview_mounts_all_six_trackers_in_order() {
        let layout = compose(Tab::Overview, &bare_data());
        assert_eq!(
            layout.trackers(),
            vec![
                Tracker::HeartRate,
                Tracker::Sleep,
                Tracker::WaterIntake,
                Tracker::Bmi,
                Tracker::Nutrition,
                Tracker::Workout,
            ]
        );
    }

    #[test]
    fn test_metric_tab_mounts_exactly_one_tracker() {
        let layout = compose(Tab::Sleep, &bare_data());
        assert_eq!(layout.trackers(), vec![Tracker::Sleep]);
    }

    #[test]
    fn test_profile_card_with_defaults() {
        let Layout::Profile(card) = compose(Tab::Profile, &bare_data()) else {
            panic!("expected profile layout");
        };

        assert_eq!(card.name, "Jordan");
        assert_eq!(card.member_since, "January 2023");

        let facts: Vec<(&str, &str)> = card
            .facts
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            facts,
            [("Height", "175 cm"), ("Weight", "68.2 kg"), ("BMI", "22.3"), ("Age", "32")]
        );

        let goals: Vec<(&str, &str)> = card
            .goals
            .iter()
            .map(|g| (g.label.as_str(), g.target.as_str()))
            .collect();
        assert_eq!(
            goals,
            [
                ("Daily Steps", "10,000 steps"),
                ("Water Intake", "8 glasses"),
                ("Sleep Duration", "8 hours"),
            ]
        );
    }

    #[test]
    fn test_tab_strip_marks_one_active() {
        let strip = tab_strip("/dashboard", Tab::Bmi);
        assert_eq!(strip.len(), 8);
        assert_eq!(strip.iter().filter(|l| l.active).count(), 1);
        assert_eq!(strip[3].label, "BMI");
        assert_eq!(strip[3].href, "/dashboard?tab=bmi");
        assert!(strip[3].active);
    }

    #[test]
    fn test_page_greeting() {
        let page = Page::build("/dashboard", Tab::Overview, &UserProfile::new("Jordan"));
        assert_eq!(page.greeting, "Welcome back, Jordan");
        assert_eq!(page.subtitle, "Here's an overview of your health metrics");
    }

    #[test]
    fn test_layout_serializes_with_tag() {
        let json = serde_json::to_value(compose(Tab::Heart, &bare_data())).unwrap();
        assert_eq!(json["layout"], "single");
        assert_eq!(json["tracker"], "heart_rate");
    }
}
