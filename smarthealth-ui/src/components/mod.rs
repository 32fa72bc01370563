pub mod nav;
pub mod profile_card;
pub mod summary_card;
pub mod tab_bar;
pub mod trackers;

pub use nav::Nav;
pub use profile_card::ProfileCard;
pub use summary_card::SummaryCard;
pub use tab_bar::TabBar;
pub use trackers::TrackerView;
