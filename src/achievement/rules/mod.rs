pub mod accuracy;
pub mod first_win;
pub mod milestone;
pub mod social;
pub mod streak;

pub use accuracy::AccuracyRule;
pub use first_win::FirstWinRule;
pub use milestone::MilestoneRule;
pub use social::SocialRule;
pub use streak::StreakRule;
