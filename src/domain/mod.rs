pub mod conjure;
pub mod cue;
pub mod eligibility;
pub mod eth;
pub mod lore;
pub mod menu;
pub mod route;
