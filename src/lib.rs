//! Tracker for the 75 day self-improvement challenge. Every day has a checklist (diet, water,
//! two workouts, reading and a progress photo) and a day only counts once all of it is done.
//! Missing a day means starting over from day 1.
//!

pub mod challenge;
pub mod cli;
pub mod fs;
pub mod session;
pub mod storage;
pub mod utils;
