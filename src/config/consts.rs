// src/config/consts.rs

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "PICKEM_LOG";
pub const SETTINGS_FILE: &str = "pickem.toml";

// Week
pub const MAX_CONFIDENCE_LIMIT: u32 = 30; // GUI widget ceiling; 0 means auto-detect
pub const CLI_MAX_CONFIDENCE_LIMIT: u32 = 99;

// Scoreboard look-ahead when pairing a kickoff header with its two teams
pub const PREGAME_LOOKAHEAD: usize = 8;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "standings";

// Table
pub const HEADERS: &[&str] = &[
    "Name",
    "Rank",
    "Current Points",
    "Open Slots",
    "Points Remaining",
    "Total Points Possible",
    "Ceiling",
];
pub const NAME_COL: usize = 0;
