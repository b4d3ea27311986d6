//! Domain records for the bestiary API.
//!
//! # Design
//! Field names follow the wire format exactly; the remote service predates
//! any naming convention this crate could pick, so no renaming is done.
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Open dictionary of slayer category names to their numeric ids.
///
/// The key set is whatever the service currently serves; nothing is fixed at
/// compile time.
pub type SlayerCategories = HashMap<String, u32>;

/// Open dictionary of weakness names to their numeric ids.
pub type Weaknesses = HashMap<String, u32>;

/// Full detail for a single beast, as returned by the beast-data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monster {
    pub name: String,
    pub id: u32,
    /// Whether the beast is members-only content.
    pub members: bool,
    /// Weakness name. Defaults to empty for beasts without one.
    #[serde(default)]
    pub weakness: String,
    /// Combat level.
    pub level: u32,
    pub lifepoints: u32,
    pub defence: u32,
    pub attack: u32,
    pub magic: u32,
    pub ranged: u32,
    /// Experience per kill. The service serves this as a decimal string.
    pub xp: String,
    /// Slayer level required to damage the beast; 0 when unrestricted.
    #[serde(default)]
    pub slayerlevel: u32,
    /// Slayer category name. Not every beast has a slayer assignment.
    #[serde(default)]
    pub slayercat: String,
    /// Size in game squares.
    pub size: u32,
    pub attackable: bool,
    pub aggressive: bool,
    pub poisonous: bool,
    /// Examine text.
    pub description: String,
    /// Areas where the beast may be found.
    #[serde(default)]
    pub area: Vec<String>,
    /// Animation ids used by the official bestiary viewer, keyed by pose.
    #[serde(default)]
    pub animations: HashMap<String, u64>,
}

/// Minimal id+name pair returned by every list-shaped lookup endpoint
/// (search, names-by-letter, by-area, by-slayer-category, by-weakness,
/// by-level-range).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonsterLookup {
    /// The beast's id, usable with the beast-data endpoint.
    pub value: u32,
    /// Display name.
    pub label: String,
}
