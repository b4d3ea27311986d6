//! The one-namespace facade over builder, transport, and parser.
//!
//! # Design
//! `Bestiary` composes a `BestiaryClient` with a `Transport` so callers get
//! the ten endpoints as single blocking calls. Each method is build, one
//! round-trip, parse; nothing is cached and nothing is retried. The split
//! pieces remain public for callers who want to execute requests themselves
//! (custom transport, recorded responses in tests).

use std::time::Duration;

use crate::client::BestiaryClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Monster, MonsterLookup, SlayerCategories, Weaknesses};

/// Blocking client for the RuneScape Bestiary API.
///
/// Stateless between calls; clone freely or share across threads.
///
/// ```no_run
/// use bestiary_core::Bestiary;
///
/// let bestiary = Bestiary::new();
/// let cow = bestiary.monster_by_id(81)?;
/// println!("{} (level {})", cow.name, cow.level);
/// # Ok::<(), bestiary_core::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bestiary {
    client: BestiaryClient,
    transport: Transport,
}

impl Bestiary {
    /// A client against the live service, with no timeout.
    pub fn new() -> Self {
        Self {
            client: BestiaryClient::default(),
            transport: Transport::new(),
        }
    }

    /// A client against an alternative base URL (a mock server, a proxy).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: BestiaryClient::new(base_url),
            transport: Transport::new(),
        }
    }

    /// A client against the live service that abandons calls running longer
    /// than `timeout`. The timeout applies uniformly to every endpoint.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: BestiaryClient::default(),
            transport: Transport::with_timeout(timeout),
        }
    }

    /// Full data for the beast with the given id.
    pub fn monster_by_id(&self, id: u32) -> Result<Monster, ApiError> {
        let req = self.client.build_monster_by_id(id);
        self.client.parse_monster(self.transport.execute(&req)?)
    }

    /// Beasts whose name matches `term`. Join multiple terms with `+`.
    /// The term is not percent-encoded; supply URL-safe tokens.
    pub fn search_monsters(&self, term: &str) -> Result<Vec<MonsterLookup>, ApiError> {
        let req = self.client.build_search_monsters(term);
        self.client
            .parse_monster_lookups(self.transport.execute(&req)?)
    }

    /// Beasts whose name starts with `letter` (exactly one character).
    pub fn names_by_letter(&self, letter: &str) -> Result<Vec<MonsterLookup>, ApiError> {
        let req = self.client.build_names_by_letter(letter)?;
        self.client
            .parse_monster_lookups(self.transport.execute(&req)?)
    }

    /// All area names present in the bestiary.
    pub fn areas(&self) -> Result<Vec<String>, ApiError> {
        let req = self.client.build_areas();
        self.client.parse_area_names(self.transport.execute(&req)?)
    }

    /// Beasts found in `area` (a name from [`Bestiary::areas`]). Join
    /// multiple areas with `+`; no percent-encoding is applied.
    pub fn monsters_by_area(&self, area: &str) -> Result<Vec<MonsterLookup>, ApiError> {
        let req = self.client.build_monsters_by_area(area);
        self.client
            .parse_monster_lookups(self.transport.execute(&req)?)
    }

    /// Dictionary of slayer category names to ids.
    pub fn slayer_categories(&self) -> Result<SlayerCategories, ApiError> {
        let req = self.client.build_slayer_categories();
        self.client
            .parse_slayer_categories(self.transport.execute(&req)?)
    }

    /// Beasts in the slayer category with the given id (from
    /// [`Bestiary::slayer_categories`]).
    pub fn monsters_by_slayer_category(&self, id: u32) -> Result<Vec<MonsterLookup>, ApiError> {
        let req = self.client.build_monsters_by_slayer_category(id);
        self.client
            .parse_monster_lookups(self.transport.execute(&req)?)
    }

    /// Dictionary of weakness names to ids.
    pub fn weaknesses(&self) -> Result<Weaknesses, ApiError> {
        let req = self.client.build_weaknesses();
        self.client.parse_weaknesses(self.transport.execute(&req)?)
    }

    /// Beasts with the weakness of the given id (from
    /// [`Bestiary::weaknesses`]).
    pub fn monsters_by_weakness(&self, id: u32) -> Result<Vec<MonsterLookup>, ApiError> {
        let req = self.client.build_monsters_by_weakness(id);
        self.client
            .parse_monster_lookups(self.transport.execute(&req)?)
    }

    /// Beasts with a combat level in `low..=high`.
    pub fn monsters_by_level_range(
        &self,
        low: u32,
        high: u32,
    ) -> Result<Vec<MonsterLookup>, ApiError> {
        let req = self.client.build_monsters_by_level_range(low, high);
        self.client
            .parse_monster_lookups(self.transport.execute(&req)?)
    }
}

impl Default for Bestiary {
    fn default() -> Self {
        Self::new()
    }
}
