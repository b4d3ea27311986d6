//! Stateless request builder and response parser for the bestiary API.
//!
//! # Design
//! `BestiaryClient` holds only a `base_url` and carries no state between
//! calls. Each endpoint has a `build_*` method producing an `HttpRequest`;
//! parameter validation happens there, synchronously, so a bad argument
//! never results in a network call. Responses are decoded by a small set of
//! `parse_*` methods — six of the ten endpoints share the same
//! `Vec<MonsterLookup>` shape and therefore the same parser.
//!
//! Query values are substituted into the URL verbatim. The service uses `+`
//! itself as a multi-term separator, and the upstream contract has always
//! been "caller supplies URL-safe tokens", so no percent-encoding is applied
//! here. Values containing `&` or `#` would corrupt the query string; see
//! DESIGN.md for why this is preserved rather than fixed.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Monster, MonsterLookup, SlayerCategories, Weaknesses};

/// Base path of the live bestiary service.
pub const BASE_URL: &str = "https://secure.runescape.com/m=itemdb_rs/bestiary";

/// Stateless builder/parser for the ten bestiary endpoints.
///
/// The caller (normally [`crate::Bestiary`]) executes the HTTP round-trip
/// between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct BestiaryClient {
    base_url: String,
}

impl BestiaryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request full data for the beast with the given id.
    pub fn build_monster_by_id(&self, id: u32) -> HttpRequest {
        HttpRequest {
            url: format!("{}/beastData.json?beastid={id}", self.base_url),
        }
    }

    /// Request a name search. Multiple terms may be joined with `+`; the
    /// term is substituted verbatim, with no percent-encoding.
    pub fn build_search_monsters(&self, term: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/beastSearch.json?beastid={term}", self.base_url),
        }
    }

    /// Request all beasts whose name starts with `letter`.
    ///
    /// `letter` must be exactly one character; anything else fails with
    /// `ApiError::InvalidParameter` before a request exists.
    pub fn build_names_by_letter(&self, letter: &str) -> Result<HttpRequest, ApiError> {
        if letter.chars().count() != 1 {
            return Err(ApiError::InvalidParameter(
                "letter must be 1 character".to_string(),
            ));
        }
        Ok(HttpRequest {
            url: format!("{}/bestiaryNames.json?beastid={letter}", self.base_url),
        })
    }

    /// Request the list of all area names.
    pub fn build_areas(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/areaNames.json", self.base_url),
        }
    }

    /// Request beasts found in the given area. Multiple areas may be joined
    /// with `+`; the value is substituted verbatim, with no percent-encoding.
    pub fn build_monsters_by_area(&self, area: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/areaBeasts.json?identifier={area}", self.base_url),
        }
    }

    /// Request the slayer category dictionary.
    pub fn build_slayer_categories(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/slayerCatNames.json", self.base_url),
        }
    }

    /// Request beasts in the slayer category with the given id.
    pub fn build_monsters_by_slayer_category(&self, id: u32) -> HttpRequest {
        HttpRequest {
            url: format!("{}/slayerBeasts.json?identifier={id}", self.base_url),
        }
    }

    /// Request the weakness dictionary.
    pub fn build_weaknesses(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/weaknessNames.json", self.base_url),
        }
    }

    /// Request beasts with the weakness of the given id.
    pub fn build_monsters_by_weakness(&self, id: u32) -> HttpRequest {
        HttpRequest {
            url: format!("{}/weaknessBeasts.json?identifier={id}", self.base_url),
        }
    }

    /// Request beasts whose combat level is within `low..=high`.
    pub fn build_monsters_by_level_range(&self, low: u32, high: u32) -> HttpRequest {
        HttpRequest {
            url: format!("{}/levelGroup.json?identifier={low}-{high}", self.base_url),
        }
    }

    pub fn parse_monster(&self, response: HttpResponse) -> Result<Monster, ApiError> {
        decode(&response)
    }

    /// Parse any of the list-shaped endpoints (search, names-by-letter,
    /// by-area, by-slayer-category, by-weakness, by-level-range).
    pub fn parse_monster_lookups(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<MonsterLookup>, ApiError> {
        decode(&response)
    }

    pub fn parse_area_names(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        decode(&response)
    }

    pub fn parse_slayer_categories(
        &self,
        response: HttpResponse,
    ) -> Result<SlayerCategories, ApiError> {
        decode(&response)
    }

    pub fn parse_weaknesses(&self, response: HttpResponse) -> Result<Weaknesses, ApiError> {
        decode(&response)
    }
}

impl Default for BestiaryClient {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

/// Coarse shape check, then an explicit typed decode.
///
/// The service answers some errors with HTML or an empty body (and status
/// 200), so "starts with `{` or `[`" is the success condition — the body is
/// checked untrimmed, exactly as received. A body that passes the check but
/// does not match the expected record is a `Deserialization` error.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if !(response.body.starts_with('{') || response.body.starts_with('[')) {
        return Err(ApiError::InvalidBody);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
