//! Mock bestiary service for integration tests.
//!
//! Serves the same ten routes as the live service over a small fixed
//! fixture. Read-only: no handler mutates anything, so the state is a plain
//! `Arc<Fixture>`. DTOs here are defined independently of `bestiary-core`;
//! the core's integration tests catch schema drift.
//!
//! The live service answers bad requests (unknown beast id, malformed level
//! range) with non-JSON bodies rather than JSON errors; the mock mimics that
//! with an empty body so clients can exercise their invalid-body path.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Full beast record, wire-shaped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub id: u32,
    pub members: bool,
    pub weakness: String,
    pub level: u32,
    pub lifepoints: u32,
    pub defence: u32,
    pub attack: u32,
    pub magic: u32,
    pub ranged: u32,
    pub xp: String,
    pub slayerlevel: u32,
    pub slayercat: String,
    pub size: u32,
    pub attackable: bool,
    pub aggressive: bool,
    pub poisonous: bool,
    pub description: String,
    pub area: Vec<String>,
    pub animations: BTreeMap<String, u64>,
}

/// Id+name pair served by the list-shaped routes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lookup {
    pub value: u32,
    pub label: String,
}

/// The dataset behind every route.
pub struct Fixture {
    pub monsters: Vec<Monster>,
    pub slayer_categories: BTreeMap<String, u32>,
    pub weaknesses: BTreeMap<String, u32>,
}

type Db = Arc<Fixture>;

#[derive(Deserialize)]
struct BeastIdQuery {
    beastid: String,
}

#[derive(Deserialize)]
struct IdentifierQuery {
    identifier: String,
}

pub fn app() -> Router {
    let db: Db = Arc::new(fixture());
    Router::new()
        .route("/beastData.json", get(beast_data))
        .route("/beastSearch.json", get(beast_search))
        .route("/bestiaryNames.json", get(bestiary_names))
        .route("/areaNames.json", get(area_names))
        .route("/areaBeasts.json", get(area_beasts))
        .route("/slayerCatNames.json", get(slayer_cat_names))
        .route("/slayerBeasts.json", get(slayer_beasts))
        .route("/weaknessNames.json", get(weakness_names))
        .route("/weaknessBeasts.json", get(weakness_beasts))
        .route("/levelGroup.json", get(level_group))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn lookup(m: &Monster) -> Lookup {
    Lookup {
        value: m.id,
        label: m.name.clone(),
    }
}

async fn beast_data(State(db): State<Db>, Query(q): Query<BeastIdQuery>) -> Response {
    let found = q
        .beastid
        .parse::<u32>()
        .ok()
        .and_then(|id| db.monsters.iter().find(|m| m.id == id));
    match found {
        Some(monster) => Json(monster.clone()).into_response(),
        // Unknown or unparseable id: the live service does not answer with
        // JSON here, and neither do we.
        None => String::new().into_response(),
    }
}

/// Pull one parameter out of the raw query string.
///
/// The live service treats a literal `+` as its multi-term separator, but
/// axum's `Query` extractor form-decodes `+` into a space before a handler
/// runs. The `+`-joined routes read the query raw to keep the separator.
fn raw_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

async fn beast_search(State(db): State<Db>, RawQuery(query): RawQuery) -> Json<Vec<Lookup>> {
    let query = query.unwrap_or_default();
    let terms: Vec<String> = raw_param(&query, "beastid")
        .map(|t| t.split('+').map(str::to_lowercase).collect())
        .unwrap_or_default();
    let matches = db
        .monsters
        .iter()
        .filter(|m| {
            let name = m.name.to_lowercase();
            terms.iter().any(|t| !t.is_empty() && name.contains(t))
        })
        .map(lookup)
        .collect();
    Json(matches)
}

async fn bestiary_names(State(db): State<Db>, Query(q): Query<BeastIdQuery>) -> Json<Vec<Lookup>> {
    let prefix = q.beastid.to_lowercase();
    let matches = db
        .monsters
        .iter()
        .filter(|m| !prefix.is_empty() && m.name.to_lowercase().starts_with(&prefix))
        .map(lookup)
        .collect();
    Json(matches)
}

async fn area_names(State(db): State<Db>) -> Json<Vec<String>> {
    let mut areas: Vec<String> = db
        .monsters
        .iter()
        .flat_map(|m| m.area.iter().cloned())
        .collect();
    areas.sort();
    areas.dedup();
    Json(areas)
}

async fn area_beasts(State(db): State<Db>, RawQuery(query): RawQuery) -> Json<Vec<Lookup>> {
    let query = query.unwrap_or_default();
    let wanted: Vec<&str> = raw_param(&query, "identifier")
        .map(|a| a.split('+').collect())
        .unwrap_or_default();
    let matches = db
        .monsters
        .iter()
        .filter(|m| m.area.iter().any(|a| wanted.contains(&a.as_str())))
        .map(lookup)
        .collect();
    Json(matches)
}

async fn slayer_cat_names(State(db): State<Db>) -> Json<BTreeMap<String, u32>> {
    Json(db.slayer_categories.clone())
}

async fn slayer_beasts(State(db): State<Db>, Query(q): Query<IdentifierQuery>) -> Response {
    let Ok(id) = q.identifier.parse::<u32>() else {
        return String::new().into_response();
    };
    let matches: Vec<Lookup> = db
        .monsters
        .iter()
        .filter(|m| db.slayer_categories.get(&m.slayercat) == Some(&id))
        .map(lookup)
        .collect();
    Json(matches).into_response()
}

async fn weakness_names(State(db): State<Db>) -> Json<BTreeMap<String, u32>> {
    Json(db.weaknesses.clone())
}

async fn weakness_beasts(State(db): State<Db>, Query(q): Query<IdentifierQuery>) -> Response {
    let Ok(id) = q.identifier.parse::<u32>() else {
        return String::new().into_response();
    };
    let matches: Vec<Lookup> = db
        .monsters
        .iter()
        .filter(|m| db.weaknesses.get(&m.weakness) == Some(&id))
        .map(lookup)
        .collect();
    Json(matches).into_response()
}

async fn level_group(State(db): State<Db>, Query(q): Query<IdentifierQuery>) -> Response {
    let bounds = q
        .identifier
        .split_once('-')
        .and_then(|(low, high)| Some((low.parse::<u32>().ok()?, high.parse::<u32>().ok()?)));
    let Some((low, high)) = bounds else {
        return (StatusCode::BAD_REQUEST, String::new()).into_response();
    };
    let matches: Vec<Lookup> = db
        .monsters
        .iter()
        .filter(|m| m.level >= low && m.level <= high)
        .map(lookup)
        .collect();
    Json(matches).into_response()
}

/// A handful of beasts spanning every route's query dimension.
pub fn fixture() -> Fixture {
    let slayer_categories = BTreeMap::from([
        ("Bats".to_string(), 5),
        ("Cows".to_string(), 10),
        ("Crawling hands".to_string(), 24),
        ("Abyssal demons".to_string(), 3),
    ]);
    let weaknesses = BTreeMap::from([
        ("None".to_string(), 0),
        ("Air".to_string(), 1),
        ("Water".to_string(), 2),
        ("Earth".to_string(), 3),
        ("Fire".to_string(), 4),
        ("Slash".to_string(), 6),
        ("Crush".to_string(), 7),
        ("Arrows".to_string(), 8),
    ]);

    let monsters = vec![
        monster(
            41, "Chicken", 1, 50, "3", "Air", "", 0, false,
            &["Lumbridge"], "Yep, definitely a chicken.",
        ),
        monster(
            81, "Cow", 2, 100, "6.5", "Earth", "Cows", 0, false,
            &["Lumbridge"], "Converts grass to milk.",
        ),
        monster(
            79, "Giant bat", 27, 550, "22", "Crush", "Bats", 0, false,
            &["Varrock Sewers"], "An enormous leathery-winged bat.",
        ),
        monster(
            1648, "Crawling hand", 11, 250, "11", "Crush", "Crawling hands", 5, true,
            &["Slayer Tower"], "A severed hand, still crawling around.",
        ),
        monster(
            139, "Green dragon", 79, 3900, "302", "Arrows", "", 0, true,
            &["Wilderness"], "A powerful green dragon.",
        ),
        monster(
            1615, "Abyssal demon", 98, 8500, "661", "Slash", "Abyssal demons", 85, true,
            &["Slayer Tower"], "A denizen of the Abyss!",
        ),
    ];

    Fixture {
        monsters,
        slayer_categories,
        weaknesses,
    }
}

#[allow(clippy::too_many_arguments)]
fn monster(
    id: u32,
    name: &str,
    level: u32,
    lifepoints: u32,
    xp: &str,
    weakness: &str,
    slayercat: &str,
    slayerlevel: u32,
    members: bool,
    areas: &[&str],
    description: &str,
) -> Monster {
    Monster {
        name: name.to_string(),
        id,
        members,
        weakness: weakness.to_string(),
        level,
        lifepoints,
        defence: level,
        attack: level,
        magic: level,
        ranged: level,
        xp: xp.to_string(),
        slayerlevel,
        slayercat: slayercat.to_string(),
        size: 1,
        attackable: true,
        aggressive: level > 50,
        poisonous: false,
        description: description.to_string(),
        area: areas.iter().map(|a| a.to_string()).collect(),
        animations: BTreeMap::from([("attack".to_string(), 5849), ("death".to_string(), 5851)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_param_preserves_literal_plus() {
        assert_eq!(
            raw_param("beastid=dragon+demon", "beastid"),
            Some("dragon+demon")
        );
        assert_eq!(
            raw_param("a=1&identifier=Lumbridge+Wilderness", "identifier"),
            Some("Lumbridge+Wilderness")
        );
        assert_eq!(raw_param("beastid=x", "identifier"), None);
        assert_eq!(raw_param("", "beastid"), None);
    }

    #[test]
    fn monster_serializes_with_wire_field_names() {
        let fixture = fixture();
        let cow = fixture.monsters.iter().find(|m| m.id == 81).unwrap();
        let json = serde_json::to_value(cow).unwrap();
        assert_eq!(json["name"], "Cow");
        assert_eq!(json["slayercat"], "Cows");
        assert_eq!(json["area"][0], "Lumbridge");
        assert_eq!(json["animations"]["death"], 5851);
    }

    #[test]
    fn fixture_categories_cover_monster_assignments() {
        let fixture = fixture();
        for m in &fixture.monsters {
            if !m.slayercat.is_empty() {
                assert!(
                    fixture.slayer_categories.contains_key(&m.slayercat),
                    "unknown category {}",
                    m.slayercat
                );
            }
            assert!(
                fixture.weaknesses.contains_key(&m.weakness),
                "unknown weakness {}",
                m.weakness
            );
        }
    }
}
