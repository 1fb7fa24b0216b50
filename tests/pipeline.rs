//! End-to-end tests of the library pipeline: raw JSON documents in,
//! merged tiles and render map out.

use clanmap::config::RenderConfig;
use clanmap::coords::{GridCoords, MapCoords};
use clanmap::input::{validate, RawDocument};
use clanmap::merge::{merge_reports, TileMap};
use clanmap::pipeline::merge;
use clanmap::report::Report;

fn at(s: &str) -> MapCoords {
    GridCoords::parse(s).unwrap().to_map()
}

fn document(source: &str, turn: &str, clan: &str, steps: &str) -> RawDocument {
    let json = format!(
        r#"{{
            "schema": "clanmap/report-v1",
            "game": "0300",
            "turn": "{turn}",
            "clan": "{clan}",
            "clans": [{{
                "id": "{clan}",
                "units": [{{
                    "id": "{clan}e1",
                    "location": "AA 0101",
                    "moves": [{{"steps": [{steps}]}}]
                }}]
            }}],
            "specials": [{{"id": "hq", "name": "Old Keep"}}]
        }}"#
    );
    RawDocument::from_json(source, &json).unwrap()
}

fn corpus() -> Vec<RawDocument> {
    vec![
        document(
            "a.json",
            "0901-01",
            "0331",
            r#"{"location": "AA 0505", "observation": {"terrain": "SW", "settlements": [{"name": "old keep"}]}},
               {"location": "AA 0506", "observation": {"terrain": "PR", "resources": ["Salt"]}}"#,
        ),
        document(
            "b.json",
            "0901-01",
            "0249",
            r#"{"location": "AA 0505", "observation": {"terrain": "PR", "borders": {"SE": "ford"}}},
               {"location": "AA 0606"}"#,
        ),
        document(
            "c.json",
            "0901-02",
            "0331",
            r#"{"location": "AA 0506", "observation": {"resources": [], "notes": ["burned"]}},
               {"location": "AA 0707", "observation": {"terrain": "BH", "sightings": [{"bearing": "NNE", "terrain": "MO"}]}}"#,
        ),
        document(
            "d.json",
            "0901-02",
            "0249",
            r#"{"location": "AA 0707", "observation": {"encounters": [{"unit": "0331e1"}]}}"#,
        ),
    ]
}

fn reports(docs: &[RawDocument]) -> Vec<Report> {
    validate(docs).unwrap()
}

#[test]
fn merges_corpus() {
    let tiles = merge_reports(&reports(&corpus()), "0249");

    // AA 0606 has a step but no observation.
    assert_eq!(tiles.len(), 3);

    let keep = &tiles[&at("AA 0505")];
    assert_eq!(keep.terrain.as_deref(), Some("PR"));
    assert_eq!(keep.borders.len(), 1);
    assert_eq!(keep.settlements.len(), 1);

    let salt = &tiles[&at("AA 0506")];
    assert_eq!(salt.terrain.as_deref(), Some("PR"));
    assert!(salt.resources.is_empty());
    assert_eq!(salt.notes, vec!["burned".to_string()]);

    let hill = &tiles[&at("AA 0707")];
    assert_eq!(hill.terrain.as_deref(), Some("BH"));
    assert_eq!(hill.sightings.len(), 1);
    assert_eq!(hill.encounters.len(), 1);
}

#[test]
fn report_order_does_not_change_result() {
    let docs = corpus();
    let expected = merge_reports(&reports(&docs), "0249");

    // Every rotation and the reversal of the corpus.
    let mut orders: Vec<Vec<RawDocument>> = (0..docs.len())
        .map(|k| {
            let mut d = docs.clone();
            d.rotate_left(k);
            d
        })
        .collect();
    orders.push(docs.iter().rev().cloned().collect());

    for order in orders {
        let tiles: TileMap = merge_reports(&reports(&order), "0249");
        assert_eq!(tiles, expected);
    }
}

#[test]
fn full_merge_promotes_and_lays_out() {
    let merged = merge(reports(&corpus()), &RenderConfig::new("0249"));

    let keep = &merged.tiles[&at("AA 0505")];
    assert!(keep.settlements.is_empty());
    assert_eq!(keep.specials.len(), 1);
    assert_eq!(keep.specials[0].id, "hq");
    assert_eq!(merged.promoted, 1);

    // Upper left AA 0505 is map (4, 4); the 4x4 margin reaches AA 0101.
    assert_eq!(merged.layout.offset, at("AA 0101"));

    let map = merged.render_map();
    assert_eq!(map.len(), 3);
    let coords: Vec<&str> = map.hexes.iter().map(|h| h.coords.as_str()).collect();
    assert_eq!(coords, vec!["AA 0505", "AA 0506", "AA 0707"]);
    assert_eq!((map.hexes[2].column, map.hexes[2].row), (6, 6));
}

#[test]
fn special_names_differing_in_case_resolve_the_same_in_any_order() {
    let special = |source: &str, clan: &str, name: &str| {
        let json = format!(
            r#"{{
                "schema": "clanmap/report-v1",
                "game": "0300",
                "turn": "0901-01",
                "clan": "{clan}",
                "clans": [{{
                    "id": "{clan}",
                    "units": [{{
                        "id": "{clan}e1",
                        "location": "AA 0505",
                        "moves": [{{"steps": [
                            {{"location": "AA 0505", "observation": {{"settlements": [{{"name": "old keep"}}]}}}}
                        ]}}]
                    }}]
                }}],
                "specials": [{{"id": "{name}", "name": "{name}"}}]
            }}"#
        );
        RawDocument::from_json(source, &json).unwrap()
    };
    let ours = special("ours.json", "0249", "Old Keep");
    let theirs = special("theirs.json", "0331", "OLD KEEP");
    let config = RenderConfig::new("0249");

    let forward = merge(reports(&[ours.clone(), theirs.clone()]), &config);
    let backward = merge(reports(&[theirs, ours]), &config);
    assert_eq!(forward.tiles, backward.tiles);

    let keep = &forward.tiles[&at("AA 0505")];
    assert_eq!(keep.specials.len(), 1);
    assert_eq!(keep.specials[0].id, "Old Keep");
    assert_eq!(keep.specials[0].name, "Old Keep");
}
