//! Catalog building and leaderboard listing tests.
//!
//! Uses the bundled `data/cards.txt` card table.

use souper_draft::cards::{loader, Catalog, CardRow, Lvct, Msrv, RatingTier};
use souper_draft::core::{CardDataError, DraftError};

const CARDS: &str = include_str!("../data/cards.txt");

fn reference_row() -> CardRow {
    CardRow {
        name: "Cesnica".to_string(),
        year: "2017".to_string(),
        invd: 8.0,
        tmwk: 7.0,
        sklp: 6.0,
        preh: 9.0,
        gmit: 8.0,
        surv: 7.0,
        race: 6.0,
        ffa: 5.0,
        msrv: "E1".to_string(),
        lvct: "EU".to_string(),
        prif: 12.0,
        title: String::new(),
    }
}

// =============================================================================
// Building
// =============================================================================

#[test]
fn test_bundled_catalog_loads() {
    let catalog = loader::parse_catalog(CARDS).expect("bundled catalog should parse");

    assert_eq!(catalog.len(), 20);

    let cesnica = catalog.get("Cesnica", "2017").unwrap();
    assert_eq!(cesnica.rating(), 70);
    assert_eq!(cesnica.msrv(), Msrv::E1);
    assert_eq!(cesnica.lvct(), Lvct::EU);

    let onkei = catalog.get("Onkei", "2014").unwrap();
    assert_eq!(onkei.title(), "Veteran");
    assert_eq!(onkei.rating(), 51);

    let champion = catalog.get("Ptdawesome", "2017").unwrap();
    assert_eq!(champion.rating(), 82);
    assert_eq!(champion.tier(), RatingTier::Gold);
}

#[test]
fn test_reference_rating() {
    let catalog = Catalog::build(vec![reference_row()]).unwrap();
    assert_eq!(catalog.cards()[0].rating(), 70);
}

#[test]
fn test_rows_and_text_agree() {
    let from_rows = Catalog::build(vec![reference_row()]).unwrap();
    let from_text = loader::parse_catalog("Cesnica,2017,8,7,6,9,8,7,6,5,E1,EU,12,").unwrap();

    assert_eq!(from_rows.cards(), from_text.cards());
}

#[test]
fn test_nan_text_field_rejected() {
    // "NaN" parses as a float; the card constructor still refuses it.
    let result = loader::parse_catalog("Pie,2017,NaN,5,5,5,5,5,5,5,E2,AS,5");

    assert!(matches!(
        result,
        Err(DraftError::InvalidCardData {
            row: 0,
            source: CardDataError::NonFiniteNumber { field: "invd", .. }
        })
    ));
}

#[test]
fn test_unknown_category_aborts_build() {
    let text = format!("{}\nMystery,2018,5,5,5,5,5,5,5,5,E1,OC,5\n", CARDS);

    match loader::parse_catalog(&text) {
        Err(DraftError::InvalidCardData { row, source }) => {
            assert_eq!(row, 20);
            assert_eq!(
                source,
                CardDataError::UnknownCategory {
                    field: "lvct",
                    value: "OC".to_string()
                }
            );
        }
        other => panic!("expected InvalidCardData, got {:?}", other),
    }
}

#[test]
fn test_duplicate_key_aborts_build() {
    let text = format!("{}Pie,2017,1,1,1,1,1,1,1,1,E1,EU,1\n", CARDS);

    assert!(matches!(
        loader::parse_catalog(&text),
        Err(DraftError::InvalidCardData {
            row: 20,
            source: CardDataError::DuplicateCard { .. }
        })
    ));
}

#[test]
fn test_error_message_names_row_and_field() {
    let err = loader::parse_catalog("Pie,2017,1,1,1,1,1,1,1,1,E1,EU,lots").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid card data in row 0: field `prif` is not a number: \"lots\""
    );
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_listing_order() {
    let catalog = loader::parse_catalog(CARDS).unwrap();

    let listing: Vec<String> = catalog
        .sorted_listing()
        .iter()
        .map(|c| format!("{} {}", c.name(), c.year()))
        .collect();

    assert_eq!(
        listing,
        vec![
            "Ptdawesome 2017",
            "Santaishcool 2017",
            "Ninjafood 2017",
            "Cesnica 2017",
            "Loqocious 2017",
            "Gilcatmey 2017",
            "Kaoruko 2017",
            "Santaishcool 2016",
            "Jayheather 2017",
            "Loqocious 2016",
            "Rarerere 2017",
            "Mrchewypants 2017",
            "Cesnica 2016",
            "Gilcatmey 2016",
            "Onkei 2017",
            "Poderosocta 2017",
            "Absolbr 2017",
            "Pie 2017",
            "Rightway 2017",
            "Onkei 2014",
        ]
    );
}

#[test]
fn test_listing_tiebreak_uses_invd_tmwk() {
    let catalog = loader::parse_catalog(CARDS).unwrap();
    let listing = catalog.sorted_listing();

    let pos = |name: &str, year: &str| {
        listing
            .iter()
            .position(|c| c.name() == name && c.year() == year)
            .unwrap()
    };

    // Both rated 61; Gilcatmey 2016 has the larger invd + tmwk.
    assert!(pos("Gilcatmey", "2016") < pos("Onkei", "2017"));
    // Both rated 65; Rarerere has the larger invd + tmwk.
    assert!(pos("Rarerere", "2017") < pos("Mrchewypants", "2017"));
}
