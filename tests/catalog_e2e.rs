// tests/catalog_e2e.rs
//
// Parser + query layer over a wiki-shaped fixture page.

use bundle_tracker::catalog::names_of;
use bundle_tracker::params::BUNDLE_TABLE_SCAN_LIMIT;
use bundle_tracker::scrape::parse_catalog;

const FIXTURE: &str = include_str!("fixtures/bundles.html");

#[test]
fn six_rooms_in_heading_order() {
    let cat = parse_catalog(FIXTURE).unwrap();
    assert_eq!(
        names_of(cat.rooms.iter()),
        vec!["Crafts Room", "Pantry", "Fish Tank", "Boiler Room", "Bulletin Board", "Vault"]
    );
}

#[test]
fn first_two_headings_are_skipped() {
    let cat = parse_catalog(FIXTURE).unwrap();
    assert!(cat.room_by_name("Contents").is_none());
    assert!(cat.room_by_name("Bundle Basics").is_none());
}

#[test]
fn tables_beyond_the_room_range_are_dropped() {
    let cat = parse_catalog(FIXTURE).unwrap();
    assert!(cat.room_by_name("Abandoned JojaMart").is_none());
    for room in &cat.rooms {
        for bundle in &room.bundles {
            assert_ne!(bundle.name, "The Missing Bundle");
        }
    }
}

#[test]
fn crafts_room_bundles_in_table_order() {
    let cat = parse_catalog(FIXTURE).unwrap();
    let names = names_of(cat.bundles_for_room("Crafts Room"));
    assert_eq!(names, vec!["Spring Foraging Bundle", "Fall Foraging Bundle"]);
}

#[test]
fn spring_foraging_end_to_end() {
    let cat = parse_catalog(FIXTURE).unwrap();
    let bundles = cat.bundles_for_room("Crafts Room");
    let spring = &bundles[0];
    assert_eq!(spring.required, 2);
    assert_eq!(spring.room, "Crafts Room");

    let items = cat.items_for_bundle("Crafts Room", "Spring Foraging Bundle");
    assert_eq!(names_of(items.clone()), vec!["Wild Horseradish", "Daffodil"]);
    assert!(items.iter().all(|i| !i.donated));
}

#[test]
fn reward_cells_are_excluded() {
    let cat = parse_catalog(FIXTURE).unwrap();
    let items = names_of(cat.items_for_bundle("Crafts Room", "Fall Foraging Bundle"));
    assert_eq!(items, vec!["Common Mushroom", "Wild Plum", "Hazelnut"]);
    // "30 Fall Seeds" is the reward, not an item.
}

#[test]
fn quality_items_carry_one_trailing_newline() {
    let cat = parse_catalog(FIXTURE).unwrap();
    let items = names_of(cat.items_for_bundle("Pantry", "Quality Crops Bundle"));
    assert_eq!(items, vec!["Parsnip (gold)\n", "Melon (gold)\n", "Pumpkin (gold)\n"]);
    for name in &items {
        assert!(name.ends_with('\n'));
        assert!(!name.ends_with("\n\n"));
    }
}

#[test]
fn required_count_bound_holds_for_non_quality_bundles() {
    let cat = parse_catalog(FIXTURE).unwrap();
    for room in &cat.rooms {
        for bundle in &room.bundles {
            if !bundle.name.contains("Quality") {
                assert!(
                    bundle.required <= bundle.items.len(),
                    "{}: required {} > {} items",
                    bundle.name,
                    bundle.required,
                    bundle.items.len()
                );
            }
        }
    }
}

#[test]
fn vault_room_parses_like_any_other() {
    let cat = parse_catalog(FIXTURE).unwrap();
    let names = names_of(cat.bundles_for_room("Vault"));
    assert_eq!(names, vec!["2,500g Bundle"]);
    assert_eq!(cat.items_for_bundle("Vault", "2,500g Bundle").len(), 1);
}

#[test]
fn table_scan_stops_at_the_fixed_cap() {
    let mut doc = String::from("<h2>One</h2><h2>Two</h2><h2>Crafts Room</h2>");
    for i in 0..BUNDLE_TABLE_SCAN_LIMIT + 5 {
        doc.push_str(&format!(
            concat!(
                r#"<table class="wikitable"><tr><th>*Bundle {i}*</th></tr>"#,
                r#"<tr><td><img src="b.png"></td><td><span>slot</span></td></tr></table>"#,
            ),
            i = i
        ));
    }
    let cat = parse_catalog(&doc).unwrap();
    let names = names_of(cat.bundles_for_room("Crafts Room"));
    assert_eq!(names.len(), BUNDLE_TABLE_SCAN_LIMIT);
    assert_eq!(names[0], "Bundle 0");
    assert_eq!(names[BUNDLE_TABLE_SCAN_LIMIT - 1], format!("Bundle {}", BUNDLE_TABLE_SCAN_LIMIT - 1));
}

// The minimal scenario: two headings to skip, one room, one standard bundle.
#[test]
fn minimal_document_round_trip() {
    let doc = concat!(
        "<h2>One</h2><h2>Two</h2><h2>Crafts Room</h2>",
        r#"<table class="wikitable"><tr><th>*Spring Foraging Bundle*</th></tr><tr>"#,
        r#"<td><img src="b.png"></td>"#,
        r#"<td><a href="/s"><img src="s.png"></a><a href="/s"><img src="s.png"></a></td>"#,
        "<td>Wild Horseradish</td>",
        r#"<td><img src="h.png"></td>"#,
        "<td>Daffodil</td>",
        r#"<td><img src="d.png"></td>"#,
        "<td>Seeds</td>",
        r#"<td><img src="s.png"></td>"#,
        "</tr></table>",
    );
    let cat = parse_catalog(doc).unwrap();
    assert_eq!(names_of(cat.rooms.iter()), vec!["Crafts Room"]);

    let items = cat.items_for_bundle("Crafts Room", "Spring Foraging Bundle");
    assert_eq!(names_of(items.clone()), vec!["Wild Horseradish", "Daffodil"]);
    assert!(items.iter().all(|i| !i.donated));
    assert_eq!(cat.bundles_for_room("Crafts Room")[0].required, 2);
}
