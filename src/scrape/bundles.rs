// src/scrape/bundles.rs
//
// Turns the Bundles page markup into a Catalog. The page is irregular: room
// grouping hangs off heading positions, bundle names are wrapped in decorative
// brackets, and quality-tier bundles nest their items in sub-tables. All of
// that is reproduced here literally; the catalog is all-or-nothing.

use crate::catalog::{Bundle, Catalog, Item, Room};
use crate::core::html;
use crate::error::ScrapeError;
use crate::params::{
    BUNDLE_TABLE_CLASS, BUNDLE_TABLE_SCAN_LIMIT, ROOM_HEADING_COUNT, ROOM_HEADING_SKIP,
};

pub fn parse_catalog(doc: &str) -> Result<Catalog, ScrapeError> {
    let headings = collect_headings(doc);
    let tables = collect_bundle_tables(doc);
    if tables.is_empty() {
        return Err(ScrapeError::NoBundleTables);
    }

    let mut rooms = Vec::new();
    for (_, room_name) in headings
        .iter()
        .skip(ROOM_HEADING_SKIP)
        .take(ROOM_HEADING_COUNT)
    {
        let mut bundles = Vec::new();
        for &(offset, table) in &tables {
            // Every scanned table must sit under some heading, whether or not
            // it belongs to the current room.
            let owner = owning_heading(&headings, offset)
                .ok_or(ScrapeError::OrphanTable { offset })?;
            if owner == room_name {
                bundles.push(parse_bundle(table, offset, room_name)?);
            }
        }
        rooms.push(Room { name: room_name.clone(), bundles });
    }

    if rooms.is_empty() {
        return Err(ScrapeError::NoRooms);
    }
    Ok(Catalog { rooms })
}

/* ---------- document structure ---------- */

/// All `<h2>` headings with their byte offsets, in document order.
fn collect_headings(doc: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = html::balanced_block(doc, "h2", pos) {
        let text = html::text_of(&html::inner_after_open_tag(&doc[start..end]));
        out.push((start, text));
        pos = end;
    }
    out
}

/// Bundle-shaped tables: class token matches, no inline style override.
/// The scan continues *inside* matched tables (nested tables are candidates
/// too, subject to the same filter) and stops at the fixed upper bound.
fn collect_bundle_tables(doc: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, open_end)) = html::next_open_tag(doc, "table", pos) {
        pos = open_end;
        if !is_bundle_table(&doc[start..open_end]) {
            continue;
        }
        if let Some((bs, be)) = html::balanced_block(doc, "table", start) {
            out.push((bs, &doc[bs..be]));
            if out.len() == BUNDLE_TABLE_SCAN_LIMIT {
                break;
            }
        }
    }
    out
}

fn is_bundle_table(open_tag: &str) -> bool {
    let classes = match html::attr_value(open_tag, "class") {
        Some(c) => c,
        None => return false,
    };
    classes.split_whitespace().any(|c| c == BUNDLE_TABLE_CLASS)
        && html::attr_value(open_tag, "style").is_none()
}

/// Nearest heading starting before `offset`.
fn owning_heading(headings: &[(usize, String)], offset: usize) -> Option<&String> {
    headings
        .iter()
        .take_while(|(at, _)| *at < offset)
        .last()
        .map(|(_, name)| name)
}

/* ---------- one table → one bundle ---------- */

fn parse_bundle(table: &str, offset: usize, room_name: &str) -> Result<Bundle, ScrapeError> {
    let name = bundle_name(table).ok_or(ScrapeError::MissingBundleName { offset })?;
    let cells = collect_cells(table);

    let items = if name.contains("Quality") {
        quality_items(&cells)
    } else {
        standard_items(&cells)
    };

    if cells.len() < 2 {
        return Err(ScrapeError::TooFewCells { name, found: cells.len() });
    }
    let required =
        html::child_element_count(&html::inner_after_open_tag(cells[1]));

    Ok(Bundle {
        name,
        required,
        room: s!(room_name),
        items,
    })
}

/// Header cell text with exactly one leading and one trailing character
/// stripped — the page wraps bundle names in a one-character decorative
/// bracket on each side. Length-safe, char-wise.
fn bundle_name(table: &str) -> Option<String> {
    let (start, end) = html::balanced_block(table, "th", 0)?;
    let text = html::text_of(&html::inner_after_open_tag(&table[start..end]));
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    Some(chars.collect())
}

/// All `<td>` cells of the table, recursively and in document order: cells of
/// nested sub-tables appear after the cell that contains them.
fn collect_cells(table: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, open_end)) = html::next_open_tag(table, "td", pos) {
        if let Some((bs, be)) = html::balanced_block(table, "td", start) {
            out.push(&table[bs..be]);
        }
        pos = open_end;
    }
    out
}

/// Standard shape: item names sit in every other cell from index 2, stopping
/// short of the last two (reward cells).
fn standard_items(cells: &[&str]) -> Vec<Item> {
    let stop = cells.len().saturating_sub(2);
    let mut items = Vec::new();
    let mut i = 2usize;
    while i < stop {
        let text = html::text_of(&html::inner_after_open_tag(cells[i]));
        items.push(Item::new(text.trim_start()));
        i += 2;
    }
    items
}

/// Quality-tier shape: every cell is scanned for nested sub-tables, one item
/// per sub-table. The item name is the sub-table's full text, left-trimmed,
/// with one trailing newline appended — kept verbatim, display and equality
/// downstream depend on the exact string.
fn quality_items(cells: &[&str]) -> Vec<Item> {
    let mut items = Vec::new();
    for cell in cells {
        let inner = html::inner_after_open_tag(cell);
        let mut pos = 0usize;
        while let Some((start, open_end)) = html::next_open_tag(&inner, "table", pos) {
            if let Some((bs, be)) = html::balanced_block(&inner, "table", start) {
                let text = html::text_of(&inner[bs..be]);
                items.push(Item::new(join!(text.trim_start(), "\n")));
            }
            pos = open_end;
        }
    }
    items
}
