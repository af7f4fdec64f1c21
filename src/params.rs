// src/params.rs
//
// Structural constants tied to the wiki's Bundles page layout.

pub const HOST: &str = "stardewvalleywiki.com";
pub const PAGE_PATH: &str = "/Bundles";

/// The page's first two `<h2>` sections are navigation/introduction, not rooms;
/// the six community center rooms are headings 3 through 8 in document order.
/// This is a positional coupling to one page layout, not content matching —
/// schema drift on the wiki breaks it here, loudly, rather than somewhere
/// deeper in the parser.
pub const ROOM_HEADING_SKIP: usize = 2;
pub const ROOM_HEADING_COUNT: usize = 6;

/// Bundle tables carry this class and no inline style override.
pub const BUNDLE_TABLE_CLASS: &str = "wikitable";

/// Upper bound on scanned bundle tables, mirroring the page's known table count.
pub const BUNDLE_TABLE_SCAN_LIMIT: usize = 30;

/// Bundles in this room are bought outright; picking one completes it
/// instead of opening an item menu.
pub const VAULT_ROOM: &str = "Vault";
