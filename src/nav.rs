// src/nav.rs
//
// Menu-driven traversal of the catalog. Explicit state machine with uniform
// cancellation: cancel at the item menu returns to bundles, at the bundle
// menu to rooms, at the room menu it exits.

use std::io::{self, BufRead, Write};

use crate::catalog::{names_of, Catalog};
use crate::menu::{clear, show_menu, MenuChoice};
use crate::params::VAULT_ROOM;

enum NavState {
    Rooms,
    Bundles(String),
    Items(String, String),
    Exit,
}

/// Run the menu loop to completion. The catalog must be fully built before
/// this is called; its shape never changes underneath the menus, only the
/// donated flags do.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let mut state = NavState::Rooms;
    loop {
        state = match state {
            NavState::Rooms => room_menu(catalog, input, out)?,
            NavState::Bundles(room) => bundle_menu(catalog, input, out, room)?,
            NavState::Items(room, bundle) => item_menu(catalog, input, out, room, bundle)?,
            NavState::Exit => return Ok(()),
        };
    }
}

fn room_menu<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<NavState> {
    clear(out)?;
    writeln!(out, "Welcome to the Stardew Valley Community Center Bundle Tracker!")?;
    writeln!(out, "{}", "*".repeat(40))?;
    writeln!(out, "Please select a room")?;

    let names = names_of(catalog.rooms.iter());
    Ok(match show_menu(input, out, &names, true)? {
        MenuChoice::Pick(i) => NavState::Bundles(names[i].clone()),
        MenuChoice::Cancel => NavState::Exit,
    })
}

fn bundle_menu<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
    room: String,
) -> io::Result<NavState> {
    clear(out)?;
    writeln!(out, "Please select a bundle")?;

    let names = names_of(catalog.bundles_for_room(&room));
    Ok(match show_menu(input, out, &names, true)? {
        MenuChoice::Pick(i) if room == VAULT_ROOM => {
            // Vault bundles are bought outright: picking one completes it
            // and stays here, no item menu.
            catalog.complete_bundle(&room, &names[i]);
            writeln!(out, "{} marked complete", names[i])?;
            NavState::Bundles(room)
        }
        MenuChoice::Pick(i) => NavState::Items(room, names[i].clone()),
        MenuChoice::Cancel => NavState::Rooms,
    })
}

fn item_menu<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
    room: String,
    bundle: String,
) -> io::Result<NavState> {
    clear(out)?;
    writeln!(out, "Select the item you've donated to the Community Center")?;

    let names = names_of(catalog.items_for_bundle(&room, &bundle));
    Ok(match show_menu(input, out, &names, true)? {
        MenuChoice::Pick(i) => {
            catalog.toggle_item(&room, &bundle, i);
            NavState::Items(room, bundle)
        }
        MenuChoice::Cancel => NavState::Bundles(room),
    })
}
