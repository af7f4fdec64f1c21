// src/catalog.rs
//
// The parsed Room → Bundle → Item hierarchy plus the read-only query layer
// the menus are built from. The catalog's shape never changes after parsing;
// only the per-item `donated` flags mutate.

/// One donatable object. Names are not globally unique: the same item in two
/// bundles is two independent instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub donated: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), donated: false }
    }

    /// Flip the donated flag; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.donated = !self.donated;
        self.donated
    }
}

/// A named collection of items with a required-slot threshold. `room` is a
/// back-reference by name, used for lookup only.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub name: String,
    pub required: usize,
    pub room: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub bundles: Vec<Bundle>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub rooms: Vec<Room>,
}

pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Item {
    fn name(&self) -> &str { &self.name }
}
impl Named for Bundle {
    fn name(&self) -> &str { &self.name }
}
impl Named for Room {
    fn name(&self) -> &str { &self.name }
}

/// Name projection used to build every menu.
pub fn names_of<'a, T, I>(objs: I) -> Vec<String>
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    objs.into_iter().map(|o| s!(o.name())).collect()
}

impl Catalog {
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// All bundles of every room matching `room_name`, concatenated in room
    /// order. Unknown room → empty, not an error.
    pub fn bundles_for_room(&self, room_name: &str) -> Vec<&Bundle> {
        let mut out = Vec::new();
        for room in &self.rooms {
            if room.name == room_name {
                out.extend(room.bundles.iter());
            }
        }
        out
    }

    /// Same flatten pattern one level down: items of every bundle matching
    /// `bundle_name` within the room-filtered bundle set.
    pub fn items_for_bundle(&self, room_name: &str, bundle_name: &str) -> Vec<&Item> {
        let mut out = Vec::new();
        for bundle in self.bundles_for_room(room_name) {
            if bundle.name == bundle_name {
                out.extend(bundle.items.iter());
            }
        }
        out
    }

    /// Toggle the `index`-th item of the flattened view `items_for_bundle`
    /// returns. Same match-and-concatenate walk, mutably. Returns the new
    /// donated state, or None if the index is out of range.
    pub fn toggle_item(&mut self, room_name: &str, bundle_name: &str, index: usize) -> Option<bool> {
        let mut i = 0usize;
        for room in &mut self.rooms {
            if room.name != room_name {
                continue;
            }
            for bundle in &mut room.bundles {
                if bundle.name != bundle_name {
                    continue;
                }
                for item in &mut bundle.items {
                    if i == index {
                        return Some(item.toggle());
                    }
                    i += 1;
                }
            }
        }
        None
    }

    /// Mark every item of the matching bundle(s) donated. One-shot, not a
    /// toggle: used for Vault bundles, which are bought outright.
    pub fn complete_bundle(&mut self, room_name: &str, bundle_name: &str) {
        for room in &mut self.rooms {
            if room.name != room_name {
                continue;
            }
            for bundle in &mut room.bundles {
                if bundle.name != bundle_name {
                    continue;
                }
                for item in &mut bundle.items {
                    item.donated = true;
                }
            }
        }
    }
}
