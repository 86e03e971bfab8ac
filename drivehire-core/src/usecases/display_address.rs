use parking_lot::Mutex;

use super::{prelude::*, AddressResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Showing the stored address.
    Initial,
    /// Showing the stored address while waiting for the resolved one.
    Resolving,
    /// Showing the resolved address.
    Resolved,
    /// Showing the stored address because no address could be resolved.
    Failed,
    /// The slot lost interest before the address was resolved.
    Abandoned,
}

/// A place in a view that shows the address of a single location.
///
/// The stored address is shown immediately. If the location has
/// coordinates the text is replaced by the resolved address later on.
/// A failed lookup is not retried until the slot is bound to other
/// coordinates or abandoned.
/// Every new binding and every teardown starts a new generation and
/// results that belong to an older generation are discarded.
#[derive(Debug)]
pub struct AddressDisplay {
    slot: Mutex<Slot>,
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    state: DisplayState,
    text: String,
    key: Option<CoordinateKey>,
}

/// An outstanding address lookup of an [`AddressDisplay`].
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct PendingAddress {
    generation: u64,
    pos: MapPoint,
}

impl PendingAddress {
    pub const fn pos(&self) -> MapPoint {
        self.pos
    }
}

impl Default for AddressDisplay {
    fn default() -> Self {
        let slot = Slot {
            generation: 0,
            state: DisplayState::Initial,
            text: String::new(),
            key: None,
        };
        Self {
            slot: Mutex::new(slot),
        }
    }
}

impl AddressDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a location to this slot.
    ///
    /// Returns the lookup that has to be completed if
    /// a new resolution cycle has been started.
    pub fn show(&self, location: &LocationRecord, append_city: bool) -> Option<PendingAddress> {
        let pos = location.pos();
        let key = pos.map(MapPoint::coordinate_key);
        let mut slot = self.slot.lock();
        if key.is_some() && slot.key == key {
            match slot.state {
                DisplayState::Resolving | DisplayState::Failed => {
                    slot.text = location.display_text(append_city);
                    return None;
                }
                DisplayState::Resolved => {
                    return None;
                }
                DisplayState::Initial | DisplayState::Abandoned => {}
            }
        }
        slot.generation = slot.generation.wrapping_add(1);
        slot.text = location.display_text(append_city);
        slot.key = key;
        match pos {
            Some(pos) => {
                slot.state = DisplayState::Resolving;
                Some(PendingAddress {
                    generation: slot.generation,
                    pos,
                })
            }
            None => {
                slot.state = DisplayState::Initial;
                None
            }
        }
    }

    /// Apply the result of a lookup.
    ///
    /// Returns `true` if the shown text has been replaced.
    pub fn complete(&self, pending: PendingAddress, address: Option<String>) -> bool {
        let mut slot = self.slot.lock();
        if slot.generation != pending.generation || slot.state != DisplayState::Resolving {
            log::debug!("Discarding stale address of ({})", pending.pos);
            return false;
        }
        match address {
            Some(address) => {
                slot.text = address;
                slot.state = DisplayState::Resolved;
                true
            }
            None => {
                slot.state = DisplayState::Failed;
                false
            }
        }
    }

    /// The slot is no longer interested in any outstanding lookup,
    /// e.g. because the view has been torn down.
    ///
    /// The next binding starts a new resolution cycle.
    pub fn abandon(&self) {
        let mut slot = self.slot.lock();
        slot.generation = slot.generation.wrapping_add(1);
        slot.key = None;
        if slot.state == DisplayState::Resolving {
            slot.state = DisplayState::Abandoned;
        }
    }

    pub fn is_current(&self, pending: &PendingAddress) -> bool {
        self.slot.lock().generation == pending.generation
    }

    pub fn text(&self) -> String {
        self.slot.lock().text.clone()
    }

    pub fn state(&self) -> DisplayState {
        self.slot.lock().state
    }
}

/// Complete a pending lookup of a display slot.
///
/// The lookup itself runs to completion even if the slot
/// has lost interest in the meantime. Only the result is dropped.
pub async fn upgrade_address<G>(
    resolver: &AddressResolver<G>,
    display: &AddressDisplay,
    pending: PendingAddress,
) -> bool
where
    G: ReverseGeocodingGateway,
{
    let address = resolver.resolve_pos(pending.pos()).await;
    display.complete(pending, address)
}

/// Bind a location to a display slot and upgrade the shown text
/// once its address has been resolved.
pub async fn display_address<G>(
    resolver: &AddressResolver<G>,
    display: &AddressDisplay,
    location: &LocationRecord,
    append_city: bool,
) -> bool
where
    G: ReverseGeocodingGateway,
{
    match display.show(location, append_city) {
        Some(pending) => upgrade_address(resolver, display, pending).await,
        None => false,
    }
}
