//! State of the map review sub-dialog.

use brreg_core::{Coordinates, PinnedAddress};
use brreg_geocode::MapView;

#[derive(Debug, Clone)]
pub struct MapReview {
    view: MapView,
    tile_url: String,
    pinned: Option<PinnedAddress>,
    address_not_found: bool,
    show_instructions: bool,
}

impl MapReview {
    /// Opens centred on `located`, or on the fallback view with the
    /// "address not found" notice raised.
    #[must_use]
    pub fn open(located: Option<Coordinates>, tile_url: &str) -> Self {
        Self {
            view: MapView::for_location(located),
            tile_url: tile_url.to_string(),
            pinned: None,
            address_not_found: located.is_none(),
            show_instructions: true,
        }
    }

    #[must_use]
    pub fn view(&self) -> MapView {
        self.view
    }

    /// Tile URL for the view centre.
    #[must_use]
    pub fn center_tile_url(&self) -> String {
        self.view.center_tile().url(&self.tile_url)
    }

    #[must_use]
    pub fn pinned(&self) -> Option<&PinnedAddress> {
        self.pinned.as_ref()
    }

    #[must_use]
    pub fn address_not_found(&self) -> bool {
        self.address_not_found
    }

    #[must_use]
    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn dismiss_instructions(&mut self) {
        self.show_instructions = false;
    }

    pub fn dismiss_address_not_found(&mut self) {
        self.address_not_found = false;
    }

    pub fn dismiss_pinned(&mut self) {
        self.pinned = None;
    }

    pub(crate) fn pin(&mut self, pinned: PinnedAddress) {
        self.pinned = Some(pinned);
    }

    /// A failed reverse lookup keeps the map usable and raises the notice.
    pub(crate) fn mark_not_found(&mut self) {
        self.address_not_found = true;
    }

    pub(crate) fn take_pinned(&mut self) -> Option<PinnedAddress> {
        self.pinned.take()
    }
}
