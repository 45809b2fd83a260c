//! Menu entries offered on each interactive screen.
//!
//! Built from the control's current state so disabled features and
//! impossible actions never appear.

use std::fmt;

use brreg_control::{Control, MapReview};
use brreg_core::PresentationMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchAction {
    ChangeMode,
    EditQuery,
    Search,
    SelectCompany,
    EditDetails,
    ViewJson,
    ViewMap,
    Export,
    Accept,
    Clear,
    Close,
}

pub(crate) struct SearchItem<'a> {
    pub(crate) action: SearchAction,
    control: &'a Control,
}

impl fmt::Display for SearchItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.control.session();
        match self.action {
            SearchAction::ChangeMode => write!(f, "Search mode: {}", session.mode()),
            SearchAction::EditQuery if session.query().is_empty() => {
                write!(f, "Query: <{}>", session.mode().placeholder())
            }
            SearchAction::EditQuery => write!(f, "Query: {}", session.query()),
            SearchAction::Search => {
                write!(f, "{}", session.mode().search_label(session.is_searching()))
            }
            SearchAction::SelectCompany => {
                write!(f, "Select company ({} results)", session.results().len())
            }
            SearchAction::EditDetails => write!(f, "Edit details"),
            SearchAction::ViewJson => write!(f, "View JSON"),
            SearchAction::ViewMap => write!(f, "View on map"),
            SearchAction::Export => write!(f, "Export to Excel"),
            SearchAction::Accept => write!(f, "Accept"),
            SearchAction::Clear => write!(f, "Clear"),
            SearchAction::Close => match self.control.settings().mode {
                PresentationMode::Button => write!(f, "Close"),
                PresentationMode::Form => write!(f, "Quit"),
            },
        }
    }
}

/// Entries for the search screen, in display order.
pub(crate) fn search_actions(control: &Control) -> Vec<SearchItem<'_>> {
    let features = control.settings().features;
    let session = control.session();
    let selected = control.selected().is_some();
    let editable = !features.disabled;

    let candidates = [
        (
            SearchAction::ChangeMode,
            editable && session.available_modes().len() > 1,
        ),
        (SearchAction::EditQuery, editable),
        (SearchAction::Search, editable),
        (
            SearchAction::SelectCompany,
            editable && !session.results().is_empty(),
        ),
        (SearchAction::EditDetails, editable && selected),
        (SearchAction::ViewJson, features.view_json && selected),
        (SearchAction::ViewMap, features.view_map && selected),
        (SearchAction::Export, features.export_excel && selected),
        (SearchAction::Accept, editable),
        (SearchAction::Clear, editable),
        (SearchAction::Close, true),
    ];

    candidates
        .into_iter()
        .filter(|(_, shown)| *shown)
        .map(|(action, _)| SearchItem { action, control })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapAction {
    Pick,
    UsePinned,
    DismissPinned,
    DismissInstructions,
    DismissNotFound,
    Close,
}

impl fmt::Display for MapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MapAction::Pick => "Pick a location",
            MapAction::UsePinned => "Use pinned address",
            MapAction::DismissPinned => "Discard pinned address",
            MapAction::DismissInstructions => "Hide instructions",
            MapAction::DismissNotFound => "Hide \"address not found\" notice",
            MapAction::Close => "Close map",
        };
        f.write_str(label)
    }
}

pub(crate) fn map_actions(map: &MapReview) -> Vec<MapAction> {
    let pinned = map.pinned().is_some();
    [
        (MapAction::Pick, true),
        (MapAction::UsePinned, pinned),
        (MapAction::DismissPinned, pinned),
        (MapAction::DismissInstructions, map.show_instructions()),
        (MapAction::DismissNotFound, map.address_not_found()),
        (MapAction::Close, true),
    ]
    .into_iter()
    .filter(|(_, shown)| *shown)
    .map(|(action, _)| action)
    .collect()
}
