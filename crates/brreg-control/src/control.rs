//! The control instance shared by both presentation variants.
//!
//! [`Control`] owns the search session, the editable form and the shell state
//! (dialog, map review, pending geocode). Front ends translate user input
//! into calls on it and render the notifications it returns.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use brreg_core::{
    geocode_query, AppConfig, CompanyRecord, Coordinates, Features, FormState, GeocodeRequest,
    Notification, OutputRecord, PinnedAddress, PresentationMode, SearchMode,
};
use brreg_export::{export_company, ExportError};
use brreg_geocode::GeocodeClient;
use brreg_registry::RegistryClient;
use tokio::task::JoinHandle;

use crate::error::ControlError;
use crate::map_review::MapReview;
use crate::session::SearchSession;

/// Host-provided settings that do not change while the control is alive.
#[derive(Debug, Clone)]
pub struct ControlSettings {
    pub mode: PresentationMode,
    pub features: Features,
    pub country: String,
    pub page_size: u32,
    pub tile_url: String,
    pub export_dir: PathBuf,
}

impl ControlSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            mode: config.mode,
            features: config.features,
            country: config.country.clone(),
            page_size: config.page_size,
            tile_url: config.tile_url.clone(),
            export_dir: config.export_dir.clone(),
        }
    }
}

/// Result of pressing accept.
#[derive(Debug, Clone, PartialEq)]
pub enum AcceptOutcome {
    /// The snapshot handed to the host; the control has been reset.
    Accepted {
        record: Box<OutputRecord>,
        notification: Notification,
    },
    /// Nothing selected; no output was produced.
    Rejected(Notification),
    /// The control is disabled.
    Ignored,
}

struct PendingGeocode {
    generation: u64,
    handle: JoinHandle<Option<Coordinates>>,
}

pub struct Control {
    registry: RegistryClient,
    geocoder: Arc<GeocodeClient>,
    settings: ControlSettings,
    session: SearchSession,
    form: FormState,
    dialog_open: bool,
    map: Option<MapReview>,
    pending_geocode: Option<PendingGeocode>,
    geocode_generation: u64,
}

impl Control {
    /// Builds both HTTP clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError`] if either client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ControlError> {
        let registry = RegistryClient::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.registry_base_url,
        )?;
        let geocoder = GeocodeClient::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.geocoder_base_url,
        )?;
        Ok(Self::with_clients(
            registry,
            Arc::new(geocoder),
            ControlSettings::from_config(config),
        ))
    }

    #[must_use]
    pub fn with_clients(
        registry: RegistryClient,
        geocoder: Arc<GeocodeClient>,
        settings: ControlSettings,
    ) -> Self {
        Self {
            registry,
            geocoder,
            session: SearchSession::new(settings.features.advanced_search),
            settings,
            form: FormState::default(),
            dialog_open: false,
            map: None,
            pending_geocode: None,
            geocode_generation: 0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    #[must_use]
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Editable form fields; `None` while the control is disabled.
    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        (!self.is_disabled()).then_some(&mut self.form)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CompanyRecord> {
        self.session.selected()
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    #[must_use]
    pub fn map(&self) -> Option<&MapReview> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut MapReview> {
        self.map.as_mut()
    }

    #[must_use]
    pub fn has_pending_geocode(&self) -> bool {
        self.pending_geocode.is_some()
    }

    fn is_disabled(&self) -> bool {
        self.settings.features.disabled
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    pub fn set_query(&mut self, raw: &str) {
        if self.is_disabled() {
            return;
        }
        self.session.set_query(raw);
    }

    /// Returns `false` when `mode` is gated off or the control is disabled.
    pub fn set_mode(&mut self, mode: SearchMode) -> bool {
        !self.is_disabled() && self.session.set_mode(mode)
    }

    /// Runs the current query against the registry.
    ///
    /// The form is cleared before the request goes out. Returns the single
    /// notification to show, or `None` when the control is disabled.
    pub async fn search(&mut self) -> Option<Notification> {
        if self.is_disabled() {
            return None;
        }
        let ticket = match self.session.begin_search() {
            Ok(ticket) => ticket,
            Err(notification) => return Some(notification),
        };
        self.reset_form();

        let outcome = self
            .registry
            .search(&ticket.query, ticket.mode, self.settings.page_size)
            .await;
        self.session.finish_search(&ticket, outcome)
    }

    /// Selects the result with `org_number` and seeds the form from it.
    ///
    /// A blank `org_number` clears the selection and the form. The forward
    /// geocode, if any, runs in the background; see
    /// [`Control::settle_geocode`].
    pub fn select(&mut self, org_number: &str) -> Option<Notification> {
        if self.is_disabled() {
            return None;
        }
        if org_number.trim().is_empty() {
            self.session.deselect();
            self.reset_form();
            return None;
        }

        let record = self.session.select(org_number.trim())?.clone();
        self.abort_geocode();
        self.map = None;
        let request = self.form.populate_from_company(
            &record,
            &self.settings.country,
            self.settings.features.view_map,
        );
        if let Some(request) = request {
            self.spawn_geocode(request);
        }
        Some(Notification::success(
            "Company selected",
            format!("Selected {}", record.name),
        ))
    }

    // ------------------------------------------------------------------
    // Background geocode
    // ------------------------------------------------------------------

    fn spawn_geocode(&mut self, request: GeocodeRequest) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime; skipping geocode");
            return;
        };
        let geocoder = Arc::clone(&self.geocoder);
        self.geocode_generation += 1;
        let handle = runtime.spawn(async move { geocoder.forward(&request.query).await });
        self.pending_geocode = Some(PendingGeocode {
            generation: self.geocode_generation,
            handle,
        });
    }

    /// Supersedes the pending geocode so its result is never applied.
    fn abort_geocode(&mut self) {
        self.geocode_generation += 1;
        if let Some(pending) = self.pending_geocode.take() {
            pending.handle.abort();
        }
    }

    /// Waits for the pending geocode and stores its coordinates in the form.
    ///
    /// Returns the coordinates applied, or `None` when nothing was pending,
    /// the address could not be located, or the result was superseded.
    pub async fn settle_geocode(&mut self) -> Option<Coordinates> {
        let pending = self.pending_geocode.take()?;
        let found = match pending.handle.await {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!(error = %e, "geocode task did not complete");
                return None;
            }
        };
        if pending.generation != self.geocode_generation {
            tracing::debug!(
                task = pending.generation,
                current = self.geocode_generation,
                "discarding stale geocode"
            );
            return None;
        }
        self.form.set_coordinates(found);
        found
    }

    /// Applies the pending geocode only if it has already finished.
    pub async fn poll_geocode(&mut self) -> Option<Coordinates> {
        let finished = self
            .pending_geocode
            .as_ref()
            .is_some_and(|p| p.handle.is_finished());
        if finished {
            self.settle_geocode().await
        } else {
            None
        }
    }

    // ------------------------------------------------------------------
    // Dialog and accept
    // ------------------------------------------------------------------

    /// Opens the search dialog in name mode.
    pub fn open_dialog(&mut self) {
        self.session.reset_mode();
        self.dialog_open = true;
    }

    /// Closes the dialog and discards all session and form state.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.clear();
    }

    /// Back to a never-used control. Keeps the search mode.
    pub fn clear(&mut self) {
        self.session.clear();
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.abort_geocode();
        self.form.clear();
        self.map = None;
    }

    /// Commits the form for the selected company, then resets the control.
    ///
    /// A background geocode that has already finished is applied first, so
    /// resolved coordinates reach the output record.
    pub async fn accept(&mut self) -> AcceptOutcome {
        if self.is_disabled() {
            return AcceptOutcome::Ignored;
        }
        self.poll_geocode().await;
        let Some(selected) = self.session.selected() else {
            return AcceptOutcome::Rejected(Notification::error(
                "Error",
                "Please select a company first",
            ));
        };

        let record = OutputRecord::from_form(
            &selected.org_number,
            &self.form,
            self.settings.features.view_map,
        );
        tracing::info!(org_number = %record.org_number, "company accepted");
        self.close_dialog();
        AcceptOutcome::Accepted {
            record: Box::new(record),
            notification: Notification::success(
                "Success",
                "Company information accepted successfully!",
            ),
        }
    }

    // ------------------------------------------------------------------
    // Sub-dialogs
    // ------------------------------------------------------------------

    /// Pretty-printed JSON of the selected record, if the viewer is enabled.
    #[must_use]
    pub fn record_json(&self) -> Option<String> {
        if !self.settings.features.view_json {
            return None;
        }
        self.session.selected().map(CompanyRecord::to_pretty_json)
    }

    /// Opens the map review for the selected company.
    ///
    /// Centres on the form's coordinates, waiting for a pending geocode
    /// first; when those are missing the company address is looked up again.
    pub async fn open_map(&mut self) -> Option<&MapReview> {
        if !self.settings.features.view_map {
            return None;
        }
        let address = self.session.selected()?.business_address.clone();

        if self.pending_geocode.is_some() {
            self.settle_geocode().await;
        }
        let located = match (self.form.coordinates, address) {
            (Some(coordinates), _) => Some(coordinates),
            (None, Some(address)) => {
                let query = geocode_query(&address, &self.settings.country);
                self.geocoder.forward(&query).await
            }
            (None, None) => None,
        };

        self.map = Some(MapReview::open(located, &self.settings.tile_url));
        self.map.as_ref()
    }

    pub fn close_map(&mut self) {
        self.map = None;
    }

    /// Reverse-geocodes a click on the open map and pins the result.
    ///
    /// A lookup failure raises the map's "address not found" notice.
    pub async fn map_click(&mut self, coordinates: Coordinates) -> Option<&PinnedAddress> {
        self.map.as_ref()?;
        let result = self.geocoder.reverse(coordinates).await;
        let map = self.map.as_mut()?;
        match result {
            Ok(Some(pinned)) => map.pin(pinned),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "reverse geocode failed");
                map.mark_not_found();
            }
        }
        map.pinned()
    }

    /// Copies the pinned address into the form and closes the map.
    pub fn apply_pinned(&mut self) -> Option<Notification> {
        if self.is_disabled() {
            return None;
        }
        let pinned = self.map.as_mut()?.take_pinned()?;
        self.abort_geocode();
        self.form.apply_address_from_map(&pinned.to_address_data());
        self.map = None;
        Some(Notification::success(
            "Address selected",
            "Address applied from map",
        ))
    }

    /// Writes the selected record to the export directory.
    ///
    /// Returns `Ok(None)` when exporting is disabled or nothing is selected.
    ///
    /// # Errors
    ///
    /// Propagates [`ExportError`] from the writer untouched.
    pub fn export(&self) -> Result<Option<PathBuf>, ExportError> {
        self.export_to(&self.settings.export_dir)
    }

    /// Like [`Control::export`] with an explicit target directory.
    ///
    /// # Errors
    ///
    /// Propagates [`ExportError`] from the writer untouched.
    pub fn export_to(&self, dir: &Path) -> Result<Option<PathBuf>, ExportError> {
        if !self.settings.features.export_excel {
            return Ok(None);
        }
        let Some(record) = self.session.selected() else {
            return Ok(None);
        };
        export_company(record, dir).map(Some)
    }
}

impl Drop for Control {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_geocode.take() {
            pending.handle.abort();
        }
    }
}
