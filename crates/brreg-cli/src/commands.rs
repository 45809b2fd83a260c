//! One-shot subcommand handlers.
//!
//! Registry lookups go through the same [`Control`] the interactive shell
//! uses, so feature flags and notifications behave identically. Results go
//! to stdout; notifications go to stderr.

use std::path::Path;

use anyhow::Context as _;
use brreg_control::Control;
use brreg_core::{AppConfig, Coordinates, SearchMode};
use brreg_geocode::{GeocodeClient, MapView};

use crate::{clipboard, render};

/// Runs one search and prints the result table.
///
/// # Errors
///
/// Returns an error if the HTTP clients cannot be built.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    mode: SearchMode,
) -> anyhow::Result<()> {
    let mut control = Control::new(config)?;
    if !control.set_mode(mode) {
        anyhow::bail!("search mode '{mode}' is not enabled");
    }
    control.set_query(query);
    if let Some(notification) = control.search().await {
        render::notification(&notification);
    }
    render::results(control.session().results());
    Ok(())
}

/// Looks up one company by organization number and selects it.
async fn select_by_org_number(config: &AppConfig, org_number: &str) -> anyhow::Result<Control> {
    let mut control = Control::new(config)?;
    if !control.set_mode(SearchMode::OrgNumber) {
        anyhow::bail!("organization number lookups are not enabled");
    }
    control.set_query(org_number);
    if let Some(notification) = control.search().await {
        render::notification(&notification);
    }
    let org = control
        .session()
        .results()
        .first()
        .map(|r| r.org_number.clone())
        .with_context(|| format!("no company with organization number {org_number}"))?;
    control.select(&org);
    Ok(control)
}

/// Prints the raw registry record, optionally copying it to the clipboard.
///
/// # Errors
///
/// Returns an error if the company cannot be found or the raw viewer is
/// disabled.
pub(crate) async fn run_show(
    config: &AppConfig,
    org_number: &str,
    copy: bool,
) -> anyhow::Result<()> {
    let control = select_by_org_number(config, org_number).await?;
    let json = control
        .record_json()
        .context("the raw record viewer is disabled")?;
    println!("{json}");
    if copy {
        render::notification(&clipboard::copy_text(&json));
    }
    Ok(())
}

/// Writes the company's spreadsheet and prints its path.
///
/// # Errors
///
/// Returns an error if the company cannot be found, exporting is disabled,
/// or the file cannot be written.
pub(crate) async fn run_export(
    config: &AppConfig,
    org_number: &str,
    dir: Option<&Path>,
) -> anyhow::Result<()> {
    let control = select_by_org_number(config, org_number).await?;
    let target = dir.unwrap_or(config.export_dir.as_path());
    let path = control
        .export_to(target)?
        .context("spreadsheet export is disabled")?;
    println!("{}", path.display());
    Ok(())
}

fn geocoder(config: &AppConfig) -> anyhow::Result<GeocodeClient> {
    GeocodeClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.geocoder_base_url,
    )
    .context("failed to build geocoding client")
}

/// Prints coordinates and the map tile for a free-text address.
///
/// # Errors
///
/// Returns an error if the geocoding request fails.
pub(crate) async fn run_geocode(config: &AppConfig, address: &str) -> anyhow::Result<()> {
    let client = geocoder(config)?;
    let Some(found) = client.try_forward(address).await? else {
        println!("address not found");
        return Ok(());
    };
    println!("{found}");
    render::map_view(&MapView::for_location(Some(found)), &config.tile_url);
    Ok(())
}

/// Prints the pinned-address guess for a coordinate.
///
/// # Errors
///
/// Returns an error if the geocoding request fails.
pub(crate) async fn run_reverse(config: &AppConfig, lat: f64, lng: f64) -> anyhow::Result<()> {
    let client = geocoder(config)?;
    match client.reverse(Coordinates::new(lat, lng)).await? {
        Some(pinned) => render::pinned(&pinned),
        None => println!("no address at {}", Coordinates::new(lat, lng)),
    }
    Ok(())
}
