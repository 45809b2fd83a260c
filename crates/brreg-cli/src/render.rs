//! Terminal rendering of results, form fields and notifications.

use brreg_core::{
    format_address, CompanyRecord, FormState, Intent, Notification, OutputRecord, PinnedAddress,
};
use brreg_geocode::{MapView, ATTRIBUTION};

const NAME_WIDTH: usize = 44;

/// Notifications are transient UI chatter, so they go to stderr.
pub(crate) fn notification(notification: &Notification) {
    let tag = match notification.intent {
        Intent::Success => "ok",
        Intent::Info => "info",
        Intent::Error => "error",
    };
    eprintln!("[{tag}] {notification}");
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}...", text.chars().take(width - 3).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn result_row(record: &CompanyRecord) -> String {
    format!(
        "{:<11}{:<width$}{}",
        record.org_number,
        truncate(&record.name, NAME_WIDTH - 2),
        format_address(record.business_address.as_ref()),
        width = NAME_WIDTH,
    )
}

pub(crate) fn results(records: &[CompanyRecord]) {
    if records.is_empty() {
        return;
    }
    println!("{:<11}{:<width$}ADDRESS", "ORG NUMBER", "NAME", width = NAME_WIDTH);
    for record in records {
        println!("{}", result_row(record));
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

pub(crate) fn form(form: &FormState, selected: Option<&CompanyRecord>) {
    let Some(selected) = selected else {
        println!("(no company selected)");
        return;
    };
    let date = form
        .registration_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let coordinates = form.coordinates.map(|c| c.to_string()).unwrap_or_default();

    println!("  Organization number  {}", selected.org_number);
    println!("  Name                 {}", or_dash(&form.name));
    println!("  Address              {}", or_dash(&form.address));
    println!("  Postal code          {}", or_dash(&form.postal_code));
    println!("  City                 {}", or_dash(&form.city));
    println!("  Registration date    {}", or_dash(&date));
    println!("  Coordinates          {}", or_dash(&coordinates));
    println!("  Email                {}", or_dash(&form.email));
    println!("  Phone                {}", or_dash(&form.phone));
    println!("  Website              {}", or_dash(&form.website));
}

pub(crate) fn map_view(view: &MapView, tile_template: &str) {
    println!(
        "  Centre {} (zoom {}){}",
        view.center,
        view.zoom,
        if view.located { "" } else { " [fallback view]" }
    );
    println!("  Tile   {}", view.center_tile().url(tile_template));
    println!("  {ATTRIBUTION}");
}

pub(crate) fn pinned(pinned: &PinnedAddress) {
    println!("  Pinned       {}", pinned.display_name);
    println!("  Address      {}", or_dash(&pinned.street));
    println!("  Postal code  {}", or_dash(&pinned.postal_code));
    println!("  City         {}", or_dash(&pinned.city));
    println!("  Coordinates  {}", pinned.coordinates);
}

/// The accepted record is the program's output, printed as JSON on stdout.
///
/// # Errors
///
/// Returns an error if the record cannot be serialised.
pub(crate) fn output_record(record: &OutputRecord) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
