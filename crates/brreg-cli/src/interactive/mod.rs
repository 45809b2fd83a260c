//! Interactive presentation shell.
//!
//! Both layouts drive the same [`Control`]: the inline form keeps the search
//! screen open until the user quits, the button layout opens it as a dialog
//! that closes on accept or close.

mod actions;
mod prompts;

use anyhow::Context as _;
use brreg_control::{AcceptOutcome, Control};
use brreg_core::{AppConfig, Coordinates, Notification, PresentationMode, SearchMode};
use chrono::NaiveDate;

use self::actions::{MapAction, SearchAction};
use self::prompts::Prompter;
use crate::{clipboard, render};

const TITLE: &str = "Business registry search";

/// Runs the shell in the configured layout until the user quits.
///
/// # Errors
///
/// Returns an error if the HTTP clients cannot be built or the terminal
/// cannot be read.
pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let mut control = Control::new(config)?;
    let prompter = Prompter::new();
    tracing::debug!(layout = %config.mode, "starting interactive shell");
    if config.features.show_title {
        println!("{TITLE}");
    }

    match config.mode {
        PresentationMode::Form => search_screen(&mut control, &prompter).await,
        PresentationMode::Button => loop {
            let choice = prompter.select(TITLE, &["Search the business registry", "Quit"], 0)?;
            if choice == 1 {
                return Ok(());
            }
            control.open_dialog();
            search_screen(&mut control, &prompter).await?;
        },
    }
}

async fn search_screen(control: &mut Control, prompter: &Prompter) -> anyhow::Result<()> {
    loop {
        control.poll_geocode().await;
        println!();
        render::form(control.form(), control.selected());

        let action = {
            let items = actions::search_actions(control);
            let index = prompter.select("Action", &items, 0)?;
            items[index].action
        };

        match action {
            SearchAction::ChangeMode => {
                let modes = control.session().available_modes();
                let current = modes
                    .iter()
                    .position(|m| *m == control.session().mode())
                    .unwrap_or(0);
                let index = prompter.select("Search by", modes, current)?;
                control.set_mode(modes[index]);
            }
            SearchAction::EditQuery => {
                let mode = control.session().mode();
                let current = control.session().query().to_string();
                let raw = prompter.text(mode.placeholder(), &current)?;
                match check_query_len(&raw, mode) {
                    Ok(()) => control.set_query(&raw),
                    Err(body) => render::notification(&Notification::error("Error", body)),
                }
            }
            SearchAction::Search => {
                eprintln!("{}", control.session().mode().loading_text());
                if let Some(notification) = control.search().await {
                    render::notification(&notification);
                }
                render::results(control.session().results());
            }
            SearchAction::SelectCompany => select_company(control, prompter)?,
            SearchAction::EditDetails => edit_details(control, prompter)?,
            SearchAction::ViewJson => view_json(control, prompter)?,
            SearchAction::ViewMap => map_screen(control, prompter).await?,
            SearchAction::Export => match control.export() {
                Ok(Some(path)) => render::notification(&Notification::success(
                    "Exported",
                    path.display().to_string(),
                )),
                Ok(None) => {}
                Err(e) => render::notification(&Notification::error("Export failed", e.to_string())),
            },
            SearchAction::Accept => match control.accept().await {
                AcceptOutcome::Accepted {
                    record,
                    notification,
                } => {
                    render::notification(&notification);
                    render::output_record(&record)?;
                    if control.settings().mode == PresentationMode::Button {
                        return Ok(());
                    }
                }
                AcceptOutcome::Rejected(notification) => render::notification(&notification),
                AcceptOutcome::Ignored => {}
            },
            SearchAction::Clear => control.clear(),
            SearchAction::Close => {
                control.close_dialog();
                return Ok(());
            }
        }
    }
}

fn select_company(control: &mut Control, prompter: &Prompter) -> anyhow::Result<()> {
    let mut labels: Vec<String> = control
        .session()
        .results()
        .iter()
        .map(brreg_core::CompanyRecord::display_label)
        .collect();
    labels.push("(none)".to_string());

    let current = control
        .selected()
        .and_then(|s| {
            control
                .session()
                .results()
                .iter()
                .position(|r| r.org_number == s.org_number)
        })
        .unwrap_or(0);
    let index = prompter.select("Company", &labels, current)?;

    let org = control
        .session()
        .results()
        .get(index)
        .map(|r| r.org_number.clone())
        .unwrap_or_default();
    if let Some(notification) = control.select(&org) {
        render::notification(&notification);
    }
    Ok(())
}

/// Rejects typed queries longer than the mode's input cap. Whitespace does
/// not count, so grouped organisation numbers still fit.
fn check_query_len(raw: &str, mode: SearchMode) -> Result<(), String> {
    let Some(max) = mode.max_input_len() else {
        return Ok(());
    };
    let len = raw.chars().filter(|c| !c.is_whitespace()).count();
    if len > max {
        return Err(format!("{mode} searches take at most {max} characters"));
    }
    Ok(())
}

const DETAIL_FIELDS: [&str; 9] = [
    "Name",
    "Address",
    "Postal code",
    "City",
    "Registration date (YYYY-MM-DD)",
    "Email",
    "Phone",
    "Website",
    "Done",
];

fn edit_details(control: &mut Control, prompter: &Prompter) -> anyhow::Result<()> {
    loop {
        let index = prompter.select("Edit field", &DETAIL_FIELDS, 0)?;
        let Some(form) = control.form_mut() else {
            return Ok(());
        };
        let field = match index {
            0 => &mut form.name,
            1 => &mut form.address,
            2 => &mut form.postal_code,
            3 => &mut form.city,
            4 => {
                let current = form
                    .registration_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                let raw = prompter.text(DETAIL_FIELDS[4], &current)?;
                match parse_registration_date(&raw) {
                    Ok(date) => form.registration_date = date,
                    Err(e) => render::notification(&Notification::error("Invalid date", e.to_string())),
                }
                continue;
            }
            5 => &mut form.email,
            6 => &mut form.phone,
            7 => &mut form.website,
            _ => return Ok(()),
        };
        *field = prompter.text(DETAIL_FIELDS[index], field)?;
    }
}

/// Blank input clears the date.
fn parse_registration_date(raw: &str) -> anyhow::Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .with_context(|| format!("'{raw}' is not a YYYY-MM-DD date"))
}

fn view_json(control: &Control, prompter: &Prompter) -> anyhow::Result<()> {
    let Some(json) = control.record_json() else {
        return Ok(());
    };
    println!("{json}");
    if prompter.confirm("Copy to clipboard?", false)? {
        render::notification(&clipboard::copy_text(&json));
    }
    Ok(())
}

async fn map_screen(control: &mut Control, prompter: &Prompter) -> anyhow::Result<()> {
    if control.open_map().await.is_none() {
        return Ok(());
    }

    loop {
        let Some(map) = control.map() else {
            return Ok(());
        };
        println!();
        render::map_view(&map.view(), &control.settings().tile_url);
        if map.show_instructions() {
            println!("  Pick a location to look up the nearest address.");
        }
        if map.address_not_found() {
            println!("  The company address could not be located.");
        }
        if let Some(pinned) = map.pinned() {
            render::pinned(pinned);
        }

        let choices = actions::map_actions(map);
        let index = prompter.select("Map", &choices, 0)?;
        match choices[index] {
            MapAction::Pick => {
                let lat = prompter.number("Latitude")?;
                let lng = prompter.number("Longitude")?;
                control.map_click(Coordinates::new(lat, lng)).await;
            }
            MapAction::UsePinned => {
                if let Some(notification) = control.apply_pinned() {
                    render::notification(&notification);
                }
            }
            MapAction::DismissPinned => {
                if let Some(map) = control.map_mut() {
                    map.dismiss_pinned();
                }
            }
            MapAction::DismissInstructions => {
                if let Some(map) = control.map_mut() {
                    map.dismiss_instructions();
                }
            }
            MapAction::DismissNotFound => {
                if let Some(map) = control.map_mut() {
                    map.dismiss_address_not_found();
                }
            }
            MapAction::Close => control.close_map(),
        }
    }
}
