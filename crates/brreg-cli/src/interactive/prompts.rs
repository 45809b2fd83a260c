//! Thin dialoguer wrappers shared by the interactive screens.

use anyhow::Context as _;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

pub(crate) struct Prompter {
    theme: ColorfulTheme,
}

impl Prompter {
    pub(crate) fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Free-text input pre-filled with `initial`; empty input is allowed.
    pub(crate) fn text(&self, prompt: &str, initial: &str) -> anyhow::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .context("failed to read input")
    }

    pub(crate) fn number(&self, prompt: &str) -> anyhow::Result<f64> {
        Input::<f64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .context("failed to read number")
    }

    pub(crate) fn select<T: ToString>(
        &self,
        prompt: &str,
        items: &[T],
        default: usize,
    ) -> anyhow::Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .context("failed to read selection")
    }

    pub(crate) fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context("failed to read confirmation")
    }
}
