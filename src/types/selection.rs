//! Transient UI selection state handed to the encoder and chart builder.

use crate::error::SolarMapError;
use crate::types::series::HOURS_PER_WINDOW;
use serde::{Deserialize, Serialize};

/// The hour the time control points at plus the selected and hovered sites.
///
/// Hosting shells update this from slider, click and hover events and pass it into
/// [`crate::SolarMap::chart`] and [`crate::SolarMap::markers`]. It is not part of the
/// fetched data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    current_hour: u8,
    selected_site: Option<String>,
    hovered_site: Option<String>,
}

impl SelectionState {
    /// Hour 0, nothing selected or hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hour index the time control points at, `0..=23`.
    pub fn current_hour(&self) -> u8 {
        self.current_hour
    }

    /// Moves the time control to `hour`.
    ///
    /// # Errors
    ///
    /// Returns [`SolarMapError::HourOutOfRange`] if `hour` is not in `0..=23`; the
    /// state is left unchanged.
    pub fn set_current_hour(&mut self, hour: u8) -> Result<(), SolarMapError> {
        if usize::from(hour) >= HOURS_PER_WINDOW {
            return Err(SolarMapError::HourOutOfRange(hour));
        }
        self.current_hour = hour;
        Ok(())
    }

    /// Site whose curve the chart shows, if any.
    pub fn selected_site(&self) -> Option<&str> {
        self.selected_site.as_deref()
    }

    /// Site under the pointer, if any.
    pub fn hovered_site(&self) -> Option<&str> {
        self.hovered_site.as_deref()
    }

    /// Selects `site` for the chart, replacing any previous selection.
    pub fn select(&mut self, site: impl Into<String>) {
        self.selected_site = Some(site.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_site = None;
    }

    /// Marks `site` as hovered.
    pub fn hover(&mut self, site: impl Into<String>) {
        self.hovered_site = Some(site.into());
    }

    pub fn clear_hover(&mut self) {
        self.hovered_site = None;
    }

    /// The site the info panel should describe: the hovered one, else the selected one.
    pub fn focused_site(&self) -> Option<&str> {
        self.hovered_site().or_else(|| self.selected_site())
    }
}
