//! Render decisions shared by every front end.
//!
//! Nothing here knows about a widget toolkit; the TUI and the one-shot
//! printer both ask these functions what to show.

use crate::types::{ContactRecord, DomainRecord, LookupState};

pub const NOT_AVAILABLE: &str = "N/A";

pub fn display_value(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

pub type Row<'a> = (&'static str, &'a str);

impl DomainRecord {
    pub fn rows(&self) -> [Row<'_>; 6] {
        [
            ("Domain Name", display_value(self.domain_name.as_deref())),
            ("Registrar", display_value(self.registrar.as_deref())),
            ("Registration Date", display_value(self.registration_date.as_deref())),
            ("Expiration Date", display_value(self.expiration_date.as_deref())),
            ("Estimated Domain Age", display_value(self.estimated_age.as_deref())),
            ("Hostnames", display_value(self.hostnames.as_deref())),
        ]
    }
}

impl ContactRecord {
    pub fn rows(&self) -> [Row<'_>; 4] {
        [
            ("Registrant Name", display_value(self.registrant_name.as_deref())),
            ("Technical Contact Name", display_value(self.technical_contact_name.as_deref())),
            (
                "Administrative Contact Name",
                display_value(self.administrative_contact_name.as_deref()),
            ),
            ("Contact Email", display_value(self.contact_email.as_deref())),
        ]
    }
}

/// What goes in the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView<'a> {
    SideBySide {
        domain: &'a DomainRecord,
        contact: &'a ContactRecord,
    },
    /// A single table, centered.
    DomainOnly(&'a DomainRecord),
    ContactOnly(&'a ContactRecord),
    /// No results and no error: the feature cards.
    Landing,
    /// An error with no results; only the banner shows.
    Nothing,
}

pub fn results_view(state: &LookupState) -> ResultsView<'_> {
    match (&state.domain_record, &state.contact_record) {
        (Some(domain), Some(contact)) => ResultsView::SideBySide { domain, contact },
        (Some(domain), None) => ResultsView::DomainOnly(domain),
        (None, Some(contact)) => ResultsView::ContactOnly(contact),
        (None, None) if state.error.is_none() => ResultsView::Landing,
        (None, None) => ResultsView::Nothing,
    }
}

pub fn error_banner(state: &LookupState) -> Option<&str> {
    state.error.as_deref().filter(|e| !e.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

pub fn submit_control(state: &LookupState) -> SubmitControl {
    if state.is_loading {
        SubmitControl {
            enabled: false,
            busy: true,
            label: "Searching...",
        }
    } else {
        SubmitControl {
            enabled: true,
            busy: false,
            label: "Search Domain",
        }
    }
}

/// The clear control exists only while a result is on screen.
pub fn show_clear(state: &LookupState) -> bool {
    state.has_results()
}
