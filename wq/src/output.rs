use console::style;
use libwhois_lookup::{
    view::{error_banner, results_view, ResultsView, Row},
    HistoryEntry, LookupMode, LookupState,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum LineStatus {
    Ok,
    Error,
}

/// One NDJSON line per lookup.
#[derive(Debug, Serialize)]
struct LookupLine<'a> {
    domain: &'a str,
    #[serde(rename = "type")]
    mode: LookupMode,
    status: LineStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

pub fn lookup_line(domain: &str, mode: LookupMode, state: &LookupState) -> serde_json::Result<String> {
    let record = match mode {
        LookupMode::Domain => state.domain_record.as_ref().map(serde_json::to_value).transpose()?,
        LookupMode::Contact => state.contact_record.as_ref().map(serde_json::to_value).transpose()?,
    };
    let error = error_banner(state);
    let line = LookupLine {
        domain,
        mode,
        status: if error.is_some() { LineStatus::Error } else { LineStatus::Ok },
        record,
        error,
    };
    serde_json::to_string(&line)
}

fn table(out: &mut String, title: &str, rows: &[Row<'_>], styled: bool) {
    if styled {
        out.push_str(&format!("{}\n", style(title).bold().cyan()));
    } else {
        out.push_str(title);
        out.push('\n');
    }
    for (label, value) in rows {
        if styled {
            out.push_str(&format!("  {:<28} {}\n", style(label).dim(), value));
        } else {
            out.push_str(&format!("  {:<28} {}\n", label, value));
        }
    }
}

/// Text rendering of the result area, following the same rules as the TUI.
pub fn render_text(state: &LookupState, styled: bool) -> String {
    let mut out = String::new();

    if let Some(message) = error_banner(state) {
        if styled {
            out.push_str(&format!("{} {}\n", style("error:").red().bold(), style(message).red()));
        } else {
            out.push_str(&format!("error: {}\n", message));
        }
    }

    match results_view(state) {
        ResultsView::SideBySide { domain, contact } => {
            table(&mut out, LookupMode::Domain.label(), &domain.rows(), styled);
            out.push('\n');
            table(&mut out, LookupMode::Contact.label(), &contact.rows(), styled);
        }
        ResultsView::DomainOnly(domain) => {
            table(&mut out, LookupMode::Domain.label(), &domain.rows(), styled)
        }
        ResultsView::ContactOnly(contact) => {
            table(&mut out, LookupMode::Contact.label(), &contact.rows(), styled)
        }
        ResultsView::Landing | ResultsView::Nothing => {}
    }

    out
}

pub fn history_line(entry: &HistoryEntry) -> String {
    format!(
        "{:<20} {:<8} {}",
        entry.created_at.as_deref().unwrap_or("-"),
        if entry.kind.is_empty() { "-" } else { entry.kind.as_str() },
        entry.domain
    )
}
