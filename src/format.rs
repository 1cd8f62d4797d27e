//! Result formatters and the output dispatch table.
//!
//! Each formatter renders one [`Paper`] to a string; the CLI prints them in
//! a fixed priority order for every enabled output flag. The BibTeX
//! formatter is the odd one out: it needs a round-trip to the export
//! endpoint, so it lives on the backend and is dispatched by bibcode.

use crate::types::Paper;

/// ADS web frontend base for the URL formatters.
const ABS_URL_BASE: &str = "https://ui.adsabs.harvard.edu";

/// Truncate `s` to at most `limit` characters. Strings at or above the
/// limit are cut to `limit - 3` characters plus an ellipsis, so the result
/// is exactly `limit` characters long.
pub fn truncate(s: &str, limit: usize) -> String {
    if s.chars().count() < limit {
        s.to_string()
    } else {
        let cut: String = s.chars().take(limit.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// One fixed-width line per paper: bibcode, first author, year, title.
pub fn format_row(paper: &Paper) -> String {
    format!(
        "{:<19} {:<20} {:<4} {}",
        paper.bibcode.as_deref().unwrap_or(""),
        truncate(paper.first_author.as_deref().unwrap_or(""), 20),
        paper.year.as_deref().unwrap_or(""),
        truncate(paper.title.as_deref().unwrap_or(""), 200)
    )
}

/// The raw abstract text (empty when the record has none).
pub fn format_abstract(paper: &Paper) -> String {
    paper.abstract_text.clone().unwrap_or_default()
}

/// URL of the ADS abstract page. `None` when the record has no bibcode.
pub fn url_abs(paper: &Paper) -> Option<String> {
    let bibcode = paper.bibcode.as_deref()?;
    Some(format!("{}/abs/{}/abstract", ABS_URL_BASE, bibcode))
}

/// Link-gateway URL for the full text. Papers with a DOI point at the
/// publisher PDF, the rest at the arXiv preprint. `None` when the record
/// has no bibcode.
pub fn url_pdf(paper: &Paper) -> Option<String> {
    let bibcode = paper.bibcode.as_deref()?;
    let source = if paper.doi.is_some() { "PUB" } else { "EPRINT" };
    Some(format!(
        "{}/link_gateway/{}/{}_PDF",
        ABS_URL_BASE, bibcode, source
    ))
}

/// One output formatter, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Row,
    Abstract,
    Bibtex,
    UrlAbs,
    UrlPdf,
}

/// The output toggles selected on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFlags {
    pub row: bool,
    pub abstract_text: bool,
    pub bibtex: bool,
    pub url_abs: bool,
    pub url_pdf: bool,
}

impl OutputFlags {
    /// The enabled formatters, in the fixed priority order
    /// row, abstract, bibtex, url_abs, url_pdf.
    pub fn enabled(&self) -> Vec<Formatter> {
        [
            (self.row, Formatter::Row),
            (self.abstract_text, Formatter::Abstract),
            (self.bibtex, Formatter::Bibtex),
            (self.url_abs, Formatter::UrlAbs),
            (self.url_pdf, Formatter::UrlPdf),
        ]
        .into_iter()
        .filter_map(|(on, formatter)| on.then_some(formatter))
        .collect()
    }
}
