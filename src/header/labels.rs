use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{Invoice, InvoiceKind};

/// Label used when no invoice is available (template or preview renders).
pub const DEFAULT_LABEL: &str = "Faktura";

/// Label for invoice kinds without a known display name.
pub const PLACEHOLDER_LABEL: &str = "???";

/// Label for a `KOR` invoice covering a whole period.
pub const COLLECTIVE_CORRECTION_LABEL: &str = "Faktura korygująca zbiorcza";

/// Invoice-type labels shown in the header.
///
/// Built-in labels come from [`InvoiceKind::label`]. Per-code overrides take
/// precedence and may also name codes the crate does not know, so new kinds
/// can be labelled without a release.
///
/// ```
/// use ksef_naglowek::core::InvoiceKind;
/// use ksef_naglowek::header::LabelTable;
///
/// let labels = LabelTable::default().with_label("VAT_RR", "Faktura VAT RR");
/// let kind = InvoiceKind::from_code("VAT_RR");
/// assert_eq!(labels.resolve(Some(&kind), None), "Faktura VAT RR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelTable {
    /// Code → label overrides.
    pub overrides: BTreeMap<String, String>,
    /// Shown when there is no invoice.
    pub default_label: String,
    /// Shown for unknown codes.
    pub placeholder: String,
    /// Shown for `KOR` with a corrected period.
    pub collective_correction: String,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self {
            overrides: BTreeMap::new(),
            default_label: DEFAULT_LABEL.to_string(),
            placeholder: PLACEHOLDER_LABEL.to_string(),
            collective_correction: COLLECTIVE_CORRECTION_LABEL.to_string(),
        }
    }
}

impl LabelTable {
    /// Add or replace the label for `code`.
    pub fn with_label(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(code.into(), label.into());
        self
    }

    /// Resolve the label for an invoice kind.
    ///
    /// Never fails: an absent kind yields the default label and unknown
    /// codes yield the placeholder.
    pub fn resolve(&self, kind: Option<&InvoiceKind>, corrected_period: Option<&str>) -> &str {
        let Some(kind) = kind else {
            return &self.default_label;
        };
        if is_collective_correction(kind, corrected_period) {
            return &self.collective_correction;
        }
        if let Some(label) = self.overrides.get(kind.code()) {
            return label;
        }
        match kind.label() {
            Some(label) => label,
            None => {
                log::warn!("unknown invoice kind {:?}, using placeholder label", kind.code());
                &self.placeholder
            }
        }
    }

    /// Resolve the label for an invoice.
    pub fn resolve_invoice(&self, invoice: Option<&Invoice>) -> &str {
        self.resolve(
            invoice.map(Invoice::kind),
            invoice.and_then(Invoice::corrected_period),
        )
    }
}

/// A `KOR` invoice with a non-blank corrected period corrects a whole
/// period rather than a single invoice.
pub fn is_collective_correction(kind: &InvoiceKind, corrected_period: Option<&str>) -> bool {
    *kind == InvoiceKind::Kor && corrected_period.is_some_and(|p| !p.trim().is_empty())
}
