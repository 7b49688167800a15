//! `TRodzajFaktury` — invoice kind codes of the FA schema.
//!
//! The code space is open: documents produced by newer schema versions may
//! carry kinds this crate does not know. Those are kept verbatim in
//! [`InvoiceKind::Other`] instead of being rejected.

use serde::{Deserialize, Serialize};

/// Invoice kind (`RodzajFaktury`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceKind {
    /// VAT — basic invoice.
    Vat,
    /// KOR — correction invoice.
    Kor,
    /// ZAL — advance payment invoice.
    Zal,
    /// ROZ — settlement invoice.
    Roz,
    /// UPR — simplified invoice.
    Upr,
    /// KOR_ZAL — correction of an advance payment invoice.
    KorZal,
    /// KOR_ROZ — correction of a settlement invoice.
    KorRoz,
    /// Any other code value.
    Other(String),
}

impl InvoiceKind {
    /// Schema code string.
    pub fn code(&self) -> &str {
        match self {
            Self::Vat => "VAT",
            Self::Kor => "KOR",
            Self::Zal => "ZAL",
            Self::Roz => "ROZ",
            Self::Upr => "UPR",
            Self::KorZal => "KOR_ZAL",
            Self::KorRoz => "KOR_ROZ",
            Self::Other(c) => c,
        }
    }

    /// Parse from a schema code string. Surrounding whitespace is ignored;
    /// unrecognized codes are preserved.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "VAT" => Self::Vat,
            "KOR" => Self::Kor,
            "ZAL" => Self::Zal,
            "ROZ" => Self::Roz,
            "UPR" => Self::Upr,
            "KOR_ZAL" => Self::KorZal,
            "KOR_ROZ" => Self::KorRoz,
            c => Self::Other(c.to_string()),
        }
    }

    /// Built-in display label, `None` for unrecognized codes.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Vat => Some("Faktura"),
            Self::Kor => Some("Faktura korygująca"),
            Self::Zal => Some("Faktura zaliczkowa"),
            Self::Roz => Some("Faktura rozliczeniowa"),
            Self::Upr => Some("Faktura uproszczona"),
            Self::KorZal => Some("Faktura korygująca fakturę zaliczkową"),
            Self::KorRoz => Some("Faktura korygująca fakturę rozliczeniową"),
            Self::Other(_) => None,
        }
    }

    /// True for codes this crate has a built-in label for.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for InvoiceKind {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<&str> for InvoiceKind {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<InvoiceKind> for String {
    fn from(kind: InvoiceKind) -> Self {
        kind.code().to_string()
    }
}

impl std::fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[&str] = &["VAT", "KOR", "ZAL", "ROZ", "UPR", "KOR_ZAL", "KOR_ROZ"];

    #[test]
    fn known_codes_roundtrip() {
        for code in KNOWN {
            let kind = InvoiceKind::from_code(code);
            assert!(kind.is_known(), "{code} should be known");
            assert_eq!(kind.code(), *code);
            assert!(kind.label().is_some());
        }
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let kind = InvoiceKind::from_code("UNKNOWN");
        assert_eq!(kind, InvoiceKind::Other("UNKNOWN".into()));
        assert_eq!(kind.code(), "UNKNOWN");
        assert!(kind.label().is_none());
        assert!(!kind.is_known());
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(InvoiceKind::from_code("vat"), InvoiceKind::Other("vat".into()));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(InvoiceKind::from_code(" KOR\n"), InvoiceKind::Kor);
    }

    #[test]
    fn serde_uses_code_strings() {
        let json = serde_json::to_string(&InvoiceKind::KorZal).unwrap();
        assert_eq!(json, "\"KOR_ZAL\"");
        let kind: InvoiceKind = serde_json::from_str("\"XYZ\"").unwrap();
        assert_eq!(kind, InvoiceKind::Other("XYZ".into()));
    }
}
