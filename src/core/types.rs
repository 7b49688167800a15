use serde::{Deserialize, Serialize};

use super::kind::InvoiceKind;

/// FA schema variant (`KodFormularza@kodSystemowy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVariant {
    /// FA (1)
    Fa1,
    /// FA (2)
    Fa2,
    /// FA (3)
    Fa3,
}

impl SchemaVariant {
    /// System code as written in `KodFormularza@kodSystemowy`.
    pub fn system_code(&self) -> &'static str {
        match self {
            Self::Fa1 => "FA (1)",
            Self::Fa2 => "FA (2)",
            Self::Fa3 => "FA (3)",
        }
    }

    /// Parse from a system code. Accepts the spaced and unspaced spellings
    /// ("FA (3)", "FA(3)").
    pub fn from_system_code(code: &str) -> Option<Self> {
        let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "FA(1)" => Some(Self::Fa1),
            "FA(2)" => Some(Self::Fa2),
            "FA(3)" => Some(Self::Fa3),
            _ => None,
        }
    }
}

/// Header-relevant part of an FA(1) `Fa` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fa1 {
    /// `RodzajFaktury`.
    pub kind: InvoiceKind,
    /// `P_2`: invoice number.
    pub number: String,
}

/// Header-relevant part of an FA(2) `Fa` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fa2 {
    /// `RodzajFaktury`.
    pub kind: InvoiceKind,
    /// `P_2`: invoice number.
    pub number: String,
    /// `OkresFaKorygowanej`: period covered by a collective correction.
    pub corrected_period: Option<String>,
}

/// Header-relevant part of an FA(3) `Fa` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fa3 {
    /// `RodzajFaktury`.
    pub kind: InvoiceKind,
    /// `P_2`: invoice number.
    pub number: String,
    /// `OkresFaKorygowanej`: period covered by a collective correction.
    pub corrected_period: Option<String>,
}

/// An invoice in one of the supported FA schema variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invoice {
    /// FA (1) document.
    Fa1(Fa1),
    /// FA (2) document.
    Fa2(Fa2),
    /// FA (3) document.
    Fa3(Fa3),
}

impl Invoice {
    /// Schema variant the invoice was issued in.
    pub fn schema(&self) -> SchemaVariant {
        match self {
            Self::Fa1(_) => SchemaVariant::Fa1,
            Self::Fa2(_) => SchemaVariant::Fa2,
            Self::Fa3(_) => SchemaVariant::Fa3,
        }
    }

    /// Invoice kind (`RodzajFaktury`).
    pub fn kind(&self) -> &InvoiceKind {
        match self {
            Self::Fa1(fa) => &fa.kind,
            Self::Fa2(fa) => &fa.kind,
            Self::Fa3(fa) => &fa.kind,
        }
    }

    /// Invoice number (`P_2`).
    pub fn number(&self) -> &str {
        match self {
            Self::Fa1(fa) => &fa.number,
            Self::Fa2(fa) => &fa.number,
            Self::Fa3(fa) => &fa.number,
        }
    }

    /// Corrected period, if the variant carries one and it is set.
    /// FA(1) has no such element.
    pub fn corrected_period(&self) -> Option<&str> {
        match self {
            Self::Fa1(_) => None,
            Self::Fa2(fa) => fa.corrected_period.as_deref(),
            Self::Fa3(fa) => fa.corrected_period.as_deref(),
        }
    }
}

impl From<Fa1> for Invoice {
    fn from(fa: Fa1) -> Self {
        Self::Fa1(fa)
    }
}

impl From<Fa2> for Invoice {
    fn from(fa: Fa2) -> Self {
        Self::Fa2(fa)
    }
}

impl From<Fa3> for Invoice {
    fn from(fa: Fa3) -> Self {
        Self::Fa3(fa)
    }
}

/// Data supplied next to the invoice by the KSeF integration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    /// KSeF reference number assigned to the invoice (`nrKSeF`).
    #[serde(rename = "nrKSeF", default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    /// Payload to encode as a barcode image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

impl AdditionalData {
    /// Empty additional data: no reference number, no barcode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the KSeF reference number.
    pub fn reference_number(mut self, number: impl Into<String>) -> Self {
        self.reference_number = Some(number.into());
        self
    }

    /// Set the barcode payload.
    pub fn barcode(mut self, payload: impl Into<String>) -> Self {
        self.barcode = Some(payload.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_codes() {
        assert_eq!(SchemaVariant::from_system_code("FA (3)"), Some(SchemaVariant::Fa3));
        assert_eq!(SchemaVariant::from_system_code("FA(1)"), Some(SchemaVariant::Fa1));
        assert_eq!(SchemaVariant::from_system_code(" FA (2) "), Some(SchemaVariant::Fa2));
        assert_eq!(SchemaVariant::from_system_code("FA (4)"), None);
        assert_eq!(SchemaVariant::from_system_code(""), None);
        for v in [SchemaVariant::Fa1, SchemaVariant::Fa2, SchemaVariant::Fa3] {
            assert_eq!(SchemaVariant::from_system_code(v.system_code()), Some(v));
        }
    }

    #[test]
    fn fa1_has_no_corrected_period() {
        let inv: Invoice = Fa1 {
            kind: InvoiceKind::Kor,
            number: "FK/1".into(),
        }
        .into();
        assert_eq!(inv.schema(), SchemaVariant::Fa1);
        assert_eq!(inv.corrected_period(), None);
    }

    #[test]
    fn accessors() {
        let inv: Invoice = Fa3 {
            kind: InvoiceKind::Kor,
            number: "FKZ/2025/05".into(),
            corrected_period: Some("2025-01".into()),
        }
        .into();
        assert_eq!(inv.schema(), SchemaVariant::Fa3);
        assert_eq!(inv.kind(), &InvoiceKind::Kor);
        assert_eq!(inv.number(), "FKZ/2025/05");
        assert_eq!(inv.corrected_period(), Some("2025-01"));
    }

    #[test]
    fn additional_data_field_names() {
        let data: AdditionalData =
            serde_json::from_str(r#"{"nrKSeF":"KSEF123","barcode":"ABC123"}"#).unwrap();
        assert_eq!(data.reference_number.as_deref(), Some("KSEF123"));
        assert_eq!(data.barcode.as_deref(), Some("ABC123"));

        let empty: AdditionalData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AdditionalData::new());
    }
}
