use super::error::NaglowekError;
use super::kind::InvoiceKind;
use super::types::*;

/// Builder for invoices in any supported schema variant.
///
/// ```
/// use ksef_naglowek::core::*;
///
/// let invoice = InvoiceBuilder::new(SchemaVariant::Fa3, "FKZ/2025/05")
///     .kind(InvoiceKind::Kor)
///     .corrected_period("2025-01")
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.corrected_period(), Some("2025-01"));
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    schema: SchemaVariant,
    number: String,
    kind: InvoiceKind,
    corrected_period: Option<String>,
}

impl InvoiceBuilder {
    /// Start a basic (`VAT`) invoice.
    pub fn new(schema: SchemaVariant, number: impl Into<String>) -> Self {
        Self {
            schema,
            number: number.into(),
            kind: InvoiceKind::Vat,
            corrected_period: None,
        }
    }

    pub fn kind(mut self, kind: impl Into<InvoiceKind>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn corrected_period(mut self, period: impl Into<String>) -> Self {
        self.corrected_period = Some(period.into());
        self
    }

    /// Build the invoice. Fails if a corrected period is set on FA(1),
    /// which has no element to carry it.
    pub fn build(self) -> Result<Invoice, NaglowekError> {
        let Self {
            schema,
            number,
            kind,
            corrected_period,
        } = self;
        Ok(match schema {
            SchemaVariant::Fa1 => {
                if corrected_period.is_some() {
                    return Err(NaglowekError::Builder(
                        "FA (1) does not support OkresFaKorygowanej".into(),
                    ));
                }
                Invoice::Fa1(Fa1 { kind, number })
            }
            SchemaVariant::Fa2 => Invoice::Fa2(Fa2 {
                kind,
                number,
                corrected_period,
            }),
            SchemaVariant::Fa3 => Invoice::Fa3(Fa3 {
                kind,
                number,
                corrected_period,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_vat() {
        let inv = InvoiceBuilder::new(SchemaVariant::Fa2, "FV/1").build().unwrap();
        assert_eq!(inv.kind(), &InvoiceKind::Vat);
        assert_eq!(inv.number(), "FV/1");
        assert_eq!(inv.corrected_period(), None);
    }

    #[test]
    fn kind_from_code_string() {
        let inv = InvoiceBuilder::new(SchemaVariant::Fa1, "X/1")
            .kind("UNKNOWN")
            .build()
            .unwrap();
        assert_eq!(inv.kind(), &InvoiceKind::Other("UNKNOWN".into()));
    }

    #[test]
    fn fa1_rejects_corrected_period() {
        let err = InvoiceBuilder::new(SchemaVariant::Fa1, "FK/1")
            .kind(InvoiceKind::Kor)
            .corrected_period("2025-01")
            .build()
            .unwrap_err();
        assert!(matches!(err, NaglowekError::Builder(_)));
    }
}
