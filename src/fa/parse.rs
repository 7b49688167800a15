use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::*;

#[derive(Default)]
struct FaParsed {
    system_code: Option<String>,
    kind: Option<String>,
    number: Option<String>,
    corrected_period: Option<String>,
}

impl FaParsed {
    fn handle_text(&mut self, path: &[String], text: &str) {
        let [.., parent, current] = path else {
            return;
        };
        if parent != "Fa" {
            return;
        }
        let slot = match current.as_str() {
            "RodzajFaktury" => &mut self.kind,
            "P_2" => &mut self.number,
            "OkresFaKorygowanej" => &mut self.corrected_period,
            _ => return,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    fn capture_system_code(&mut self, e: &BytesStart<'_>) {
        for attr in e.attributes().flatten() {
            if attr.key.local_name().as_ref() == b"kodSystemowy" {
                let val = attr.unescape_value().unwrap_or_default();
                self.system_code = Some(val.into_owned());
            }
        }
    }

    fn into_invoice(self) -> Result<Invoice, NaglowekError> {
        let code = self
            .system_code
            .ok_or_else(|| NaglowekError::Xml("missing KodFormularza@kodSystemowy".into()))?;
        let schema = SchemaVariant::from_system_code(&code)
            .ok_or_else(|| NaglowekError::Xml(format!("unsupported form code '{code}'")))?;

        let mut builder = InvoiceBuilder::new(schema, self.number.unwrap_or_default().trim())
            .kind(InvoiceKind::from_code(self.kind.as_deref().unwrap_or_default()));
        if schema != SchemaVariant::Fa1 {
            if let Some(period) = self.corrected_period {
                builder = builder.corrected_period(period.trim());
            }
        }
        builder.build()
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Read the header-relevant fields of an FA (1), FA (2) or FA (3) document.
///
/// Namespace prefixes are ignored. A missing `RodzajFaktury` yields an empty
/// [`InvoiceKind::Other`], which renders with the placeholder label.
pub fn from_fa_xml(xml: &str) -> Result<Invoice, NaglowekError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut p = FaParsed::default();
    let mut path: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = local_name(e);
                if name == "KodFormularza" {
                    p.capture_system_code(e);
                }
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                if local_name(e) == "KodFormularza" {
                    p.capture_system_code(e);
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| NaglowekError::Xml(format!("invalid text: {err}")))?;
                if !text.is_empty() {
                    p.handle_text(&path, &text);
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e);
                if !text.is_empty() {
                    p.handle_text(&path, &text);
                }
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(NaglowekError::Xml(format!(
                    "parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    p.into_invoice()
}
