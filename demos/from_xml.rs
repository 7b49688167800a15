use ksef_naglowek::core::NaglowekError;
use ksef_naglowek::fa::from_fa_xml;
use ksef_naglowek::header::{HeaderGenerator, to_json};

const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Faktura xmlns="http://crd.gov.pl/wzor/2025/06/25/13775/">
  <Naglowek>
    <KodFormularza kodSystemowy="FA (3)" wersjaSchemy="1-0E">FA</KodFormularza>
    <WariantFormularza>3</WariantFormularza>
  </Naglowek>
  <Fa>
    <KodWaluty>PLN</KodWaluty>
    <P_2>FKZ/2025/05</P_2>
    <RodzajFaktury>KOR</RodzajFaktury>
    <OkresFaKorygowanej>2025-01</OkresFaKorygowanej>
  </Fa>
</Faktura>"#;

fn main() -> Result<(), NaglowekError> {
    let invoice = from_fa_xml(XML)?;
    println!("Read {} invoice {}", invoice.schema().system_code(), invoice.number());

    let generator = HeaderGenerator::new(|_: &str| -> Result<String, NaglowekError> {
        Err(NaglowekError::Barcode("not used".into()))
    });
    let blocks = generator.generate(Some(&invoice), None)?;
    println!("{}", to_json(&blocks)?);
    Ok(())
}
