use anyhow::Result;
use kaburesearch_lib::QuoteRecord;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Cards,
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct QuoteRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Yield")]
    #[serde(rename = "Yield")]
    dividend_yield: String,
    #[tabled(rename = "Benefit")]
    #[serde(rename = "Benefit")]
    benefit: String,
}

/// The three side-by-side fields under a card heading.
#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Yield")]
    dividend_yield: String,
    #[tabled(rename = "Benefit")]
    benefit: String,
}

// -- Row builders --

fn build_quote_rows(records: &[QuoteRecord]) -> Vec<QuoteRow> {
    records
        .iter()
        .map(|r| QuoteRow {
            code: r.code.clone(),
            name: r.name.clone(),
            price: r.price.clone(),
            dividend_yield: r.dividend_yield.clone(),
            benefit: r.benefit.to_string(),
        })
        .collect()
}

fn render_card(record: &QuoteRecord) -> String {
    let mut fields = Table::new([CardRow {
        price: record.price.clone(),
        dividend_yield: record.dividend_yield.clone(),
        benefit: record.benefit.to_string(),
    }]);
    fields.with(Style::rounded());
    format!("{}\n{}", record.title(), fields)
}

// -- Card output --

/// One narrow card per record, in the order given.
pub fn print_cards(records: &[QuoteRecord]) {
    for record in records {
        println!("{}\n", render_card(record));
    }
}

// -- Table output --

pub fn print_table(records: &[QuoteRecord]) {
    println!("{}", Table::new(build_quote_rows(records)));
}

// -- Markdown output --

pub fn print_markdown(records: &[QuoteRecord]) {
    let mut table = Table::new(build_quote_rows(records));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_csv(records: &[QuoteRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_quote_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaburesearch_lib::{BenefitFlag, PLACEHOLDER};

    fn records() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord {
                code: "7203".into(),
                name: "トヨタ自動車".into(),
                price: "2,880".into(),
                dividend_yield: "2.78%".into(),
                benefit: BenefitFlag::Absent,
            },
            QuoteRecord {
                code: "8591".into(),
                name: "オリックス".into(),
                price: "3,300".into(),
                dividend_yield: PLACEHOLDER.into(),
                benefit: BenefitFlag::Present,
            },
        ]
    }

    // -- Row builder tests --

    #[test]
    fn test_build_quote_rows_mapping() {
        let rows = build_quote_rows(&records());
        assert_eq!(rows.len(), 2);

        let row = &rows[1];
        assert_eq!(row.code, "8591");
        assert_eq!(row.name, "オリックス");
        assert_eq!(row.price, "3,300");
        assert_eq!(row.dividend_yield, "-");
        assert_eq!(row.benefit, "yes");
    }

    #[test]
    fn test_build_quote_rows_empty() {
        assert!(build_quote_rows(&[]).is_empty());
    }

    // -- Card tests --

    #[test]
    fn test_card_heading_is_name_and_code() {
        let card = render_card(&records()[0]);
        assert_eq!(card.lines().next().unwrap(), "トヨタ自動車 (7203)");
    }

    #[test]
    fn test_card_has_three_fields_side_by_side() {
        let card = render_card(&records()[0]);
        let header = card
            .lines()
            .find(|l| l.contains("Price"))
            .expect("field header line");
        assert!(header.contains("Yield"));
        assert!(header.contains("Benefit"));

        let values = card
            .lines()
            .find(|l| l.contains("2,880"))
            .expect("field value line");
        assert!(values.contains("2.78%"));
        assert!(values.contains("no"));
    }

    // -- CSV output tests --

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_csv_headers() {
        let csv = csv_from_rows(&build_quote_rows(&records()));
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "Code,Name,Price,Yield,Benefit");
        assert_eq!(lines.next().unwrap(), "7203,トヨタ自動車,\"2,880\",2.78%,no");
    }

    // -- JSON output tests --

    #[test]
    fn test_json_records_serializable() {
        let val = serde_json::to_value(records()).unwrap();
        let arr = val.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["code"], "7203");
        assert_eq!(arr[1]["benefit"], "present");
        assert_eq!(arr[1]["dividend_yield"], "-");
    }

    // -- Markdown output tests --

    #[test]
    fn test_markdown_structure() {
        let mut table = Table::new(build_quote_rows(&records()));
        table.with(Style::markdown());
        let md = table.to_string();

        assert!(md.contains('|'));
        assert!(md.contains("---"));
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Code"));
        assert!(header_line.contains("Yield"));
        assert!(header_line.contains("Benefit"));
    }
}
