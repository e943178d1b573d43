/// catalog filtering, display order, and price-sheet validation
use installment_pricing_rs::chrono::{TimeZone, Utc};
use installment_pricing_rs::{
    format_brl, sort_catalog, CatalogFilter, Condition, PriceSheet, ProductRecord, Uuid,
};

fn record(name: &str, price: &str, condition: Condition, day: u32) -> ProductRecord {
    ProductRecord {
        id: Uuid::new_v4(),
        product_name: name.to_string(),
        storage_variant: Some("256GB".to_string()),
        condition: Some(condition),
        color_options: Some("Preto".to_string()),
        reseller_name: Some("Loja Centro".to_string()),
        listed_price_text: Some(price.to_string()),
        member_price_text: None,
        created_timestamp: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).single(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut records = vec![
        record("MacBook Air 13", "10.499,00", Condition::New, 2),
        record("iPhone 17 Pro", "11.999,00", Condition::New, 3),
        record("iPhone 13", "3.299,00", Condition::Used, 1),
        record("iPad Air 11", "6.799,00", Condition::New, 4),
    ];

    sort_catalog(&mut records);

    let filter = CatalogFilter {
        search_term: None,
        created_on: None,
        condition: Some(Condition::New),
    };

    println!("novos, em ordem de vitrine:");
    for r in records.iter().filter(|r| filter.matches(r)) {
        println!("  {} - {}", r.display_name(), format_brl(r.listed_price()));
    }

    // price sheets are validated before the upload is attempted
    let sheet = PriceSheet::new("precos-semana.csv", b"produto;preco\n".to_vec())?;
    println!("pronto para enviar: {} ({:?})", sheet.file_name(), sheet.kind());

    match PriceSheet::new("precos.pdf", Vec::new()) {
        Ok(_) => unreachable!(),
        Err(e) => {
            let notice = e.notice();
            println!("{}: {}", notice.title, notice.description);
        }
    }

    Ok(())
}
