use chrono::NaiveDate;
use quickbill::core::*;
use quickbill::export::export_file_name;
use quickbill::store::{InvoiceStore, MemoryStore};
use rust_decimal_macros::dec;

fn main() {
    let store = InvoiceStore::new(MemoryStore::new());

    // New draft: generated id and number, due date 30 days out, USD,
    // business inherited from the (here: default) profile.
    let mut invoice = store.create_draft_on(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    invoice.business.name = "Acme Studio".into();
    invoice.business.email = "billing@acme.test".into();
    invoice.client.name = "Widget Co".into();
    invoice.client.email = "accounts@widget.test".into();

    invoice.items.push(LineItem::new("Design workshop", dec!(2), dec!(450)));
    invoice.items.push(LineItem::new("Widget", dec!(10), dec!(9.99)));
    invoice.tax_rate = dec!(10);
    invoice.discount = dec!(50);
    invoice.notes = "Net 30.\nThank you for your business!".into();
    invoice.template = Template::Modern;

    let symbol = invoice.currency.symbol();
    let totals = invoice.totals();
    println!("{} — issued {}", invoice.number, format_display_date(invoice.date));
    for item in &invoice.items {
        println!(
            "  {:<20} {:>6} x {}{:<8} = {}{}",
            item.description,
            item.quantity,
            symbol,
            item.rate,
            symbol,
            item.amount()
        );
    }
    println!("  subtotal {}{}", symbol, totals.subtotal);
    println!("  tax      {}{}", symbol, totals.tax);
    println!("  total    {}{}", symbol, totals.total);

    ensure_valid(&invoice).expect("invoice should pass validation");
    let saved = store.save(&invoice).expect("save should succeed");
    println!(
        "saved as {} ({} on file), exports as {}",
        saved.id,
        store.list_all().len(),
        export_file_name(&saved)
    );

    // The saved business identity becomes the profile for the next draft.
    let next = store.create_draft_on(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    println!("next draft: {} from {}", next.number, next.business.name);
}
