//! Fill the form field-by-field and print the derived preview.
//!
//! Run with: `cargo run --example preview`

use invoice_form::form::InvoiceForm;

fn main() {
    let mut form = InvoiceForm::new();
    for (path, value) in [
        ("invoice_number", "INV-2024-001"),
        ("invoice_date", "2024-03-05"),
        ("seller.name", "ACME Traders"),
        ("seller.address", "12 Hill Road, Mumbai"),
        ("seller.gst_number", "27AAPFU0939F1ZV"),
        ("buyer.name", "Kunde & Co"),
        ("buyer.address", "4 Lake View, Pune"),
        ("line_items.0.product_name", "Widget"),
        ("line_items.0.quantity", "2"),
        ("line_items.0.rate_per_unit", "100"),
        ("line_items.0.tax_percentage", "18"),
    ] {
        form.update_field(path, value).expect("known field path");
    }

    form.add_line_item();
    form.update_field("line_items.1.product_name", "Hosting")
        .expect("known field path");
    form.update_field("line_items.1.rate_per_unit", "49.90")
        .expect("known field path");

    let preview = form.preview();
    println!("Invoice {} — {}", preview.invoice_number, preview.display_date);
    println!("{:<4}{:<20}{:>6}{:>10}{:>8}{:>12}", "#", "Product", "Qty", "Rate", "Tax %", "Amount");
    for row in &preview.rows {
        println!(
            "{:<4}{:<20}{:>6}{:>10}{:>8}{:>12}",
            row.position, row.product_name, row.quantity, row.rate_per_unit,
            row.tax_percentage, row.amount,
        );
    }
    println!("{:>60}", format!("Grand Total  {}", preview.grand_total));
}
