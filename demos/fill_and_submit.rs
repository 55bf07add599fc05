//! Fill the form and submit it to a running generator service, saving the
//! returned PDF into the current directory.
//!
//! Run with: `cargo run --example fill_and_submit --features submit`
//! (expects the generator service on http://127.0.0.1:8000)

use invoice_form::client::{status_message, GeneratorClient};
use invoice_form::form::InvoiceForm;

#[tokio::main]
async fn main() {
    let mut form = InvoiceForm::new();
    for (path, value) in [
        ("invoice_number", "INV-2024-001"),
        ("invoice_date", "2024-03-05"),
        ("seller.name", "ACME Traders"),
        ("seller.address", "12 Hill Road, Mumbai"),
        ("seller.gst_number", "27AAPFU0939F1ZV"),
        ("seller.phone_number", "+91 98765 43210"),
        ("buyer.name", "Kunde & Co"),
        ("buyer.address", "4 Lake View, Pune"),
        ("line_items.0.product_name", "Widget"),
        ("line_items.0.quantity", "2"),
        ("line_items.0.rate_per_unit", "100"),
        ("line_items.0.tax_percentage", "18"),
    ] {
        form.update_field(path, value).expect("known field path");
    }

    println!("Grand total: {}", form.grand_total());

    let client = GeneratorClient::new().expect("client construction");
    let outcome = client
        .submit(form.invoice(), std::path::Path::new("."))
        .await;

    println!("{}", status_message(&outcome));
    match outcome {
        Ok(receipt) => println!(
            "Saved {} ({} bytes)",
            receipt.pdf_path.display(),
            receipt.bytes_written
        ),
        Err(err) => eprintln!("detail: {err}"),
    }
}
