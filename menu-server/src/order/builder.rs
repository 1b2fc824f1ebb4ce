//! Order message and deep-link builder
//!
//! Turns a cart snapshot, language and optional table identifier into the
//! outbound WhatsApp link. The generated URL is the system's only wire
//! format; nothing is sent from here.

use shared::models::{CartItem, Language};

use super::phone;

/// Deep-link endpoint for starting a chat with an arbitrary number
const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Fixed currency suffix for totals
const CURRENCY: &str = "LBP";

/// A fully built order link
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OrderLink {
    /// Human-readable order message
    pub message: String,
    /// `https://api.whatsapp.com/send?phone=…&text=…`
    pub url: String,
    /// Order total in the smallest LBP unit
    pub total: i64,
}

/// Exact integer order total: Σ price × quantity
pub fn cart_total(cart: &[CartItem]) -> i64 {
    cart.iter().map(CartItem::line_total).sum()
}

/// One `<quantity>x <localized name>` line per cart entry, in cart order
pub fn order_summary(cart: &[CartItem], language: Language) -> String {
    cart.iter()
        .map(|entry| format!("{}x {}", entry.quantity, entry.item.name(language)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the order message and WhatsApp deep link for the current cart
///
/// `table` falls back to the literal `"General"` when absent (orders
/// placed from the plain menu URL rather than a table QR code).
pub fn build_order(
    cart: &[CartItem],
    language: Language,
    table: Option<&str>,
    whatsapp_number: &str,
) -> OrderLink {
    let total = cart_total(cart);
    let summary = order_summary(cart, language);

    let message = format!(
        "Hello, I want to order:\n\n{summary}\n\nTable: {}\nTotal: {} {CURRENCY}",
        table.unwrap_or("General"),
        group_thousands(total),
    );

    let url = format!(
        "{WHATSAPP_SEND_URL}?phone={}&text={}",
        phone::normalize(whatsapp_number),
        urlencoding::encode(&message),
    );

    OrderLink {
        message,
        url,
        total,
    }
}

/// Format an integer with `,` thousands separators
fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
