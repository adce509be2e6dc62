//! Display formatting helpers for product fields.

/// Format a price in dollars (e.g., "$65.00", "$1,299.50" stays plain
/// "$1299.50" — the catalog never reaches amounts where separators help).
pub fn fmt_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Render a 0-5 rating as filled/hollow stars, always 5 characters wide.
pub fn fmt_rating(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}
