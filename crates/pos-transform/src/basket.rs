//! Basket parsing: flat order token stream to structured product entries.

use pos_model::ProductEntry;

use crate::error::{Result, TransformError};
use crate::text::title_case;

/// Descriptive marker substrings embedded in product names, stripped in
/// this fixed order. The flag records whether the marker marks an iced
/// product.
const MARKERS: [(&str, bool); 3] = [("Flavoured ", false), ("Speciality ", false), ("Iced ", true)];

/// Parses one order's flat token stream into product entries.
///
/// Tokens are consumed in fixed groups of three: `[size, name, price]`,
/// where the name token may carry a flavour after a `" - "` separator.
/// Entry order matches group order. A trailing group of fewer than three
/// tokens is silently dropped; this reproduces the upstream export's
/// behavior and is logged so operators can see the anomaly.
pub fn parse_basket(tokens: &[&str]) -> Result<Vec<ProductEntry>> {
    if tokens.len() % 3 != 0 {
        tracing::warn!(
            tokens = tokens.len(),
            dropped = tokens.len() % 3,
            "order token count is not a multiple of three; dropping trailing partial group"
        );
    }

    let mut basket = Vec::with_capacity(tokens.len() / 3);
    for group in tokens.chunks_exact(3) {
        basket.push(parse_product(group[0], group[1], group[2])?);
    }
    Ok(basket)
}

/// Parses one `[size, name, price]` group.
fn parse_product(size: &str, name_token: &str, price_token: &str) -> Result<ProductEntry> {
    // A " - " separator marks an embedded flavour. Anything after a second
    // separator is discarded, matching the upstream export.
    let mut parts = name_token.split(" - ");
    let raw_name = parts.next().unwrap_or_default();
    let raw_flavour = parts.next().unwrap_or_default();

    let price: f64 = price_token
        .trim()
        .parse()
        .map_err(|source| TransformError::InvalidPrice {
            token: price_token.to_string(),
            source,
        })?;

    let mut name = title_case(raw_name);
    let flavour = if raw_flavour.is_empty() {
        String::new()
    } else {
        title_case(raw_flavour)
    };

    let mut iced = false;
    for (marker, marks_iced) in MARKERS {
        if name.contains(marker) {
            name = name.replace(marker, "");
            if marks_iced {
                iced = true;
            }
        }
    }

    Ok(ProductEntry {
        name,
        flavour,
        size: size.to_string(),
        price,
        iced,
    })
}
