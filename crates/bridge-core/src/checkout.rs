//! # Checkout Order Types
//!
//! Normalized order model for the checkout bridge. Inbound requests are
//! partial (most fields optional); everything here has defaults already
//! applied, so the provider layer never sees an `Option`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default currency for line items (PayMongo primary market)
pub const DEFAULT_CURRENCY: &str = "PHP";

/// Payment methods offered when the request does not pick its own
pub const DEFAULT_PAYMENT_METHODS: &[&str] = &["gcash", "card"];

/// Fallback redirect URLs used when the storefront omits them
pub const DEFAULT_SUCCESS_URL: &str = "https://storefront.example.com/success.html";
pub const DEFAULT_CANCEL_URL: &str = "https://storefront.example.com/cancel.html";

const DEFAULT_DESCRIPTION: &str = "Order from storefront";

/// A fully-normalized line item.
///
/// `amount` is an integer in the smallest currency unit (centavos for
/// PHP) — never a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Display name
    pub name: String,

    /// Description (empty string when not provided)
    #[serde(default)]
    pub description: String,

    /// Product image URLs (empty when not provided)
    #[serde(default)]
    pub images: Vec<String>,

    /// Unit amount in minor currency units
    pub amount: u64,

    /// ISO currency code
    pub currency: String,

    /// Quantity (at least 1)
    pub quantity: u32,
}

impl OrderItem {
    /// Create an item with defaults for the optional fields
    pub fn new(name: impl Into<String>, amount: u64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            images: Vec::new(),
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            quantity: 1,
        }
    }

    /// The sample item substituted when a checkout request has no items
    /// (10000 centavos => PHP 100.00)
    pub fn sample() -> Self {
        Self::new("Sample item", 10_000)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// Total for this line (unit amount x quantity).
    /// Saturates on overflow; the value is informational only.
    pub fn total(&self) -> u64 {
        self.amount.saturating_mul(self.quantity as u64)
    }
}

/// A normalized checkout order, ready to be forwarded to the processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutOrder {
    /// Line items (never empty)
    pub items: Vec<OrderItem>,

    /// Free-text order description
    pub description: String,

    /// Allowed payment method types
    pub payment_method_types: Vec<String>,

    /// Redirect URL after successful payment
    pub success_url: String,

    /// Redirect URL when the buyer cancels
    pub cancel_url: String,

    /// Merchant-defined metadata passed through to the processor
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl CheckoutOrder {
    /// Create an order from normalized items.
    ///
    /// An empty item list is replaced with one sample item so the
    /// outbound request is always well-formed.
    pub fn new(items: Vec<OrderItem>) -> Self {
        let items = if items.is_empty() {
            vec![OrderItem::sample()]
        } else {
            items
        };

        Self {
            items,
            description: DEFAULT_DESCRIPTION.to_string(),
            payment_method_types: DEFAULT_PAYMENT_METHODS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            success_url: DEFAULT_SUCCESS_URL.to_string(),
            cancel_url: DEFAULT_CANCEL_URL.to_string(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_payment_method_types(mut self, types: Vec<String>) -> Self {
        self.payment_method_types = types;
        self
    }

    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = url.into();
        self
    }

    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = url.into();
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Order total in minor units (single-currency orders assumed).
    /// Saturates on overflow; the value is informational only.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .map(OrderItem::total)
            .fold(0, u64::saturating_add)
    }

    /// Total quantity across line items
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = OrderItem::new("Widget", 2500);

        assert_eq!(item.description, "");
        assert!(item.images.is_empty());
        assert_eq!(item.currency, "PHP");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_sample_item() {
        let item = OrderItem::sample();

        assert_eq!(item.name, "Sample item");
        assert_eq!(item.amount, 10_000);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.currency, "PHP");
    }

    #[test]
    fn test_zero_quantity_clamped() {
        let item = OrderItem::new("Widget", 100).with_quantity(0);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_empty_order_gets_sample_item() {
        let order = CheckoutOrder::new(Vec::new());

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0], OrderItem::sample());
    }

    #[test]
    fn test_order_defaults() {
        let order = CheckoutOrder::new(vec![OrderItem::new("Widget", 100)]);

        assert_eq!(order.payment_method_types, vec!["gcash", "card"]);
        assert_eq!(order.success_url, DEFAULT_SUCCESS_URL);
        assert_eq!(order.cancel_url, DEFAULT_CANCEL_URL);
        assert!(order.metadata.is_empty());
    }

    #[test]
    fn test_order_total() {
        let order = CheckoutOrder::new(vec![
            OrderItem::new("A", 1000).with_quantity(2),
            OrderItem::new("B", 2500),
        ]);

        assert_eq!(order.total(), 4500);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let item = OrderItem::new("Big", u64::MAX).with_quantity(2);
        assert_eq!(item.total(), u64::MAX);

        let order = CheckoutOrder::new(vec![
            OrderItem::new("A", u64::MAX),
            OrderItem::new("B", 1),
        ]);
        assert_eq!(order.total(), u64::MAX);
    }
}
