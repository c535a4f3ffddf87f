//! The reference product catalog and sort semantics.
//!
//! The demo storefront ships a fixed six-product inventory. Tests never
//! scrape expectations from the page; they compare rendered state against
//! this catalog, and rendered order against [`sort_products`].

use crate::error::{Result, SuiteError};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// One catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Stable catalog identifier.
    pub id: u32,
    /// Display name, unique across the catalog.
    pub name: &'static str,
    /// Unit price; rendered as `$N.NN`.
    pub price: Decimal,
    /// Marketing description shown on cards and detail pages.
    pub description: &'static str,
    /// Image path relative to the deployment base URL.
    pub image_path: &'static str,
}

impl Product {
    /// The price as the UI renders it.
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("${}", self.price)
    }

    /// The handle the app embeds in cart-control test ids: the product name
    /// lowercased with spaces dashed, as in
    /// `[data-test="add-to-cart-sauce-labs-backpack"]`.
    #[must_use]
    pub fn cart_control_slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Selector for this product's add-to-cart control.
    #[must_use]
    pub fn add_to_cart_selector(&self) -> String {
        format!(r#"[data-test="add-to-cart-{}"]"#, self.cart_control_slug())
    }

    /// Selector for this product's remove control.
    #[must_use]
    pub fn remove_selector(&self) -> String {
        format!(r#"[data-test="remove-{}"]"#, self.cart_control_slug())
    }
}

/// The immutable six-entry reference catalog, in the order the app lists it
/// before any sort is applied.
pub static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: 1,
            name: "Sauce Labs Backpack",
            price: Decimal::new(2999, 2),
            description: "carry.allTheThings() with the sleek, streamlined Sly Pack that melds uncompromising style with unequaled laptop and tablet protection.",
            image_path: "/static/media/sauce-backpack-1200x1500.0a0b85a385945026062b.jpg",
        },
        Product {
            id: 2,
            name: "Sauce Labs Bike Light",
            price: Decimal::new(999, 2),
            description: "A red light isn't the desired state in testing but it sure helps when riding your bike at night. Water-resistant with 3 lighting modes, 1 AAA battery included.",
            image_path: "/static/media/bike-light-1200x1500.37c843b09a7d77409d63.jpg",
        },
        Product {
            id: 3,
            name: "Sauce Labs Bolt T-Shirt",
            price: Decimal::new(1599, 2),
            description: "Get your testing superhero on with the Sauce Labs bolt T-shirt. From American Apparel, 100% ringspun combed cotton, heather gray with red bolt.",
            image_path: "/static/media/bolt-shirt-1200x1500.c2599ac5f0a35ed5931e.jpg",
        },
        Product {
            id: 4,
            name: "Sauce Labs Fleece Jacket",
            price: Decimal::new(4999, 2),
            description: "It's not every day that you come across a midweight quarter-zip fleece jacket capable of handling everything from a relaxing day outdoors to a busy day at the office.",
            image_path: "/static/media/sauce-pullover-1200x1500.51d7ffaf301e698772c8.jpg",
        },
        Product {
            id: 5,
            name: "Sauce Labs Onesie",
            price: Decimal::new(799, 2),
            description: "Rib snap infant onesie for the junior automation engineer in development. Reinforced 3-snap bottom closure, two-needle hemmed sleeved and bottom won't unravel.",
            image_path: "/static/media/red-onesie-1200x1500.2ec615b271ef4c3bc430.jpg",
        },
        Product {
            id: 6,
            name: "Test.allTheThings() T-Shirt (Red)",
            price: Decimal::new(1599, 2),
            description: "This classic Sauce Labs t-shirt is perfect to wear when cozying up to your keyboard to automate a few tests. Super-soft and comfy ringspun combed cotton.",
            image_path: "/static/media/red-tatt-1200x1500.30dadef477804e54fc7b.jpg",
        },
    ]
});

/// Looks up a catalog product by display name.
///
/// # Errors
///
/// Returns [`SuiteError::UnknownProduct`] for a name outside the catalog.
pub fn product_by_name(name: &str) -> Result<&'static Product> {
    CATALOG
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| SuiteError::UnknownProduct(name.to_string()))
}

/// The sort modes offered by the inventory page's sort select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// No sort applied; catalog order.
    #[default]
    Unsorted,
    /// Name (A to Z)
    NameAsc,
    /// Name (Z to A)
    NameDesc,
    /// Price (low to high)
    PriceAsc,
    /// Price (high to low)
    PriceDesc,
}

impl SortOrder {
    /// The `<option>` value the app uses for this mode, `None` for
    /// [`SortOrder::Unsorted`].
    #[must_use]
    pub fn value(&self) -> Option<&'static str> {
        match self {
            SortOrder::Unsorted => None,
            SortOrder::NameAsc => Some("az"),
            SortOrder::NameDesc => Some("za"),
            SortOrder::PriceAsc => Some("lohi"),
            SortOrder::PriceDesc => Some("hilo"),
        }
    }

    /// The visible option label, `None` for [`SortOrder::Unsorted`].
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SortOrder::Unsorted => None,
            SortOrder::NameAsc => Some("Name (A to Z)"),
            SortOrder::NameDesc => Some("Name (Z to A)"),
            SortOrder::PriceAsc => Some("Price (low to high)"),
            SortOrder::PriceDesc => Some("Price (high to low)"),
        }
    }

    /// The four modes a user can actually pick from the select.
    #[must_use]
    pub fn selectable() -> [SortOrder; 4] {
        [
            SortOrder::NameAsc,
            SortOrder::NameDesc,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
        ]
    }
}

/// Returns a new sequence of products ordered by the given mode.
///
/// Pure: the input is never mutated. [`SortOrder::Unsorted`] is the identity
/// fallback. Price sorts break ties on name, giving a deterministic total
/// order, so sorting the same input twice is idempotent and the ascending
/// and descending orders of one key are exact reverses of each other.
#[must_use]
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::Unsorted => {}
        SortOrder::NameAsc => sorted.sort_by(|a, b| a.name.cmp(b.name)),
        SortOrder::NameDesc => sorted.sort_by(|a, b| b.name.cmp(a.name)),
        SortOrder::PriceAsc => {
            sorted.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(b.name)));
        }
        SortOrder::PriceDesc => {
            sorted.sort_by(|a, b| b.price.cmp(&a.price).then_with(|| b.name.cmp(a.name)));
        }
    }
    sorted
}

/// Parses a rendered price like `$29.99` (or `Tax: $2.40`) to a [`Decimal`].
///
/// The text must contain exactly one `$`; everything after it is the value.
///
/// # Errors
///
/// Returns [`SuiteError::MalformedPrice`] for zero or multiple `$`, or an
/// unparseable amount.
pub fn parse_price(text: &str) -> Result<Decimal> {
    let parts: Vec<&str> = text.split('$').collect();
    if parts.len() != 2 {
        return Err(SuiteError::MalformedPrice(text.to_string()));
    }

    parts[1]
        .trim()
        .parse::<Decimal>()
        .map_err(|_| SuiteError::MalformedPrice(text.to_string()))
}
