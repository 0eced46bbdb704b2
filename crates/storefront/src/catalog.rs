//! Static product catalog.
//!
//! The storefront sells a fixed range, so the catalog is compiled in rather
//! than fetched. Stock figures here are the ceilings the cart enforces.

use std::sync::LazyLock;

use serde::Serialize;

use saranya_core::{Price, ProductId};

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Classic,
    Fruity,
    Premium,
    Seasonal,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Classic, Self::Fruity, Self::Premium, Self::Seasonal];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fruity => "Fruity",
            Self::Premium => "Premium",
            Self::Seasonal => "Seasonal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: &'static str,
    pub fat: &'static str,
    pub carbs: &'static str,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    /// Retail unit price.
    pub price: Price,
    /// Listed wholesale unit price.
    pub wholesale_price: Price,
    pub image: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Units available; the cart never holds more than this.
    pub stock: u32,
    pub featured: bool,
    pub weight: &'static str,
    pub min_wholesale_qty: u32,
    pub ingredients: &'static [&'static str],
    pub nutritional_info: NutritionalInfo,
}

impl Product {
    /// Returns `true` when fewer than [`LOW_STOCK_THRESHOLD`] units remain.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Classic Vanilla",
            price: Price::from_units(149),
            wholesale_price: Price::from_units(120),
            image: "/assets/product-vanilla.png",
            description: "Creamy Madagascar vanilla with caramel swirls. A timeless classic.",
            category: Category::Classic,
            stock: 50,
            featured: true,
            weight: "500ml",
            min_wholesale_qty: 10,
            ingredients: &[
                "Fresh Milk",
                "Madagascar Vanilla",
                "Sugar",
                "Cream",
                "Caramel Swirls",
            ],
            nutritional_info: NutritionalInfo {
                calories: 207,
                protein: "3.5g",
                fat: "11g",
                carbs: "24g",
            },
        },
        Product {
            id: ProductId::new("2"),
            name: "Belgian Chocolate",
            price: Price::from_units(179),
            wholesale_price: Price::from_units(145),
            image: "/assets/product-chocolate.png",
            description: "Rich Belgian dark chocolate with chocolate chips. For true chocolate lovers.",
            category: Category::Classic,
            stock: 35,
            featured: true,
            weight: "500ml",
            min_wholesale_qty: 10,
            ingredients: &[
                "Fresh Milk",
                "Belgian Chocolate",
                "Cocoa Powder",
                "Sugar",
                "Chocolate Chips",
            ],
            nutritional_info: NutritionalInfo {
                calories: 250,
                protein: "4g",
                fat: "14g",
                carbs: "28g",
            },
        },
        Product {
            id: ProductId::new("3"),
            name: "Fresh Strawberry",
            price: Price::from_units(159),
            wholesale_price: Price::from_units(130),
            image: "/assets/product-strawberry.png",
            description: "Made with real strawberries for a fruity, refreshing experience.",
            category: Category::Fruity,
            stock: 45,
            featured: true,
            weight: "500ml",
            min_wholesale_qty: 10,
            ingredients: &[
                "Fresh Milk",
                "Real Strawberries",
                "Sugar",
                "Cream",
                "Natural Flavors",
            ],
            nutritional_info: NutritionalInfo {
                calories: 180,
                protein: "3g",
                fat: "8g",
                carbs: "25g",
            },
        },
        Product {
            id: ProductId::new("4"),
            name: "Alphonso Mango",
            price: Price::from_units(189),
            wholesale_price: Price::from_units(155),
            image: "/assets/product-mango.png",
            description: "Premium Alphonso mangoes blended to perfection. Summer in a scoop.",
            category: Category::Fruity,
            stock: 30,
            featured: true,
            weight: "500ml",
            min_wholesale_qty: 10,
            ingredients: &[
                "Fresh Milk",
                "Alphonso Mango Pulp",
                "Sugar",
                "Cream",
                "Natural Flavors",
            ],
            nutritional_info: NutritionalInfo {
                calories: 195,
                protein: "3.2g",
                fat: "9g",
                carbs: "26g",
            },
        },
    ]
});

/// Every product, in catalog order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| &p.id == id)
}

/// Products in `category`, or all products for `None`.
pub fn by_category(category: Option<Category>) -> impl Iterator<Item = &'static Product> {
    PRODUCTS
        .iter()
        .filter(move |p| category.is_none_or(|c| p.category == c))
}

/// Products flagged for the home page.
pub fn featured() -> impl Iterator<Item = &'static Product> {
    PRODUCTS.iter().filter(|p| p.featured)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let vanilla = find(&ProductId::new("1")).unwrap();
        assert_eq!(vanilla.name, "Classic Vanilla");
        assert_eq!(vanilla.price, Price::from_units(149));
        assert_eq!(vanilla.stock, 50);
        assert!(find(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_by_category() {
        assert_eq!(by_category(None).count(), 4);
        let fruity: Vec<_> = by_category(Some(Category::Fruity)).map(|p| p.name).collect();
        assert_eq!(fruity, vec!["Fresh Strawberry", "Alphonso Mango"]);
        assert_eq!(by_category(Some(Category::Seasonal)).count(), 0);
    }

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!("fruity".parse::<Category>().unwrap(), Category::Fruity);
        assert!("All".parse::<Category>().is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = products().iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn test_low_stock() {
        assert!(!find(&ProductId::new("4")).unwrap().is_low_stock());
        assert_eq!(featured().count(), 4);
    }
}
