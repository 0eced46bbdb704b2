//! Store news: new flavours, promotions, events and service updates.
//!
//! Items are compiled in like the catalog and kept sorted newest first.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::Serialize;

/// News item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsCategory {
    NewFlavor,
    Promo,
    Event,
    Update,
}

impl NewsCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::NewFlavor, Self::Promo, Self::Event, Self::Update];

    /// Badge label shown on listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewFlavor => "New Flavor",
            Self::Promo => "Promotion",
            Self::Event => "Event",
            Self::Update => "Update",
        }
    }

    /// Icon name for the badge.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::NewFlavor => "sparkles",
            Self::Promo => "tag",
            Self::Event => "calendar-days",
            Self::Update => "settings-2",
        }
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: &'static str,
    pub title: &'static str,
    /// One-line summary for listings.
    pub excerpt: &'static str,
    pub content: &'static str,
    pub date: NaiveDate,
    pub category: NewsCategory,
    pub image: Option<&'static str>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

static NEWS: LazyLock<Vec<NewsItem>> = LazyLock::new(|| {
    let mut items = vec![
        NewsItem {
            id: "1",
            title: "Introducing Mango Passion Fusion",
            excerpt: "Our newest creation combines tropical mangoes with tangy passion fruit.",
            content: "We are excited to announce our latest flavor innovation - Mango Passion \
                      Fusion! This limited-edition ice cream combines the sweetness of Alphonso \
                      mangoes with the tangy notes of passion fruit, creating a tropical paradise \
                      in every bite. Available at all our outlets starting this weekend.",
            date: date(2024, 12, 28),
            category: NewsCategory::NewFlavor,
            image: Some(
                "https://images.unsplash.com/photo-1501443762994-82bd5dace89a?w=800&h=600&fit=crop",
            ),
        },
        NewsItem {
            id: "2",
            title: "New Year Special: 20% Off All Orders",
            excerpt: "Celebrate 2025 with sweet savings on all our premium ice creams.",
            content: "Ring in the new year with Saranya Ice Creams! From December 31st to \
                      January 5th, enjoy 20% off on all orders. Use code SWEET2025 at checkout. \
                      Spread the joy with our gift packs, perfect for new year parties!",
            date: date(2024, 12, 30),
            category: NewsCategory::Promo,
            image: Some(
                "https://images.unsplash.com/photo-1563805042-7684c019e1cb?w=800&h=600&fit=crop",
            ),
        },
        NewsItem {
            id: "3",
            title: "Extended Delivery Hours",
            excerpt: "We now deliver until 11 PM to satisfy your late-night cravings.",
            content: "Great news for night owls! We have extended our delivery hours until \
                      11 PM every day. Whether it is a late movie night or a midnight \
                      celebration, Saranya Ice Creams is just a click away. Order now and get \
                      your favorites delivered fresh to your doorstep.",
            date: date(2024, 12, 25),
            category: NewsCategory::Update,
            image: Some(
                "https://images.unsplash.com/photo-1497534547324-0ebb3f052e88?w=800&h=600&fit=crop",
            ),
        },
        NewsItem {
            id: "4",
            title: "Ice Cream Making Workshop",
            excerpt: "Join us for a hands-on experience at our flagship store.",
            content: "Learn the art of ice cream making with our master chefs! Join us at our \
                      flagship store for an exclusive workshop where you will create your own \
                      custom flavor. Limited seats available. Register now to secure your spot.",
            date: date(2024, 12, 20),
            category: NewsCategory::Event,
            image: Some(
                "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=800&h=600&fit=crop",
            ),
        },
    ];

    // Sort by date, newest first
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
});

/// Every news item, newest first.
#[must_use]
pub fn all() -> &'static [NewsItem] {
    &NEWS
}

/// The `n` most recent items.
pub fn latest(n: usize) -> impl Iterator<Item = &'static NewsItem> {
    NEWS.iter().take(n)
}

/// Look up a news item by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static NewsItem> {
    NEWS.iter().find(|item| item.id == id)
}
