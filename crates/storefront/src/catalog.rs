//! Catalog data provider.
//!
//! The pricing and validation core has no knowledge of where restaurant,
//! menu, or profile data comes from; it depends on the [`Catalog`]
//! capability. The only implementation today is [`MockCatalog`], which
//! serves fixture data from memory.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use quickbite_core::{Email, LineId, MenuItemId, Money, OrderId, OrderStatus, RestaurantId};

use crate::cart::CartLine;
use crate::models::{
    MenuItem, MenuSection, OrderLine, PlacedOrder, Restaurant, SavedAddress, SavedCard,
    UserProfile,
};

/// Source of restaurant, menu, profile, and seed-cart data.
pub trait Catalog: Send + Sync {
    /// All listed restaurants, in display order.
    fn restaurants(&self) -> Vec<Restaurant>;

    /// Look up a restaurant by its URL slug.
    fn restaurant_by_slug(&self, slug: &str) -> Option<Restaurant>;

    /// The sectioned menu for a restaurant; empty when none is published.
    fn menu(&self, restaurant: &RestaurantId) -> Vec<MenuSection>;

    /// Look up a single menu item across all restaurants.
    fn menu_item(&self, id: &MenuItemId) -> Option<MenuItem>;

    /// The signed-in user's profile.
    fn profile(&self) -> UserProfile;

    /// The lines a fresh cart is seeded with on page entry.
    fn seed_cart_lines(&self) -> Vec<CartLine>;

    /// Previously placed orders, newest first.
    fn past_orders(&self) -> Vec<PlacedOrder>;
}

/// In-memory catalog serving fixture data.
#[derive(Debug)]
pub struct MockCatalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<RestaurantId, Vec<MenuSection>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Build the catalog with its fixture data.
    #[must_use]
    pub fn new() -> Self {
        let restaurants = fixture_restaurants();
        let mut menus = HashMap::new();
        menus.insert(RestaurantId::new("1"), pizza_palace_menu());
        menus.insert(RestaurantId::new("3"), burger_bliss_menu());
        Self { restaurants, menus }
    }
}

impl Catalog for MockCatalog {
    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn restaurant_by_slug(&self, slug: &str) -> Option<Restaurant> {
        self.restaurants.iter().find(|r| r.slug == slug).cloned()
    }

    fn menu(&self, restaurant: &RestaurantId) -> Vec<MenuSection> {
        self.menus.get(restaurant).cloned().unwrap_or_default()
    }

    fn menu_item(&self, id: &MenuItemId) -> Option<MenuItem> {
        self.menus
            .values()
            .flatten()
            .flat_map(|section| &section.items)
            .find(|item| &item.id == id)
            .cloned()
    }

    fn profile(&self) -> UserProfile {
        UserProfile {
            name: "Alex Johnson".to_owned(),
            email: Email::parse("alex.johnson@example.com").expect("fixture email is valid"),
            phone: "555-123-4567".to_owned(),
            addresses: vec![
                SavedAddress {
                    id: "addr1".to_owned(),
                    label: "Home".to_owned(),
                    street: "123 Culinary Lane".to_owned(),
                    city: "Foodville".to_owned(),
                    postal_code: "12345".to_owned(),
                    is_default: true,
                },
                SavedAddress {
                    id: "addr2".to_owned(),
                    label: "Work".to_owned(),
                    street: "456 Work Drive".to_owned(),
                    city: "Foodville".to_owned(),
                    postal_code: "67890".to_owned(),
                    is_default: false,
                },
            ],
            payment_methods: vec![
                SavedCard {
                    id: "pay1".to_owned(),
                    brand: "Visa".to_owned(),
                    last4: "4242".to_owned(),
                    expiry: "12/2025".to_owned(),
                },
                SavedCard {
                    id: "pay2".to_owned(),
                    brand: "MasterCard".to_owned(),
                    last4: "5555".to_owned(),
                    expiry: "06/2027".to_owned(),
                },
            ],
        }
    }

    fn seed_cart_lines(&self) -> Vec<CartLine> {
        vec![
            CartLine::new(
                LineId::new("pizza1"),
                "Margherita Pizza",
                Money::from_cents(1299),
                1,
            )
            .with_customizations(vec!["Large".to_owned(), "Thin Crust".to_owned()]),
            CartLine::new(
                LineId::new("burger1"),
                "Classic Cheeseburger",
                Money::from_cents(850),
                2,
            )
            .with_customizations(vec!["Extra Pickles".to_owned()]),
            CartLine::new(LineId::new("soda1"), "Cola Can", Money::from_cents(150), 4),
        ]
    }

    fn past_orders(&self) -> Vec<PlacedOrder> {
        vec![
            PlacedOrder {
                id: OrderId::new("FD12345XYZ"),
                placed_at: fixture_date(2024, 7, 15),
                restaurant_name: Some("Pizza Palace".to_owned()),
                lines: vec![
                    OrderLine {
                        name: "Margherita Classica".to_owned(),
                        quantity: 1,
                        unit_price: Money::from_cents(1599),
                    },
                    OrderLine {
                        name: "Garlic Knots (6 pcs)".to_owned(),
                        quantity: 1,
                        unit_price: Money::from_cents(799),
                    },
                ],
                total: Money::from_cents(3090),
                status: OrderStatus::OutForDelivery,
            },
            PlacedOrder {
                id: OrderId::new("FD00789ABC"),
                placed_at: fixture_date(2024, 7, 10),
                restaurant_name: Some("Luigi's Pizzeria".to_owned()),
                lines: vec![
                    OrderLine {
                        name: "Margherita Pizza".to_owned(),
                        quantity: 1,
                        unit_price: Money::from_cents(1599),
                    },
                    OrderLine {
                        name: "Coke".to_owned(),
                        quantity: 4,
                        unit_price: Money::from_cents(200),
                    },
                ],
                total: Money::from_cents(3599),
                status: OrderStatus::Delivered,
            },
            PlacedOrder {
                id: OrderId::new("FD00654DEF"),
                placed_at: fixture_date(2024, 6, 25),
                restaurant_name: Some("Burger Hub".to_owned()),
                lines: vec![
                    OrderLine {
                        name: "Chicken Burger".to_owned(),
                        quantity: 1,
                        unit_price: Money::from_cents(1250),
                    },
                    OrderLine {
                        name: "Fries".to_owned(),
                        quantity: 1,
                        unit_price: Money::from_cents(500),
                    },
                    OrderLine {
                        name: "Sprite".to_owned(),
                        quantity: 1,
                        unit_price: Money::from_cents(250),
                    },
                ],
                total: Money::from_cents(2250),
                status: OrderStatus::Delivered,
            },
        ]
    }
}

fn fixture_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 18, 30, 0)
        .single()
        .expect("fixture date is a valid calendar date")
}

fn fixture_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: RestaurantId::new("1"),
            slug: "pizza-palace".to_owned(),
            name: "Pizza Palace".to_owned(),
            cuisines: vec!["Pizza".to_owned(), "Italian".to_owned()],
            rating: 4.5,
            review_count: 150,
            delivery_estimate: "25-35 min".to_owned(),
            promotional_tag: Some("20% OFF".to_owned()),
        },
        Restaurant {
            id: RestaurantId::new("2"),
            slug: "sushi-zen".to_owned(),
            name: "Sushi Zen".to_owned(),
            cuisines: vec!["Japanese".to_owned(), "Sushi".to_owned()],
            rating: 4.8,
            review_count: 210,
            delivery_estimate: "30-40 min".to_owned(),
            promotional_tag: None,
        },
        Restaurant {
            id: RestaurantId::new("3"),
            slug: "burger-bliss".to_owned(),
            name: "Burger Bliss".to_owned(),
            cuisines: vec!["Burgers".to_owned(), "American".to_owned()],
            rating: 4.3,
            review_count: 180,
            delivery_estimate: "20-30 min".to_owned(),
            promotional_tag: Some("Free Fries".to_owned()),
        },
        Restaurant {
            id: RestaurantId::new("4"),
            slug: "curry-house".to_owned(),
            name: "Curry House".to_owned(),
            cuisines: vec!["Indian".to_owned(), "Curry".to_owned()],
            rating: 4.6,
            review_count: 250,
            delivery_estimate: "35-45 min".to_owned(),
            promotional_tag: None,
        },
        Restaurant {
            id: RestaurantId::new("5"),
            slug: "taco-fiesta".to_owned(),
            name: "Taco Fiesta".to_owned(),
            cuisines: vec!["Mexican".to_owned(), "Tacos".to_owned()],
            rating: 4.4,
            review_count: 120,
            delivery_estimate: "25-35 min".to_owned(),
            promotional_tag: None,
        },
        Restaurant {
            id: RestaurantId::new("6"),
            slug: "sweet-sensations".to_owned(),
            name: "Sweet Sensations".to_owned(),
            cuisines: vec!["Desserts".to_owned(), "Bakery".to_owned()],
            rating: 4.9,
            review_count: 90,
            delivery_estimate: "15-25 min".to_owned(),
            promotional_tag: Some("New!".to_owned()),
        },
    ]
}

fn pizza_palace_menu() -> Vec<MenuSection> {
    vec![
        MenuSection {
            name: "Appetizers (Antipasti)".to_owned(),
            items: vec![
                MenuItem {
                    id: MenuItemId::new("app1"),
                    name: "Garlic Knots (6 pcs)".to_owned(),
                    description: "House-made dough, baked golden and tossed in garlic-herb \
                                  butter, served with marinara."
                        .to_owned(),
                    price: Money::from_cents(799),
                    available: true,
                },
                MenuItem {
                    id: MenuItemId::new("app2"),
                    name: "Caprese Skewers".to_owned(),
                    description: "Cherry tomatoes, fresh mozzarella balls, basil, drizzled \
                                  with balsamic glaze."
                        .to_owned(),
                    price: Money::from_cents(950),
                    available: true,
                },
            ],
        },
        MenuSection {
            name: "Pizzas (Pizze)".to_owned(),
            items: vec![
                MenuItem {
                    id: MenuItemId::new("piz1"),
                    name: "Margherita Classica".to_owned(),
                    description: "San Marzano tomato sauce, fresh mozzarella, basil, extra \
                                  virgin olive oil."
                        .to_owned(),
                    price: Money::from_cents(1599),
                    available: true,
                },
                MenuItem {
                    id: MenuItemId::new("piz2"),
                    name: "Diavola (Spicy Salami)".to_owned(),
                    description: "Tomato sauce, mozzarella, spicy salami, fresh chili, black \
                                  olives."
                        .to_owned(),
                    price: Money::from_cents(1850),
                    available: true,
                },
                MenuItem {
                    id: MenuItemId::new("piz3"),
                    name: "Funghi & Tartufo".to_owned(),
                    description: "Mozzarella, mixed wild mushrooms, truffle oil, parsley (no \
                                  tomato sauce)."
                        .to_owned(),
                    price: Money::from_cents(1900),
                    available: false,
                },
            ],
        },
        MenuSection {
            name: "Pastas (Paste)".to_owned(),
            items: vec![
                MenuItem {
                    id: MenuItemId::new("pas1"),
                    name: "Spaghetti Carbonara".to_owned(),
                    description: "Classic carbonara with guanciale, pecorino romano, egg \
                                  yolk, black pepper."
                        .to_owned(),
                    price: Money::from_cents(1700),
                    available: true,
                },
                MenuItem {
                    id: MenuItemId::new("pas2"),
                    name: "Lasagna Bolognese".to_owned(),
                    description: "Layers of fresh pasta, rich meat ragu, b\u{e9}chamel, and \
                                  Parmesan."
                        .to_owned(),
                    price: Money::from_cents(1800),
                    available: true,
                },
            ],
        },
        MenuSection {
            name: "Desserts & Drinks".to_owned(),
            items: vec![
                MenuItem {
                    id: MenuItemId::new("des1"),
                    name: "Tiramis\u{f9}".to_owned(),
                    description: "Ladyfingers dipped in coffee, layered with mascarpone \
                                  cream, cocoa."
                        .to_owned(),
                    price: Money::from_cents(800),
                    available: true,
                },
                MenuItem {
                    id: MenuItemId::new("drk1"),
                    name: "San Pellegrino (500ml)".to_owned(),
                    description: "Sparkling natural mineral water.".to_owned(),
                    price: Money::from_cents(350),
                    available: true,
                },
            ],
        },
    ]
}

fn burger_bliss_menu() -> Vec<MenuSection> {
    vec![MenuSection {
        name: "Burgers & Sides".to_owned(),
        items: vec![
            MenuItem {
                id: MenuItemId::new("bur1"),
                name: "Classic Cheeseburger".to_owned(),
                description: "Beef patty, cheddar, lettuce, tomato, house sauce on a brioche \
                              bun."
                    .to_owned(),
                price: Money::from_cents(850),
                available: true,
            },
            MenuItem {
                id: MenuItemId::new("bur2"),
                name: "Crispy Fries".to_owned(),
                description: "Double-fried and sea-salted.".to_owned(),
                price: Money::from_cents(400),
                available: true,
            },
            MenuItem {
                id: MenuItemId::new("drk2"),
                name: "Cola Can".to_owned(),
                description: "Chilled 330ml can.".to_owned(),
                price: Money::from_cents(150),
                available: true,
            },
        ],
    }]
}
