//! Static in-memory menu catalog.

use std::collections::HashMap;

use crate::domain::MenuItem;

/// The menu, grouped by category in display order, with a code index for
/// order intake.
pub struct MenuCatalog {
    categories: Vec<(String, Vec<MenuItem>)>,
    index: HashMap<String, MenuItem>,
}

impl MenuCatalog {
    /// Builds the house menu.
    pub fn load() -> Self {
        let categories = vec![
            category(
                "Signatures",
                vec![
                    ("SGN-01", "Chef's Tasting Platter", "Seasonal bites with artisanal dips", 18.5),
                    ("SGN-02", "Truffle Mushroom Risotto", "Creamy Arborio rice with wild mushrooms", 16.0),
                    ("SGN-03", "Citrus Glazed Salmon", "Pan-seared salmon with citrus glaze", 21.0),
                ],
            ),
            category(
                "Small Plates",
                vec![
                    ("SMP-01", "Crispy Calamari", "Served with harissa aioli", 12.0),
                    ("SMP-02", "Avocado Bruschetta", "Heirloom tomatoes & basil oil", 10.5),
                    ("SMP-03", "Spiced Cauliflower Bites", "Tamarind glaze & mint yogurt", 9.0),
                ],
            ),
            category(
                "Mains",
                vec![
                    ("MNS-01", "Charcoal BBQ Burger", "Smoked cheddar, caramelized onions", 15.0),
                    ("MNS-02", "Thai Coconut Curry", "Vegetables, jasmine rice, toasted peanuts", 14.5),
                    ("MNS-03", "Garlic Butter Steak", "Grilled sirloin, herb butter", 24.0),
                ],
            ),
            category(
                "Greens",
                vec![
                    ("GRN-01", "Harvest Bowl", "Quinoa, roasted veggies, tahini drizzle", 13.0),
                    ("GRN-02", "Mediterranean Salad", "Feta, olives, sun-dried tomatoes", 12.5),
                ],
            ),
            category(
                "Desserts",
                vec![
                    ("DES-01", "Molten Lava Cake", "Dark chocolate, vanilla gelato", 9.5),
                    ("DES-02", "Coconut Panna Cotta", "Mango coulis & toasted coconut", 8.5),
                ],
            ),
            category(
                "Beverages",
                vec![
                    ("BEV-01", "Cold Brew Tonic", "Citrus, espresso & tonic fizz", 6.5),
                    ("BEV-02", "Ginger Lime Spritz", "House-made ginger syrup & lime", 5.5),
                    ("BEV-03", "Herbal Iced Tea", "Lemongrass & mint", 4.5),
                ],
            ),
        ];

        let mut index = HashMap::new();
        for (_, items) in &categories {
            for item in items {
                index.insert(item.code().to_string(), item.clone());
            }
        }

        MenuCatalog { categories, index }
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[(String, Vec<MenuItem>)] {
        &self.categories
    }

    /// Looks up a menu item by its code.
    pub fn item(&self, code: &str) -> Option<&MenuItem> {
        self.index.get(code)
    }

    /// Total number of sellable items.
    pub fn item_count(&self) -> usize {
        self.index.len()
    }
}

fn category(name: &str, items: Vec<(&str, &str, &str, f64)>) -> (String, Vec<MenuItem>) {
    let items = items
        .into_iter()
        .map(|(code, item_name, description, price)| {
            MenuItem::new(code, item_name, name, description, price)
        })
        .collect();
    (name.to_string(), items)
}
