/// One sellable item on the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    code: String,
    name: String,
    category: String,
    description: String,
    price: f64,
}

impl MenuItem {
    pub fn new(code: &str, name: &str, category: &str, description: &str, price: f64) -> Self {
        MenuItem {
            code: code.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
