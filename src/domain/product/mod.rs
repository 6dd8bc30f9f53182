use serde::{Deserialize, Serialize};

// ============================================================================
// Product Domain - catalog owned by the product service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    fn new(id: i64, name: &str, description: &str, price: f64, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
        }
    }
}

/// Products present at process start. Also the price table behind
/// [`crate::clients::ProductServiceClient`].
pub fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "High-performance laptop", 999.99, "Electronics"),
        Product::new(2, "Coffee Mug", "Ceramic coffee mug", 15.99, "Kitchen"),
        Product::new(3, "Book", "Programming guide", 29.99, "Books"),
        Product::new(4, "Headphones", "Wireless headphones", 199.99, "Electronics"),
    ]
}

pub fn find_product(products: &[Product], id: i64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Products in `category`, exact match, catalog order.
pub fn in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.category == category).collect()
}
