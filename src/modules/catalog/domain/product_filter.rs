// src/modules/catalog/domain/product_filter.rs

use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::content::domain::documents::Product;

/// Sentinel the grid controls send for "no filter".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Exact category, or `All`
    pub category: Option<String>,
    /// Exact status label (`Live`, `Beta`, `Coming Soon`), or `All`
    pub status: Option<String>,
    /// Case-insensitive text over name, tagline, description and tags
    pub search: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != ALL)
}

impl ProductFilter {
    pub fn by_category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Self::default()
        }
    }

    pub fn by_status(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        active(&self.category).is_none()
            && active(&self.status).is_none()
            && active(&self.search).is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = active(&self.category) {
            if product.category != category {
                return false;
            }
        }

        if let Some(status) = active(&self.status) {
            if product.status.as_str() != status {
                return false;
            }
        }

        if let Some(search) = active(&self.search) {
            let needle = search.to_lowercase();
            let hit = |text: &str| text.to_lowercase().contains(&needle);

            let found = hit(&product.name)
                || product.tagline.as_deref().is_some_and(hit)
                || hit(&product.description)
                || product.tags.iter().any(|t| hit(t));

            if !found {
                return false;
            }
        }

        true
    }
}

/// Keeps input order.
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
