//! Product catalog: loading, filtering, sorting, pagination, search.
//!
//! The catalog is read-only reference data supplied as a JSON file and
//! held in memory for the life of the process. The cart only ever reads
//! `id`, `name`, `price`, and the first image from it; everything else is
//! for browsing.

use std::cmp::Ordering;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use twenzee_core::{Money, ProductId};

/// Default page size for the shop grid.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {reason}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The catalog file is not a valid product array.
    #[error("failed to parse catalog {path}: {reason}")]
    Parse {
        /// Path that was read.
        path: String,
        /// Underlying failure description.
        reason: String,
    },
}

/// One product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    pub images: Vec<String>,
    pub category: String,
    pub sizes: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Discount percentage against the original price, rounded to the
    /// nearest whole percent. `None` when the product is not on sale.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.is_zero() || original <= self.price {
            return None;
        }
        let off = (original.amount() - self.price.amount()) / original.amount()
            * Decimal::from(100);
        off.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}

/// Shop-page filter criteria. All set criteria must match (AND).
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Match any of these categories. Empty means all.
    pub categories: Vec<String>,
    /// Match products stocking any of these sizes. Empty means all.
    pub sizes: Vec<String>,
    /// Maximum unit price, inclusive.
    pub max_price: Option<Money>,
    /// Case-insensitive substring over name, description, and category.
    pub query: Option<String>,
}

impl CatalogFilter {
    fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        if !self.sizes.is_empty()
            && !self.sizes.iter().any(|size| product.sizes.contains(size))
        {
            return false;
        }
        if let Some(query) = &self.query {
            let query = query.trim().to_lowercase();
            if !query.is_empty() {
                let hit = product.name.to_lowercase().contains(&query)
                    || product.description.to_lowercase().contains(&query)
                    || product.category.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }
        }
        true
    }
}

/// Shop-page sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first (highest id), the shop default.
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
    NameAz,
    NameZa,
    /// Best rated first.
    Rating,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLowHigh),
            "price-high" => Ok(Self::PriceHighLow),
            "name-az" => Ok(Self::NameAz),
            "name-za" => Ok(Self::NameZa),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// One page of results plus paging facts for the pager widget.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    /// Items on this page, in sorted order.
    pub items: Vec<T>,
    /// 1-based page number requested (clamped up to 1).
    pub page: usize,
    /// Total pages at this page size; 0 when there are no items.
    pub total_pages: usize,
    /// Total matching items across all pages.
    pub total_items: usize,
}

/// Slice a result list into a 1-based page.
///
/// A page past the end yields an empty item list; the totals still
/// describe the full result set.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Paged<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let slice = items.get(start..(start + per_page).min(total_items)).unwrap_or(&[]);

    Paged {
        items: slice.to_vec(),
        page,
        total_pages,
        total_items,
    }
}

/// The in-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON product array on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read or parsed.
    /// Unlike cart state, the catalog is reference data the storefront
    /// cannot run without, so this does not degrade silently.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        tracing::info!(count = products.len(), path = %path.display(), "Catalog loaded");
        Ok(Self::from_products(products))
    }

    /// Build a catalog from an already-loaded product list.
    #[must_use]
    pub const fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Filter and sort in one pass, the way the shop page does.
    #[must_use]
    pub fn search(&self, filter: &CatalogFilter, sort: SortOrder) -> Vec<&Product> {
        let mut results: Vec<&Product> =
            self.products.iter().filter(|p| filter.matches(p)).collect();
        sort_products(&mut results, sort);
        results
    }

    /// Trending picks for the home page (first four).
    #[must_use]
    pub fn trending(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_trending)
            .take(4)
            .collect()
    }

    /// New arrivals for the home page (first four).
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).take(4).collect()
    }
}

fn sort_products(products: &mut [&Product], sort: SortOrder) {
    match sort {
        SortOrder::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::PriceLowHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHighLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::NameAz => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortOrder::NameZa => {
            products.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortOrder::Rating => products.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
}

/// Minimal product for store tests.
#[cfg(test)]
pub(crate) fn test_product(id: i32, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Money::from_major(price),
        original_price: None,
        images: vec![format!("assets/images/product-{id}.jpg")],
        category: "tees".to_string(),
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        rating: 4.5,
        review_count: 10,
        is_new: false,
        is_trending: false,
        in_stock: true,
        description: String::new(),
        features: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut hoodie = test_product(1, 4500);
        hoodie.name = "Oversized Hoodie".to_string();
        hoodie.category = "hoodies".to_string();
        hoodie.sizes = vec!["M".to_string(), "L".to_string(), "XL".to_string()];
        hoodie.rating = 4.8;
        hoodie.is_trending = true;

        let mut tee = test_product(2, 2000);
        tee.name = "Graphic Tee".to_string();
        tee.description = "Streetwear staple".to_string();
        tee.rating = 4.2;
        tee.is_new = true;

        let mut cap = test_product(3, 1500);
        cap.name = "Snapback Cap".to_string();
        cap.category = "accessories".to_string();
        cap.sizes = vec!["One Size".to_string()];
        cap.rating = 4.9;
        cap.original_price = Some(Money::from_major(2000));

        Catalog::from_products(vec![hoodie, tee, cap])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Graphic Tee");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_filters_and_together() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            categories: vec!["hoodies".to_string(), "tees".to_string()],
            max_price: Some(Money::from_major(3000)),
            ..CatalogFilter::default()
        };
        let results = catalog.search(&filter, SortOrder::Newest);
        // Hoodie matches category but not price; tee matches both.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Graphic Tee");
    }

    #[test]
    fn test_size_filter_overlaps() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            sizes: vec!["XL".to_string()],
            ..CatalogFilter::default()
        };
        let results = catalog.search(&filter, SortOrder::Newest);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Oversized Hoodie");
    }

    #[test]
    fn test_query_searches_name_description_category() {
        let catalog = sample_catalog();

        let by_name = CatalogFilter {
            query: Some("hoodie".to_string()),
            ..CatalogFilter::default()
        };
        assert_eq!(catalog.search(&by_name, SortOrder::Newest).len(), 1);

        let by_description = CatalogFilter {
            query: Some("streetwear".to_string()),
            ..CatalogFilter::default()
        };
        assert_eq!(catalog.search(&by_description, SortOrder::Newest).len(), 1);

        let by_category = CatalogFilter {
            query: Some("accessor".to_string()),
            ..CatalogFilter::default()
        };
        assert_eq!(catalog.search(&by_category, SortOrder::Newest).len(), 1);
    }

    #[test]
    fn test_sort_orders() {
        let catalog = sample_catalog();
        let all = CatalogFilter::default();

        let newest: Vec<i32> = catalog
            .search(&all, SortOrder::Newest)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(newest, vec![3, 2, 1]);

        let cheap_first: Vec<i32> = catalog
            .search(&all, SortOrder::PriceLowHigh)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(cheap_first, vec![3, 2, 1]);

        let by_rating: Vec<i32> = catalog
            .search(&all, SortOrder::Rating)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(by_rating, vec![3, 1, 2]);

        let names: Vec<&str> = catalog
            .search(&all, SortOrder::NameAz)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Graphic Tee", "Oversized Hoodie", "Snapback Cap"]);
    }

    #[test]
    fn test_paginate_tail_page() {
        let items: Vec<i32> = (1..=30).collect();
        let page = paginate(&items, 3, 12);
        assert_eq!(page.items, (25..=30).collect::<Vec<i32>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 30);

        let past_end = paginate(&items, 4, 12);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total_pages, 3);
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<i32> = Vec::new();
        let page = paginate(&items, 1, PRODUCTS_PER_PAGE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_trending_and_new_arrivals() {
        let catalog = sample_catalog();
        assert_eq!(catalog.trending().len(), 1);
        assert_eq!(catalog.trending()[0].name, "Oversized Hoodie");
        assert_eq!(catalog.new_arrivals().len(), 1);
        assert_eq!(catalog.new_arrivals()[0].name, "Graphic Tee");
    }

    #[test]
    fn test_discount_percent() {
        let catalog = sample_catalog();
        // 2000 -> 1500 is 25% off.
        assert_eq!(
            catalog.get(ProductId::new(3)).unwrap().discount_percent(),
            Some(25)
        );
        assert_eq!(
            catalog.get(ProductId::new(1)).unwrap().discount_percent(),
            None
        );
    }

    #[test]
    fn test_load_from_disk_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let products = vec![test_product(1, 2000), test_product(2, 1500)];
        std::fs::write(&path, serde_json::to_string(&products).unwrap()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.all().len(), 2);

        assert!(Catalog::load(&dir.path().join("missing.json")).is_err());
        std::fs::write(&path, "nonsense").unwrap();
        assert!(matches!(
            Catalog::load(&path),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_product_wire_names() {
        let json = serde_json::to_value(test_product(1, 2000)).unwrap();
        for key in ["id", "name", "price", "images", "category", "sizes", "rating", "reviewCount", "isNew", "isTrending", "inStock"] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
    }
}
