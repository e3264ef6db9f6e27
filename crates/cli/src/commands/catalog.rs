//! Catalog browsing commands.

use clap::Args;
use twenzee_core::{Money, ProductId};
use twenzee_storefront::catalog::{
    CatalogFilter, PRODUCTS_PER_PAGE, Product, SortOrder, paginate,
};
use twenzee_storefront::error::{AppError, Result};

use super::Context;

/// Filters, sorting, and paging for `catalog list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only products stocking these sizes (repeatable)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Maximum price in whole PKR
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Search over name, description, and category
    #[arg(long)]
    pub search: Option<String>,

    /// Sort order: newest, price-low, price-high, name-az, name-za, rating
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// List catalog products.
pub fn list(args: &ListArgs) -> Result<()> {
    let ctx = Context::init()?;
    let catalog = ctx.catalog()?;

    let sort: SortOrder = args
        .sort
        .parse()
        .map_err(AppError::BadRequest)?;
    let filter = CatalogFilter {
        categories: args.categories.clone(),
        sizes: args.sizes.clone(),
        max_price: args.max_price.map(Money::from_major),
        query: args.search.clone(),
    };

    let results = catalog.search(&filter, sort);
    let page = paginate(&results, args.page, PRODUCTS_PER_PAGE);

    if page.items.is_empty() {
        println!("No products found");
        return Ok(());
    }

    for product in &page.items {
        print_line(product);
    }
    println!(
        "Page {}/{} ({} product{})",
        page.page,
        page.total_pages,
        page.total_items,
        if page.total_items == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Show one product in full.
pub fn show(id: ProductId) -> Result<()> {
    let ctx = Context::init()?;
    let catalog = ctx.catalog()?;
    let product = catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    println!("{} (#{})", product.name, product.id);
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(off)) => {
            println!("Price: {} (was {original}, -{off}%)", product.price);
        }
        _ => println!("Price: {}", product.price),
    }
    println!("Category: {}", product.category);
    println!("Sizes: {}", product.sizes.join(", "));
    println!(
        "Rating: {:.1} ({} review{})",
        product.rating,
        product.review_count,
        if product.review_count == 1 { "" } else { "s" }
    );
    if !product.in_stock {
        println!("Out of stock");
    }
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }
    if let Some(features) = &product.features {
        for feature in features {
            println!("  - {feature}");
        }
    }
    Ok(())
}

fn print_line(product: &Product) {
    let mut line = format!("#{:<4} {} {}", product.id, product.name, product.price);
    if let Some(off) = product.discount_percent() {
        line.push_str(&format!(" (-{off}%)"));
    }
    if product.is_new {
        line.push_str(" NEW");
    }
    line.push_str(&format!("  [{}]", product.category));
    println!("{line}");
}
