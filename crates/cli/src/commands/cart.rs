//! Cart management commands.

use twenzee_core::{ProductId, ShippingMethod};
use twenzee_storefront::error::{AppError, Result};

use super::{Context, print_summary};

/// Add a product to the cart.
pub fn add(id: ProductId, size: &str, quantity: u32) -> Result<()> {
    let ctx = Context::init()?;
    let catalog = ctx.catalog()?;
    let product = catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let mut cart = ctx.cart();
    cart.on_count_changed(|count| println!("Cart: {count} item(s)"));
    if !cart.add_item(product, size, quantity) {
        return Err(AppError::BadRequest(format!(
            "cannot add {quantity} x size {size:?}"
        )));
    }
    println!("Added {} x{} (size {})", product.name, quantity, size);
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(id: ProductId, size: &str) -> Result<()> {
    let ctx = Context::init()?;
    let mut cart = ctx.cart();
    cart.on_count_changed(|count| println!("Cart: {count} item(s)"));
    if !cart.remove_item(id, size) {
        return Err(AppError::NotFound(format!(
            "no cart line for product {id} in size {size}"
        )));
    }
    println!("Removed product {id} (size {size})");
    Ok(())
}

/// Print the cart lines and the pricing summary.
pub fn show(shipping: &str) -> Result<()> {
    let ctx = Context::init()?;
    let cart = ctx.cart();

    if cart.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        println!(
            "#{:<4} {} (size {}) x{} @ {} = {}",
            item.id,
            item.name,
            item.size,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    println!();
    print_summary(&cart.summary(ShippingMethod::parse(shipping)));
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<()> {
    let ctx = Context::init()?;
    let mut cart = ctx.cart();
    cart.clear();
    println!("Cart cleared");
    Ok(())
}
