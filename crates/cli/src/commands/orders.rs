//! Order history commands.

use twenzee_storefront::error::Result;

use super::Context;

/// List all placed orders, oldest first.
pub fn list() -> Result<()> {
    let ctx = Context::init()?;
    let orders = ctx.order_log().all();

    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }

    for order in &orders {
        println!(
            "{}  {}  {} item(s)  {}  {} / {}",
            order.id,
            order.date.format("%Y-%m-%d %H:%M"),
            order.order.count,
            order.order.total,
            order.shipping_method,
            order.payment_method
        );
        println!(
            "      {} <{}>, {}, {}",
            order.customer.full_name, order.customer.email, order.shipping.city,
            order.shipping.country
        );
    }
    Ok(())
}
