//! Checkout command: collect fields, validate, and place the order.

use clap::Args;
use twenzee_core::{PaymentMethod, ShippingMethod};
use twenzee_storefront::checkout::{CheckoutCoordinator, CheckoutField, SubmitError};
use twenzee_storefront::error::{AppError, Result};

use super::{Context, print_summary};

/// Checkout form fields and options.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub postal: Option<String>,

    #[arg(long, default_value = "Pakistan")]
    pub country: String,

    /// Shipping method (`standard`, `express`)
    #[arg(long, default_value = "standard")]
    pub shipping: String,

    /// Payment method (`cod`, `card`, `wallet`)
    #[arg(long, default_value = "cod")]
    pub payment: String,

    /// Card number, required with `--payment card`
    #[arg(long)]
    pub card_number: Option<String>,

    /// Card CVV, required with `--payment card`
    #[arg(long)]
    pub cvv: Option<String>,

    /// Remember contact fields for the next checkout
    #[arg(long)]
    pub save_info: bool,
}

/// Place an order from the current cart.
pub fn run(args: &CheckoutArgs) -> Result<()> {
    let ctx = Context::init()?;
    let mut cart = ctx.cart();
    let mut checkout = CheckoutCoordinator::new(ctx.order_log(), ctx.customer_info());

    checkout.set_shipping_method(ShippingMethod::parse(&args.shipping));
    let payment: PaymentMethod = args.payment.parse().map_err(AppError::BadRequest)?;
    checkout.set_payment_method(payment);

    set_entered_fields(&mut checkout, args);
    if checkout.prefill() {
        println!("Prefilled missing fields from your last checkout");
    }

    println!("Order summary:");
    print_summary(&checkout.quote(&cart));
    println!();

    match checkout.submit(&mut cart) {
        Ok(record) => {
            if args.save_info {
                checkout.save_customer_info();
            }
            println!("Order placed: {}", record.id);
            println!("Total charged: {}", record.order.total);
            println!(
                "Shipping {} to {}, {} ({})",
                record.shipping_method,
                record.shipping.address,
                record.shipping.city,
                record.payment_method
            );
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, error) in &errors {
                println!("  {field}: {error}");
            }
            Err(SubmitError::Invalid(errors).into())
        }
        Err(e) => Err(e.into()),
    }
}

fn set_entered_fields(checkout: &mut CheckoutCoordinator, args: &CheckoutArgs) {
    let entered = [
        (CheckoutField::FullName, args.full_name.as_deref()),
        (CheckoutField::Email, args.email.as_deref()),
        (CheckoutField::Phone, args.phone.as_deref()),
        (CheckoutField::Address, args.address.as_deref()),
        (CheckoutField::City, args.city.as_deref()),
        (CheckoutField::Postal, args.postal.as_deref()),
        (CheckoutField::Country, Some(args.country.as_str())),
        (CheckoutField::CardNumber, args.card_number.as_deref()),
        (CheckoutField::Cvv, args.cvv.as_deref()),
    ];
    for (field, value) in entered {
        if let Some(value) = value {
            checkout.set_field(field, value);
        }
    }
}
