//! `show`: the product detail view.

use pcat_query::{Catalog, DeliveryNotice, ProductDetail, QueryError};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::fmt_price;

#[derive(Debug, Serialize)]
struct SizeRow<'a> {
    label: &'a str,
    price: Decimal,
    free_delivery: bool,
}

#[derive(Debug, Serialize)]
struct DetailOutput<'a> {
    id: u32,
    name: &'a str,
    brand: &'a str,
    description: &'a str,
    image: &'a str,
    sizes: Vec<SizeRow<'a>>,
    selected_size: &'a str,
    selected_price: Decimal,
    delivery: DeliveryNotice,
    order_notice: &'static str,
}

fn to_output<'a>(detail: &ProductDetail<'a>, free_delivery_min_size: u32) -> DetailOutput<'a> {
    let product = detail.product();
    DetailOutput {
        id: product.id,
        name: &product.name,
        brand: &product.brand,
        description: &product.description,
        image: &product.image,
        sizes: product
            .sizes
            .iter()
            .map(|s| SizeRow {
                label: &s.label,
                price: s.price,
                free_delivery: s.qualifies_for(free_delivery_min_size),
            })
            .collect(),
        selected_size: &detail.selected_size().label,
        selected_price: detail.selected_price(),
        delivery: detail.delivery_notice(),
        order_notice: detail.order_notice(),
    }
}

/// Print one product, resolved from the id as it appears in a product link.
///
/// # Errors
///
/// Returns an error for an unknown id or a size the product does not offer.
pub(crate) fn run_show(
    catalog: &Catalog,
    id: &str,
    size: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let product = match catalog.find_by_route_param(id) {
        Ok(product) => product,
        Err(QueryError::NotFound { .. }) => {
            anyhow::bail!("product '{id}' not found; run `pcat browse` to return to the catalog")
        }
        Err(e) => return Err(e.into()),
    };
    let detail = catalog.detail(product.id, size)?;
    let free_from = catalog.settings().free_delivery_min_size;

    if json {
        let output = to_output(&detail, free_from);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", product.brand.to_uppercase());
    println!("{}", product.name);
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
    println!();

    for option in &product.sizes {
        let marker = if option.label == detail.selected_size().label {
            "*"
        } else {
            " "
        };
        let badge = if option.qualifies_for(free_from) {
            "free delivery"
        } else {
            ""
        };
        println!(
            "{marker} {:<8}{:<10}{badge}",
            option.label,
            fmt_price(option.price)
        );
    }
    println!();
    println!(
        "price: {} ({})",
        fmt_price(detail.selected_price()),
        detail.selected_size().label
    );
    println!("{}", detail.delivery_notice());
    println!();
    println!("{}", detail.order_notice());

    Ok(())
}
