//! Row format of the flat order record source.
//!
//! One row per order, four comma-separated fields:
//! `id,products,customer_id,status`. The products field holds `name:price`
//! entries joined by `;` (an empty field is an empty product list).

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use orderdesk_core::{CustomerId, OrderId};
use orderdesk_orders::{FulfillmentStatus, OrderError};

use crate::error::{StoreError, StoreResult};

const ENTRY_DELIMITER: char = ';';
const PAIR_DELIMITER: char = ':';

/// One order row with typed fields, not yet resolved against a customer
/// directory.
#[derive(Debug)]
pub(crate) struct OrderRow {
    pub id: OrderId,
    pub products: BTreeMap<String, Decimal>,
    pub customer_id: CustomerId,
    pub status: FulfillmentStatus,
}

pub(crate) fn parse_order_row(line_no: usize, line: &str) -> StoreResult<OrderRow> {
    let fields: Vec<&str> = line.split(',').collect();
    let [id, products, customer_id, status] = fields.as_slice() else {
        return Err(StoreError::malformed(
            line_no,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    };

    let id: OrderId = id
        .parse()
        .map_err(|e| StoreError::malformed(line_no, format!("order id '{id}': {e}")))?;
    let customer_id: CustomerId = customer_id
        .parse()
        .map_err(|e| StoreError::malformed(line_no, format!("customer id '{customer_id}': {e}")))?;
    let status: FulfillmentStatus = status
        .parse()
        .map_err(|e: OrderError| StoreError::malformed(line_no, e.to_string()))?;
    let products = parse_products(line_no, products)?;

    Ok(OrderRow {
        id,
        products,
        customer_id,
        status,
    })
}

/// Two-delimiter parse of the compound products field: split into entries on
/// the outer delimiter, then require each entry to split into exactly one
/// name/price pair. An entry with a missing or extra token fails the whole
/// row rather than truncating the list. A repeated name keeps the last entry.
fn parse_products(line_no: usize, field: &str) -> StoreResult<BTreeMap<String, Decimal>> {
    let mut products = BTreeMap::new();
    if field.is_empty() {
        return Ok(products);
    }

    for entry in field.split(ENTRY_DELIMITER) {
        let mut tokens = entry.split(PAIR_DELIMITER);
        let (Some(name), Some(price), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(StoreError::malformed(
                line_no,
                format!("product entry '{entry}' is not a name:price pair"),
            ));
        };
        let price: Decimal = price.parse().map_err(|e| {
            StoreError::malformed(line_no, format!("price '{price}' for product '{name}': {e}"))
        })?;
        products.insert(name.to_string(), price);
    }

    Ok(products)
}
