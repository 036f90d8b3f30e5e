use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, OrderId, ValueObject};
use orderdesk_customers::Customer;

use crate::error::{OrderError, OrderResult};
use crate::status::FulfillmentStatus;

/// Sales tax applied to every product line: 7.5%.
fn tax_multiplier() -> Decimal {
    Decimal::new(1075, 3)
}

/// Entity: Order (one purchase transaction).
///
/// Ids come from the record source and are not validated here (duplicates
/// included); products may be empty and prices are taken as given. Mutations
/// affect only this in-memory instance, never the record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    products: BTreeMap<String, Decimal>,
    customer: Customer,
    fulfillment_status: FulfillmentStatus,
}

impl Order {
    /// Create an order with the default `pending` fulfillment status.
    pub fn new(id: OrderId, products: BTreeMap<String, Decimal>, customer: Customer) -> Self {
        Self::with_status(id, products, customer, FulfillmentStatus::Pending)
    }

    /// Create an order with an explicit fulfillment status.
    pub fn with_status(
        id: OrderId,
        products: BTreeMap<String, Decimal>,
        customer: Customer,
        fulfillment_status: FulfillmentStatus,
    ) -> Self {
        Self {
            id,
            products,
            customer,
            fulfillment_status,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn products(&self) -> &BTreeMap<String, Decimal> {
        &self.products
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn fulfillment_status(&self) -> FulfillmentStatus {
        self.fulfillment_status
    }

    /// Reassign the fulfillment status.
    ///
    /// Any member of the set is accepted at any time; there is no transition
    /// checking.
    pub fn set_fulfillment_status(&mut self, status: FulfillmentStatus) {
        self.fulfillment_status = status;
    }

    /// Tax-inclusive total of all product lines.
    ///
    /// Each line is taxed and rounded to 2 decimal places on its own, then the
    /// rounded lines are summed. Rounding per line first is contractual:
    /// summing first and rounding once yields different totals.
    pub fn total(&self) -> Decimal {
        self.products
            .values()
            .map(|price| {
                (price * tax_multiplier())
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            })
            .sum()
    }

    /// Add a product line. The mapping is untouched when the name is already
    /// present.
    pub fn add_product(&mut self, name: impl Into<String>, price: Decimal) -> OrderResult<()> {
        let name = name.into();
        if self.products.contains_key(&name) {
            return Err(OrderError::DuplicateProduct(name));
        }
        self.products.insert(name, price);
        Ok(())
    }

    /// Remove a product line. The mapping is untouched when the name is
    /// absent.
    pub fn remove_product(&mut self, name: &str) -> OrderResult<()> {
        if self.products.remove(name).is_none() {
            return Err(OrderError::ProductNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Read-only snapshot of the order's four attributes.
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id,
            products: self.products.clone(),
            customer: self.customer.clone(),
            fulfillment_status: self.fulfillment_status,
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Immutable structured view of an order, for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub products: BTreeMap<String, Decimal>,
    pub customer: Customer,
    pub fulfillment_status: FulfillmentStatus,
}

impl ValueObject for OrderRecord {}
