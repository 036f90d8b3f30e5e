//! Customer lookup boundary.

use std::sync::Arc;

use orderdesk_core::CustomerId;

use crate::customer::Customer;

/// Resolves customer identifiers to customers.
///
/// This is the only operation the order side depends on. Implementations hand
/// out owned copies; a miss is `None`, never an error.
pub trait CustomerDirectory {
    fn find(&self, id: CustomerId) -> Option<Customer>;
}

impl<D> CustomerDirectory for &D
where
    D: CustomerDirectory + ?Sized,
{
    fn find(&self, id: CustomerId) -> Option<Customer> {
        (**self).find(id)
    }
}

impl<D> CustomerDirectory for Arc<D>
where
    D: CustomerDirectory + ?Sized,
{
    fn find(&self, id: CustomerId) -> Option<Customer> {
        (**self).find(id)
    }
}
