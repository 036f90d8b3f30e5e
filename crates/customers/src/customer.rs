use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, Entity, ValueObject};

/// Contact information for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ValueObject for ContactInfo {}

/// Entity: Customer.
///
/// Customers are owned by whatever directory resolved them; the order side
/// only ever receives lookup results and never creates or updates customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    contact: ContactInfo,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, contact: ContactInfo) -> Self {
        Self {
            id,
            name: name.into(),
            contact,
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_exposes_id_name_and_contact() {
        let contact = ContactInfo {
            email: Some("ada@example.com".to_string()),
            phone: None,
            address: Some("123 Main St".to_string()),
        };
        let customer = Customer::new(CustomerId::new(7), "Ada", contact.clone());

        assert_eq!(customer.id_typed(), CustomerId::new(7));
        assert_eq!(customer.name(), "Ada");
        assert_eq!(customer.contact(), &contact);
    }

    #[test]
    fn customers_with_equal_fields_compare_equal() {
        let a = Customer::new(CustomerId::new(1), "Grace", ContactInfo::default());
        let b = Customer::new(CustomerId::new(1), "Grace", ContactInfo::default());
        assert_eq!(a, b);
    }
}
