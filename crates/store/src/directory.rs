//! Customer directory implementations.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use orderdesk_core::CustomerId;
use orderdesk_customers::{ContactInfo, Customer, CustomerDirectory};

use crate::error::{StoreError, StoreResult};

/// In-memory customer directory.
///
/// Intended for tests/dev.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCustomerDirectory {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id_typed(), customer);
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl FromIterator<Customer> for InMemoryCustomerDirectory {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut directory = Self::new();
        for customer in iter {
            directory.insert(customer);
        }
        directory
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn find(&self, id: CustomerId) -> Option<Customer> {
        self.customers.get(&id).cloned()
    }
}

/// Flat-file customer directory.
///
/// Rows are `id,name,email,phone,address`, one customer per row, with empty
/// trailing fields treated as absent contact details. The whole file is read
/// once at load time; lookups afterwards are in-memory and infallible.
#[derive(Debug, Clone)]
pub struct CsvCustomerDirectory {
    customers: HashMap<CustomerId, Customer>,
}

impl CsvCustomerDirectory {
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::unavailable(path, source))?;
        let reader = BufReader::new(file);

        let mut customers = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| StoreError::unavailable(path, source))?;
            let customer = parse_customer_row(line_no, line.trim_end_matches('\r'))?;
            customers.insert(customer.id_typed(), customer);
        }

        debug!(path = %path.display(), count = customers.len(), "loaded customer directory");
        Ok(Self { customers })
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerDirectory for CsvCustomerDirectory {
    fn find(&self, id: CustomerId) -> Option<Customer> {
        self.customers.get(&id).cloned()
    }
}

fn parse_customer_row(line_no: usize, line: &str) -> StoreResult<Customer> {
    let fields: Vec<&str> = line.split(',').collect();
    let [id, name, email, phone, address] = fields.as_slice() else {
        return Err(StoreError::malformed(
            line_no,
            format!("expected 5 fields, found {}", fields.len()),
        ));
    };

    let id: CustomerId = id
        .parse()
        .map_err(|e| StoreError::malformed(line_no, format!("customer id '{id}': {e}")))?;

    let contact = ContactInfo {
        email: non_empty(email),
        phone: non_empty(phone),
        address: non_empty(address),
    };

    Ok(Customer::new(id, *name, contact))
}

fn non_empty(field: &str) -> Option<String> {
    (!field.is_empty()).then(|| field.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_directory(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn in_memory_directory_finds_inserted_customers() {
        let mut directory = InMemoryCustomerDirectory::new();
        directory.insert(Customer::new(CustomerId::new(1), "Ada", ContactInfo::default()));

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find(CustomerId::new(1)).unwrap().name(), "Ada");
        assert!(directory.find(CustomerId::new(2)).is_none());
    }

    #[test]
    fn csv_directory_loads_and_finds_customers() -> anyhow::Result<()> {
        let file = write_directory(
            "7,Ada,ada@example.com,555-0100,123 Main St\n\
             8,Grace,,,\n",
        );
        let directory = CsvCustomerDirectory::load(file.path())?;
        assert_eq!(directory.len(), 2);

        let ada = directory.find(CustomerId::new(7)).unwrap();
        assert_eq!(ada.name(), "Ada");
        assert_eq!(ada.contact().email.as_deref(), Some("ada@example.com"));
        assert_eq!(ada.contact().address.as_deref(), Some("123 Main St"));

        let grace = directory.find(CustomerId::new(8)).unwrap();
        assert_eq!(grace.contact(), &ContactInfo::default());

        assert!(directory.find(CustomerId::new(9)).is_none());
        Ok(())
    }

    #[test]
    fn csv_directory_rejects_a_malformed_row() {
        let file = write_directory("7,Ada,ada@example.com\n");
        let err = CsvCustomerDirectory::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn csv_directory_rejects_a_non_numeric_id() {
        let file = write_directory("seven,Ada,,,\n");
        let err = CsvCustomerDirectory::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn csv_directory_reports_a_missing_file_as_unavailable() {
        let err = CsvCustomerDirectory::load("/nonexistent/customers.txt").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }
}
