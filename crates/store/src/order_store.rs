use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use orderdesk_core::OrderId;
use orderdesk_customers::CustomerDirectory;
use orderdesk_orders::Order;

use crate::error::{StoreError, StoreResult};
use crate::record::parse_order_row;

/// Flat-file order store.
///
/// Constructed with the record source path and the customer directory used to
/// resolve each row's customer reference. Every call re-opens and fully scans
/// the file; nothing is cached between calls and the handle is released when
/// the scan finishes. Single-reader, read-only.
#[derive(Debug)]
pub struct OrderRecordStore<D> {
    path: PathBuf,
    customers: D,
}

impl<D: CustomerDirectory> OrderRecordStore<D> {
    pub fn new(path: impl Into<PathBuf>, customers: D) -> Self {
        Self {
            path: path.into(),
            customers,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All orders, one per row, in file order.
    ///
    /// The first unparseable row aborts the whole scan; there are no partial
    /// results. A missing or unreadable file is `Unavailable`.
    pub fn all(&self) -> StoreResult<Vec<Order>> {
        let file = File::open(&self.path)
            .map_err(|source| StoreError::unavailable(&self.path, source))?;
        let reader = BufReader::new(file);

        let mut orders = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| StoreError::unavailable(&self.path, source))?;
            let row = parse_order_row(line_no, line.trim_end_matches('\r'))?;

            let customer = self.customers.find(row.customer_id).ok_or_else(|| {
                StoreError::malformed(line_no, format!("unknown customer id {}", row.customer_id))
            })?;

            orders.push(Order::with_status(row.id, row.products, customer, row.status));
        }

        debug!(path = %self.path.display(), count = orders.len(), "scanned order records");
        Ok(orders)
    }

    /// First order whose id matches.
    ///
    /// Absence is `Ok(None)`, never an error. Full linear scan per call; no
    /// index is maintained.
    pub fn find(&self, id: OrderId) -> StoreResult<Option<Order>> {
        Ok(self.all()?.into_iter().find(|order| order.id_typed() == id))
    }
}
