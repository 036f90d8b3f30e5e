use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Fulfillment status lifecycle of an order.
///
/// Any member of the set is assignable at any time; transitions are not
/// enforced as a state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    #[default]
    Pending,
    Paid,
    Processing,
    Shipped,
    Complete,
}

impl FulfillmentStatus {
    /// Every member of the status set, in lifecycle order.
    pub const ALL: [FulfillmentStatus; 5] = [
        FulfillmentStatus::Pending,
        FulfillmentStatus::Paid,
        FulfillmentStatus::Processing,
        FulfillmentStatus::Shipped,
        FulfillmentStatus::Complete,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            FulfillmentStatus::Pending => "pending",
            FulfillmentStatus::Paid => "paid",
            FulfillmentStatus::Processing => "processing",
            FulfillmentStatus::Shipped => "shipped",
            FulfillmentStatus::Complete => "complete",
        }
    }
}

impl core::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentStatus {
    type Err = OrderError;

    /// The validation point for raw status text: exactly the five lowercase
    /// names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FulfillmentStatus::Pending),
            "paid" => Ok(FulfillmentStatus::Paid),
            "processing" => Ok(FulfillmentStatus::Processing),
            "shipped" => Ok(FulfillmentStatus::Shipped),
            "complete" => Ok(FulfillmentStatus::Complete),
            other => Err(OrderError::UnknownStatus(other.to_string())),
        }
    }
}
