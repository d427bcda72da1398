//! Audit entry data structures
//!
//! Defines the structure of audit log entries for operations on receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Receipt;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Receipt was created
    Create,
    /// Receipt was updated
    Update,
    /// Receipt was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected receipt
    pub receipt_id: String,

    /// Receipt number at the time of the operation
    pub receipt_no: String,

    /// Member name on the receipt, for readable logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuditEntry {
    /// Build an entry for an operation on a receipt
    pub fn for_receipt(operation: Operation, receipt: &Receipt) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            receipt_id: receipt.id.as_uuid().to_string(),
            receipt_no: receipt.receipt_no.clone(),
            name: if receipt.name.is_empty() {
                None
            } else {
                Some(receipt.name.clone())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_LINE_ITEMS;

    #[test]
    fn test_for_receipt() {
        let template: Vec<String> = DEFAULT_LINE_ITEMS.iter().map(|s| s.to_string()).collect();
        let mut r = Receipt::draft("101", "x", &template);
        r.name = "Ramesh Patel".into();

        let entry = AuditEntry::for_receipt(Operation::Create, &r);
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.receipt_no, "101");
        assert_eq!(entry.name.as_deref(), Some("Ramesh Patel"));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }
}
