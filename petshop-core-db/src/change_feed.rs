use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Tables the realtime change feed reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangedTable {
    Profiles,
    UserRoles,
}

/// Row operations the realtime change feed reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeOp {
    Insert,
    Update,
}

/// One change event as delivered by the feed
///
/// Deliberately coarse: subscribers re-fetch in full rather than apply
/// the changed row, so the payload carries no row data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableChange {
    pub table: ChangedTable,
    pub op: ChangeOp,
}

/// Source of realtime insert/update events on the access tables
///
/// Every subscriber owns an independent receiver; dropping the receiver
/// ends the subscription. Concurrent subscribers each do their own
/// re-fetch work on the same event.
pub trait ChangeFeed: Send + Sync {
    fn subscribe(&self) -> broadcast::Receiver<TableChange>;
}
