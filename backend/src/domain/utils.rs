/// Identifier and clock helpers shared by the aggregates
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// A fresh random identifier: lower-case hex, no hyphens
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Current instant truncated to microseconds, the precision the document store keeps
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
