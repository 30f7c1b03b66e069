//! The resolved, merged identity returned to request handlers.

use serde::Serialize;
use warden_core::types::{Timestamp, UserId};
use warden_store::models::user::UserRecord;

use crate::enrich::EnrichedIdentity;

/// Final, trust-elevated identity for one request.
///
/// Built by overlaying the stored user record over the decoded claim.
/// Merge invariant: a field present on the stored record always wins; the
/// claim only contributes what storage does not carry. A forged claim field
/// can therefore never override authoritative state once the user is known
/// to exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedUser {
    pub uuid: UserId,
    pub mail: String,
    pub display_name: Option<String>,
    pub verified: bool,
    pub member_since: Timestamp,
    /// The session hash this request authenticated with.
    pub session_hash: String,
}

/// Overlay `record` over the enriched claim, record fields dominant.
pub(crate) fn merge_identity(identity: &EnrichedIdentity, record: &UserRecord) -> ResolvedUser {
    ResolvedUser {
        uuid: record.uuid,
        mail: record.mail.clone(),
        // Stored value wins; the claim may only fill the gap.
        display_name: record
            .display_name
            .clone()
            .or_else(|| identity.claim.display_name.clone()),
        verified: record.verified,
        member_since: record.member_since,
        session_hash: identity.transient.claimed_hash.clone(),
    }
}
