//! Identifier minting for placements and traffic entries.
//!
//! Ids combine an epoch-millis time component with a random suffix, so they
//! are unique within a process run with overwhelming probability. No global
//! counter, no failure path.

use uuid::Uuid;

/// Length of the random hex suffix appended to every id.
const SUFFIX_LEN: usize = 8;

/// Mints an identifier of the form `[prefix-]<epoch_millis>-<hex suffix>`.
///
/// When a placement clones a catalog block, the catalog id is passed as
/// `prefix` so repeated placements of the same block stay distinguishable
/// and never collide.
pub fn next_id(prefix: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let raw = Uuid::new_v4().simple().to_string();
    let suffix = &raw[..SUFFIX_LEN];
    match prefix {
        Some(p) if !p.is_empty() => format!("{}-{}-{}", p, millis, suffix),
        _ => format!("{}-{}", millis, suffix),
    }
}
