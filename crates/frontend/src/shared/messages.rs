//! Fixed UI strings shared across screens. Entity-specific labels live in
//! the entity modules; the guard and not-found texts come from the wire
//! contracts so client and backend word them identically.

pub use contracts::common::{DEFAULT_ENTITY_MESSAGE, NOT_FOUND_MESSAGE};

pub const LOAD_FAILED: &str = "Could not load the list. Check your connection and retry.";
pub const EMPTY_LIST: &str = "Nothing here yet.";
pub const RETRY: &str = "Retry";
pub const LOAD_MORE: &str = "Load more";
pub const CONFIRM_DELETE_TITLE: &str = "Delete record?";
pub const CONFIRM_DELETE_BODY: &str = "This cannot be undone.";
pub const UPLOAD_FAILED: &str = "Upload failed. Try a different file.";
pub const LOGIN_FAILED: &str = "Sign-in failed. Check your credentials.";
