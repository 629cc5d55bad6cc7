/// Default page size for catalog and admin listings
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Upload ceiling for course images (10 MiB), checked before any storage call
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Category label whose courses are always zero-priced
pub const FREE_CATEGORY: &str = "free";

/// Tag that selects the early-bird promotional set
pub const EARLY_BIRD_TAG: &str = "early-bird";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - grants access to the back-office routes
pub const ROLE_ADMIN: &str = "admin";
