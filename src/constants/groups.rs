// Group names shared by every flavor that carries proxy groups.
// Two of them carry decorative symbols that clients display as-is.
pub const PRIMARY_GROUP: &str = "\u{1F506} LIST";
pub const SELECT_GROUP: &str = "\u{1F530} Select";
pub const AUTO_GROUP: &str = "AUTO \u{267B}\u{FE0F}";
pub const FALLBACK_GROUP: &str = "Auto-Fallback";

/// Health-check endpoint for the url-test and fallback groups
pub const TEST_URL: &str = "http://www.gstatic.com/generate_204";

/// Health-check polling interval in seconds
pub const TEST_INTERVAL: u32 = 300;
