//! Fixed run configuration. The reference behavior reads no CLI flags or
//! environment variables; everything is a compile-time constant.

use std::time::Duration;

/// Category listing the harvest walks through, paginated via the `fi` query
/// parameter.
pub const BASE_URL: &str =
    "https://www.houzz.com/professionals/general-contractor/probr0-bo~t_11786";

/// All professional profile pages live under this prefix.
pub const PROFILE_PREFIX: &str = "https://www.houzz.com/professionals/";

/// Marker present in category/listing URLs but never in profile URLs. Links
/// containing it point back at the directory itself, not at a business.
pub const CATEGORY_MARKER: &str = "probr0-bo~";

pub const START_FI: usize = 1;
pub const END_FI: usize = 1425;
pub const STEP: usize = 15;

/// Settle after a listing page navigation, before triggering lazy loading.
pub const LISTING_SETTLE: Duration = Duration::from_millis(3000);
/// Settle after the full-height scroll, while cards render in.
pub const POST_SCROLL_SETTLE: Duration = Duration::from_millis(5000);
/// Settle after a business page navigation, before extraction.
pub const BUSINESS_SETTLE: Duration = Duration::from_millis(2500);

/// Pacing: fixed wait after every business visit.
pub const BUSINESS_SLEEP: Duration = Duration::from_millis(2000);
/// Pacing: fixed wait after every listing page.
pub const PAGE_SLEEP: Duration = Duration::from_millis(20000);

/// Upper bound on any single page load.
pub const NAV_TIMEOUT: Duration = Duration::from_secs(60);

pub const WEBDRIVER_URL: &str = "http://localhost:9515";

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120 Safari/537.36";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

pub const OUTPUT_JSON: &str = "houzz_businesses.json";
pub const OUTPUT_XLSX: &str = "houzz_businesses.xlsx";
