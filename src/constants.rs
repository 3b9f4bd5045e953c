//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Chart pagination defaults
pub mod charts {
    /// Items per page for the categorical proportion (pie) chart
    pub const PROPORTION_PAGE_SIZE: usize = 6;

    /// Items per page for the trend (line) chart; date points are denser
    /// and less visually demanding than category slices
    pub const TREND_PAGE_SIZE: usize = 10;

    /// Items per page for the magnitude comparison (bar) chart
    pub const MAGNITUDE_PAGE_SIZE: usize = 6;

    /// Arc sampling step for pie slice tessellation, in degrees
    pub const PIE_ARC_STEP_DEG: f32 = 4.0;
}

/// Resize handling
pub mod resize {
    /// Quiet window before a burst of resize events triggers one
    /// layout-adjustment pass over the live charts
    pub const DEBOUNCE_MS: u64 = 200;
}

/// Remote endpoints and paths
pub mod net {
    /// Default base URL of the hosting server
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

    /// Environment variable overriding the base URL
    pub const BASE_URL_ENV: &str = "DASH_OXIDE_BASE_URL";

    /// Dashboard snapshot endpoint
    pub const DASHBOARD_PATH: &str = "/api/dashboard";

    /// Evidence listing endpoint prefix; the entry id is appended
    pub const EVIDENCE_PATH: &str = "/logbook/evidence";

    /// Logbook delete endpoint prefix; the entry id is appended
    pub const DELETE_PATH: &str = "/logbook/delete";

    /// Fixed path under which uploaded evidence images are served
    pub const UPLOADS_PATH: &str = "/static/uploads";

    /// Request timeout for all remote calls, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Persisted state keys
pub mod storage {
    /// Storage key for the sidebar expanded/collapsed flag
    pub const SIDEBAR_EXPANDED_KEY: &str = "db_sidebar_expanded";
}

/// UI layout defaults
pub mod layout {
    /// Sidebar panel width when expanded
    pub const SIDEBAR_WIDTH: f32 = 180.0;

    /// Height of each chart panel body
    pub const CHART_HEIGHT: f32 = 240.0;

    /// Maximum height of an evidence image block
    pub const EVIDENCE_THUMB_HEIGHT: f32 = 160.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 22.0;

    /// Surfaces narrower than this render charts in compact layout
    pub const COMPACT_BREAKPOINT: f32 = 800.0;
}
