/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the prediction/placement service
    pub const API_BASE_URL: &'static str = "http://127.0.0.1:8000";

    /// Minimum confidence (%) for the top-ranked crop to be recommended
    pub const CONFIDENCE_THRESHOLD: f64 = 74.0;

    /// Maximum explanation strings shown for the recommended crop
    pub const MAX_EXPLANATIONS: usize = 3;

    /// How long the form's success banner stays visible (4 seconds)
    pub const SUCCESS_BANNER_MS: u32 = 4_000;
}
