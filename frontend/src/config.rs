use log::Level;

use crate::content::CompanyInfo;

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Ravenspire Capital",
    tagline: "Capital • Real Estate • Logistics",
    email: "info@ravenspirecapital.com",
    city: "Charleston, SC",
    founded: "2024",
};

/// Scroll offset in pixels past which the header switches to its blurred background.
pub const HEADER_BLUR_THRESHOLD: f64 = 50.0;

pub const LOGO_PATH: &str = "/assets/logo.png";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
