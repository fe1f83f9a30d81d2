//! Air quality index classification.
//!
//! Maps a numeric AQI onto a discrete severity level and a display color
//! token. Classification is a pure total function; the policy for missing
//! values (treat as zero, display as Good) lives in [`classify_opt`] so all
//! call sites share it.

mod scale;

pub use scale::{
    classify, classify_opt, AqiClass, AqiColor, SeverityLevel, GOOD_MAX, MODERATE_MAX,
    SENSITIVE_MAX, UNHEALTHY_MAX,
};
