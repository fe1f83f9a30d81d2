//! Formatting helpers and non-TUI status output.

use std::time::Duration;

use airsight::engine::SceneSnapshot;
use airsight::source::SourceId;

/// Format a duration as HH:MM:SS.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Print a status block to stdout (headless mode).
pub fn print_status(snapshot: &SceneSnapshot) {
    println!(
        "[{}] stations {}",
        snapshot.layer,
        if snapshot.show_auxiliary { "shown" } else { "hidden" }
    );

    for source in SourceId::ALL {
        match snapshot.summary(source) {
            Some(summary) => {
                let value = summary
                    .aqi
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                println!(
                    "  {:<18} AQI {:>5}  {}",
                    source.display_name(),
                    value,
                    summary.class.level
                );
            }
            None => println!("  {:<18} --", source.display_name()),
        }
    }

    if let Some(ref error) = snapshot.last_error {
        println!("  Last error: {}", error);
    }
    println!("  Markers drawn: {}", snapshot.markers.len());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00:00");
    }

    #[test]
    fn test_format_duration_mixed() {
        assert_eq!(format_duration(Duration::from_secs(3661)), "01:01:01");
        assert_eq!(format_duration(Duration::from_secs(59)), "00:00:59");
    }

    #[test]
    fn test_format_duration_over_a_day() {
        // Hours keep counting rather than wrapping at 24
        assert_eq!(format_duration(Duration::from_secs(90_000)), "25:00:00");
    }
}
