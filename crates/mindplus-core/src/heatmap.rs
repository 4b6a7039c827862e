//! Stress heatmap helpers for the calendar view.

use chrono::NaiveDate;
use mindplus_types::calm::Severity;

/// Predicted stress for a day: base stress plus one point per scheduled event.
pub fn stress_level(base_stress: u32, event_count: u32) -> Severity {
    match base_stress.saturating_add(event_count) {
        0..=2 => Severity::Low,
        3..=4 => Severity::Medium,
        _ => Severity::High,
    }
}

/// Cell color for a predicted stress level.
pub fn stress_color(level: Severity) -> &'static str {
    match level {
        Severity::Low => "#DCFCE7",
        Severity::Medium => "#FEF3C7",
        Severity::High => "#FEE2E2",
    }
}

/// Detail text for a selected calendar day.
pub fn stress_message(level: Severity, event_count: u32) -> &'static str {
    match level {
        Severity::Low => "Your academic load looks manageable for this day.",
        Severity::Medium if event_count > 0 => {
            "You have upcoming academic tasks. Consider planning ahead."
        }
        Severity::Medium => "Moderate stress predicted. Maintain balanced study sessions.",
        Severity::High => "High stress predicted. Take breaks and prioritize essential tasks.",
    }
}

/// Dashboard greeting for today.
pub fn today_message(level: Severity, event_count: u32) -> &'static str {
    match level {
        Severity::Low => "You seem to be managing well today. Keep up the good balance 🌱",
        Severity::Medium if event_count > 1 => {
            "You have a moderately busy day. Try to take short breaks when possible ⚖️"
        }
        Severity::Medium => "Your stress level is moderate today. Stay mindful of your workload 💛",
        Severity::High if event_count > 2 => {
            "Today looks quite demanding. Consider prioritizing tasks and resting when needed ❤️"
        }
        Severity::High => {
            "Your stress level is high today. Don’t hesitate to slow down and seek support 💙"
        }
    }
}

/// Number of days in a month (`month` is 1-based). Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|n| n.signed_duration_since(first).num_days() as u32)
        .unwrap_or(0)
}
