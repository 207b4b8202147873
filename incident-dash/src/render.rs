use crate::commands::QUICK_EXAMPLES;
use incident_model::{accent_for, icon_for, label_upper, Filter, Severity};
use incident_sync::{DashboardState, SubmissionState};
use std::fmt::Write;

pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "⚡ Intelligent Incident Response System");
    let _ = writeln!(out, "AI-Powered Classification & Auto-Response Engine\n");

    if let Some(banner) = state.banner() {
        let _ = writeln!(out, "❌ {banner}\n");
    }

    let _ = write!(out, "📊 Total {}", state.stats.total);
    for severity in Severity::ALL {
        let _ = write!(
            out,
            "   {} {} {}",
            severity.icon(),
            severity.label(),
            state.stats.bucket(severity)
        );
    }
    out.push_str("\n\n");

    match &state.submission {
        SubmissionState::LastResult { result, .. } => {
            let _ = writeln!(out, "📈 Incident Processed");
            let _ = writeln!(
                out,
                "   Category: {} | Severity: {}",
                result.category,
                label_upper(Some(result.severity.as_str()))
            );
            let _ = writeln!(out, "   {}\n", result.action);
        }
        SubmissionState::Failed(err) => {
            let _ = writeln!(out, "❌ {}\n", err.submit_message());
        }
        SubmissionState::Pending => {
            let _ = writeln!(out, "⏳ Processing...\n");
        }
        SubmissionState::Idle => {}
    }

    let _ = writeln!(out, "🔔 Report New Incident: {}", state.draft);
    let _ = writeln!(out, "   Quick: {}\n", quick_line());

    let _ = writeln!(out, "{}\n", tabs(state));

    let _ = writeln!(out, "📋 Recent Incidents");
    let shown = state.visible();
    if shown.is_empty() {
        let _ = writeln!(out, "   📁 No incidents found");
    }
    for incident in shown {
        let severity = incident.severity.as_deref();
        let _ = writeln!(
            out,
            "{} {} {}  ({})",
            accent_bar(accent_for(severity)),
            icon_for(severity),
            incident.message,
            incident.created_at_display()
        );
        let _ = writeln!(
            out,
            "   Category: {} | Severity: {}",
            incident.category,
            label_upper(severity)
        );
    }
    out
}

fn tabs(state: &DashboardState) -> String {
    Filter::ALL
        .iter()
        .map(|&filter| {
            let label = match filter {
                Filter::All => filter.label().to_string(),
                _ => format!("{} ({})", filter.label(), state.stats.count(filter)),
            };
            if filter == state.filter {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn accent_bar(hex: &str) -> String {
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(255)
    };
    format!("\x1b[38;2;{};{};{}m▌\x1b[0m", channel(1), channel(3), channel(5))
}

fn quick_line() -> String {
    QUICK_EXAMPLES
        .iter()
        .enumerate()
        .map(|(i, example)| format!("{}) {example}", i + 1))
        .collect::<Vec<_>>()
        .join("  ")
}
