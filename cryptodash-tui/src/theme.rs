//! Neon-on-charcoal palette and the styles built from it.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, headers, active tab)
//! - **Positive**: Neon green (gains, bullish signals, normal risk)
//! - **Negative**: Hot pink (losses, bearish signals, critical risk)
//! - **Warning**: Neon orange (thresholds, rebalance hints)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (labels, hints, placeholders)

use ratatui::style::{Color, Modifier, Style};

use cryptodash_core::domain::{Impact, RiskStatus};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Green for gains (zero included), pink for losses.
pub fn change_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE
    } else {
        NEGATIVE
    }
}

pub fn change(value: f64) -> Style {
    Style::default().fg(change_color(value))
}

pub fn risk_status(status: RiskStatus) -> Style {
    match status {
        RiskStatus::Normal => positive(),
        RiskStatus::Warning => warning(),
        RiskStatus::Critical => negative().add_modifier(Modifier::BOLD),
    }
}

pub fn impact(impact: Impact) -> Style {
    match impact {
        Impact::High => negative(),
        Impact::Medium => warning(),
        Impact::Low => muted(),
    }
}

/// Signal and recommendation words (`Strong Buy`, `Sell`, `Hold`, ...).
pub fn signal(word: &str) -> Style {
    let lower = word.to_ascii_lowercase();
    if lower.contains("buy") || lower.contains("bullish") {
        positive()
    } else if lower.contains("sell") || lower.contains("bearish") || lower.contains("reduce") {
        negative()
    } else {
        neutral()
    }
}

/// Sentiment scores on a 0-100 scale.
pub fn sentiment(score: f64) -> Style {
    if score >= 70.0 {
        positive()
    } else if score >= 40.0 {
        warning()
    } else {
        negative()
    }
}

/// Sharpe ratio gradient, from pink (negative) up to green.
pub fn sharpe(value: f64) -> Style {
    match value {
        s if s >= 2.0 => positive(),
        s if s >= 1.0 => accent(),
        s if s >= 0.5 => neutral(),
        s if s >= 0.0 => muted(),
        _ => negative(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_color_zero_is_positive() {
        assert_eq!(change_color(100.0), POSITIVE);
        assert_eq!(change_color(-0.5), NEGATIVE);
        assert_eq!(change_color(0.0), POSITIVE);
    }

    #[test]
    fn sharpe_gradient() {
        assert_eq!(sharpe(2.5), positive());
        assert_eq!(sharpe(1.5), accent());
        assert_eq!(sharpe(0.7), neutral());
        assert_eq!(sharpe(0.3), muted());
        assert_eq!(sharpe(-0.5), negative());
    }

    #[test]
    fn signal_words() {
        assert_eq!(signal("Strong Buy"), positive());
        assert_eq!(signal("Sell"), negative());
        assert_eq!(signal("Reduce"), negative());
        assert_eq!(signal("Hold"), neutral());
        assert_eq!(signal("Bullish"), positive());
    }
}
