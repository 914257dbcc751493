use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Info,
    Success,
    Error,
}

/// Целое с неразрывным пробелом между тысячами: 1258 -> "1 258"
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Уже отформатированное значение (None = загрузка)
    #[prop(into)]
    value: Signal<Option<String>>,
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = match tone {
        StatTone::Neutral => "stat-card",
        StatTone::Info => "stat-card stat-card--info",
        StatTone::Success => "stat-card stat-card--success",
        StatTone::Error => "stat-card stat-card--error",
    };

    let formatted = move || value.get().unwrap_or_else(|| "-".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(47), "47");
        assert_eq!(format_thousands(1258), "1\u{a0}258");
        assert_eq!(format_thousands(1234567), "1\u{a0}234\u{a0}567");
    }
}
