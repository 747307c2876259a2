use crate::shared::icons::icon;
use contracts::dashboards::d400_traffic::StatTile;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trend {
    Up,
    Down,
    Flat,
}

/// Direction of a preformatted change such as `"+12.5%"` or `"-3%"`
fn trend_of(change: &str) -> Trend {
    match change.trim().chars().next() {
        Some('+') => Trend::Up,
        Some('-') => Trend::Down,
        _ => Trend::Flat,
    }
}

#[component]
pub fn StatCard(tile: StatTile) -> impl IntoView {
    let (arrow, change_class) = match trend_of(&tile.change) {
        Trend::Up => ("\u{2191}", "stat-card__change stat-card__change--up"),
        Trend::Down => ("\u{2193}", "stat-card__change stat-card__change--down"),
        Trend::Flat => ("", "stat-card__change stat-card__change--flat"),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&tile.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{tile.title}</div>
                <div class="stat-card__value">
                    {tile.value}
                    <span class=change_class>{format!("{}{}", arrow, tile.change)}</span>
                </div>
                <div class="stat-card__subtitle">"vs. previous period"</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_of() {
        assert_eq!(trend_of("+12.5%"), Trend::Up);
        assert_eq!(trend_of(" -3%"), Trend::Down);
        assert_eq!(trend_of("0%"), Trend::Flat);
        assert_eq!(trend_of(""), Trend::Flat);
    }
}
