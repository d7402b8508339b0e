use cityweather_core::{ForecastEntry, SearchError, Theme, WeatherReport, WeatherSnapshot};

const RESET: &str = "\x1b[0m";

struct Palette {
    accent: &'static str,
    muted: &'static str,
    alert: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            accent: "\x1b[34m",
            muted: "\x1b[90m",
            alert: "\x1b[31m",
        },
        Theme::Dark => Palette {
            accent: "\x1b[96m",
            muted: "\x1b[37m",
            alert: "\x1b[91m",
        },
    }
}

pub fn snapshot(s: &WeatherSnapshot, theme: Theme) -> String {
    let p = palette(theme);

    format!(
        "{}{} {}°C{}  {}\n   {}{}% Humidity   {} Km/h Wind Speed{}\n",
        p.accent,
        s.condition_icon.glyph(),
        s.temperature_celsius,
        RESET,
        s.location_name,
        p.muted,
        s.humidity_percent,
        s.wind_speed_kmh,
        RESET
    )
}

fn forecast_row(entry: &ForecastEntry) -> String {
    format!(
        "   {}  {} {:<7} {}°C",
        entry.date.format("%a %d %b"),
        entry.condition_icon.glyph(),
        entry.condition_icon.label(),
        entry.temperature_celsius
    )
}

pub fn report(r: &WeatherReport, theme: Theme) -> String {
    let p = palette(theme);
    let mut out = snapshot(&r.snapshot, theme);

    out.push_str(&format!("\n{}5-Day Forecast{}\n", p.accent, RESET));
    if r.forecast.is_empty() {
        out.push_str(&format!("   {}no midday readings{}\n", p.muted, RESET));
    }
    for entry in &r.forecast {
        out.push_str(&forecast_row(entry));
        out.push('\n');
    }
    out
}

pub fn favorites(list: &[WeatherSnapshot], theme: Theme) -> String {
    let p = palette(theme);
    let mut out = format!("{}Favorite Cities{}\n", p.accent, RESET);

    if list.is_empty() {
        out.push_str(&format!(
            "   {}none yet, use `fav` after a search{}\n",
            p.muted, RESET
        ));
    }
    for fav in list {
        out.push_str(&snapshot(fav, theme));
    }
    out
}

/// Blocking notices stand out; the rest read as dismissible.
pub fn notice(err: &SearchError, theme: Theme) -> String {
    let p = palette(theme);
    if err.is_blocking() {
        format!("{}! {}{}", p.alert, err.user_message(), RESET)
    } else {
        format!("{}{}{}", p.muted, err.user_message(), RESET)
    }
}
