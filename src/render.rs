use crate::comparison::{ComparisonResult, DayDisplay, SeriesEntry};
use crate::location::Location;

/// Width of the caption line
const CAPTION_WIDTH: usize = 60;

/// Renders a comparison result into the fixed text layout
///
/// # Arguments
///
/// * 'location' - the location the result is for
/// * 'result' - the comparison result to render
/// * 'caption' - caption shown in the header line, e.g. a report time
pub fn render(location: &Location, result: &ComparisonResult, caption: &str) -> String {
    let header = format!("{} {} ", caption, location.name);
    let mut out = format!("{:=<width$}\n", header, width = CAPTION_WIDTH);

    let percentage = result.today_trend
        .shown_percentage()
        .map(|p| format!(" ({:+.0}%)", p))
        .unwrap_or_default();

    out.push_str(&format!("Today  {}  {:>5.1}  {}{}\n",
                          result.today_date.format("%Y-%m-%d"), result.today_pfi,
                          result.today_trend.bucket, percentage));
    if let Some(display) = display_text(&result.today_display) {
        out.push_str(&format!("       {}\n", display));
    }

    out.push_str(&format!("{:-<width$}\n", "", width = CAPTION_WIDTH));
    for entry in &result.week_series {
        out.push_str(&entry_line(entry));
        out.push('\n');
    }

    out
}

fn entry_line(entry: &SeriesEntry) -> String {
    let pfi = match entry.pfi {
        Some(pfi) => format!("{:>5.1}", pfi),
        None => format!("{:>5}", "--"),
    };

    match display_text(&entry.display) {
        Some(display) => format!("{:<6} {}  {}", entry.day_label, pfi, display),
        None => format!("{:<6} {}", entry.day_label, pfi),
    }
}

fn display_text(display: &DayDisplay) -> Option<String> {
    match display {
        DayDisplay::Hazard(hazard) => Some(format!("! {}", hazard)),
        DayDisplay::Precipitation(precipitation) => Some(precipitation.to_string()),
        DayDisplay::Nothing => None,
    }
}
