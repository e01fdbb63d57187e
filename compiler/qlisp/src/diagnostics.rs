//! Rendering parse errors for the terminal.

use ariadne::{Config, Label, Report, ReportKind, Source};
use qlisp_parse::ParseError;

/// Render `err` against `source` as an annotated snippet.
pub fn render_parse_error(name: &str, source: &str, err: &ParseError, color: bool) -> String {
    let range = err.span().to_range();
    let start = char_offset(source, range.start);
    let end = char_offset(source, range.end).max(start.saturating_add(1));

    let report = Report::build(ReportKind::Error, (), start)
        .with_config(Config::default().with_color(color))
        .with_message(format!("{name}: {err}"))
        .with_label(Label::new(start..end).with_message(err.label()))
        .finish();

    let mut out = Vec::new();
    if report.write(Source::from(source.to_string()), &mut out).is_err() {
        return format!("{name}: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Labels are positioned in characters, spans in bytes.
fn char_offset(source: &str, byte: usize) -> usize {
    source
        .get(..byte)
        .map_or_else(|| source.chars().count(), |prefix| prefix.chars().count())
}
