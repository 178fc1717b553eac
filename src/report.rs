//! Human-readable rendering of scan results.

use crate::scanner::Finding;
use colored::Colorize;

/// One report line per finding: `'<char>' (Unicode: U+00A0)`.
pub fn finding_line(finding: &Finding) -> String {
    format!("'{}' (Unicode: {})", finding.ch, finding.label)
}

/// Full report: header plus one line per finding, or the no-findings
/// notice. No trailing newline.
pub fn render_report(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "No watermark characters found.".to_string();
    }
    let mut lines = vec!["Watermark characters found:".to_string()];
    lines.extend(findings.iter().map(finding_line));
    lines.join("\n")
}

/// Render `text` with the marked scalar positions reverse-videoed.
///
/// The watermark characters themselves are invisible, so the mark set
/// includes their neighbors; highlighting the neighbors is what makes an
/// occurrence visible. `positions` must be sorted ascending, as produced
/// by [`crate::scanner::highlight_positions`].
pub fn render_marked(text: &str, positions: &[usize]) -> String {
    let mut out = String::new();
    let mut upcoming = positions.iter().copied().peekable();
    for (i, ch) in text.chars().enumerate() {
        if upcoming.peek() == Some(&i) {
            upcoming.next();
            let cell = ch.to_string();
            out.push_str(&cell.as_str().reversed().to_string());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::detect;
    use crate::catalog::WatermarkCatalog;

    #[test]
    fn report_line_matches_contract() {
        let findings = detect(WatermarkCatalog::global(), "a\u{00A0}b");
        assert_eq!(finding_line(&findings[0]), "'\u{00A0}' (Unicode: U+00A0)");
    }

    #[test]
    fn empty_report_is_a_notice() {
        assert_eq!(render_report(&[]), "No watermark characters found.");
    }

    #[test]
    fn marked_rendering_wraps_marked_positions() {
        colored::control::set_override(true);
        let rendered = render_marked("abc", &[1]);
        colored::control::unset_override();
        assert!(rendered.starts_with('a'));
        assert!(rendered.ends_with('c'));
        assert!(rendered.contains("\u{1b}[7m"), "position 1 should be reverse-videoed");
    }
}
