//! crates/logging/src/format.rs
//! Line composition: decoration prefix, severity tag and template rendering.
//!
//! Templates use printf-style placeholders. A `%` followed by one of the
//! conversion letters `s d i u f c x o e g p` (either case) is replaced by the
//! next argument's [`Display`] output; `%%` renders a literal `%`. Any other
//! `%` is copied unchanged. The conversion letter only marks the position,
//! it does not change how the argument is rendered.

use std::fmt::{Display, Write as _};

use super::call_site::CallSite;
use super::config::LogConfig;
use super::error::FormatError;
use super::severity::Severity;

const CONVERSIONS: &[u8] = b"sdiufcxoegpSDIUFCXOEGP";

enum Token<'t> {
    Literal(&'t str),
    Percent,
    Placeholder(&'t str),
}

/// Splits `template` into literal runs, escaped percents and placeholders.
fn tokens(template: &str) -> impl Iterator<Item = Token<'_>> {
    let bytes = template.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        if pos >= bytes.len() {
            return None;
        }
        if bytes[pos] == b'%' {
            match bytes.get(pos + 1) {
                Some(b'%') => {
                    pos += 2;
                    return Some(Token::Percent);
                }
                Some(next) if CONVERSIONS.contains(next) => {
                    pos += 2;
                    return Some(Token::Placeholder(&template[pos - 2..pos]));
                }
                _ => {}
            }
        }
        // Scan to the next '%' that may start a token; a lone '%' is literal.
        let start = pos;
        pos += 1;
        while pos < bytes.len() && bytes[pos] != b'%' {
            pos += 1;
        }
        Some(Token::Literal(&template[start..pos]))
    })
}

/// Counts the placeholders in `template`.
///
/// # Examples
///
/// ```
/// use logging::format::count_placeholders;
///
/// assert_eq!(count_placeholders("user %s logged in at %s"), 2);
/// assert_eq!(count_placeholders("100%% done"), 0);
/// ```
#[must_use]
pub fn count_placeholders(template: &str) -> usize {
    tokens(template)
        .filter(|token| matches!(token, Token::Placeholder(_)))
        .count()
}

/// Renders `template` into `out`, substituting as many placeholders as there
/// are arguments.
///
/// Placeholders without an argument are copied verbatim and surplus arguments
/// are ignored; either case is reported as [`FormatError::ArgumentCount`]
/// after the best-effort text has been written. An argument whose `Display`
/// implementation fails keeps whatever it wrote before failing and is
/// reported as [`FormatError::Argument`] unless the counts also differ.
pub fn render_into(
    out: &mut String,
    template: &str,
    args: &[&dyn Display],
) -> Result<(), FormatError> {
    let mut remaining = args.iter();
    let mut expected = 0;
    let mut failed = None;

    for token in tokens(template) {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Percent => out.push('%'),
            Token::Placeholder(marker) => {
                match remaining.next() {
                    Some(arg) => {
                        if write!(out, "{arg}").is_err() && failed.is_none() {
                            failed = Some(expected);
                        }
                    }
                    None => out.push_str(marker),
                }
                expected += 1;
            }
        }
    }

    if expected != args.len() {
        return Err(FormatError::ArgumentCount {
            expected,
            found: args.len(),
        });
    }
    match failed {
        Some(position) => Err(FormatError::Argument { position }),
        None => Ok(()),
    }
}

/// Renders `template` with `args`, failing when the counts differ.
///
/// # Examples
///
/// ```
/// use logging::format::render_template;
///
/// let line = render_template("user %s logged in at %s", &[&"alice", &"09:00"]).unwrap();
/// assert_eq!(line, "user alice logged in at 09:00");
///
/// assert!(render_template("%s and %s", &[&1]).is_err());
/// ```
pub fn render_template(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    render_into(&mut out, template, args)?;
    Ok(out)
}

/// Appends the decoration prefix for `site` as selected by `config`.
///
/// Segments appear in the order `[path] [file] [function] (Line: N)`; disabled
/// segments contribute nothing, and neither does a bracketed segment whose
/// text is empty (a file at the root has no path). Nothing, not even a
/// separator, is written when no segment remains. A non-empty prefix ends
/// with a single space.
pub fn write_decoration(out: &mut String, config: &LogConfig, site: &CallSite) {
    let start = out.len();
    let separate = |out: &mut String| {
        if out.len() > start {
            out.push(' ');
        }
    };

    let bracketed = [
        (config.is_path_showing(), site.file_path()),
        (config.is_file_name_showing(), site.file_name()),
        (config.is_function_showing(), site.function()),
    ];
    for (shown, text) in bracketed {
        if shown && !text.is_empty() {
            separate(out);
            out.push('[');
            out.push_str(text);
            out.push(']');
        }
    }
    if config.is_line_showing() {
        separate(out);
        // Integer formatting into a String is infallible.
        let _ = write!(out, "(Line: {})", site.line());
    }

    if out.len() > start {
        out.push(' ');
    }
}

/// Returns the decoration prefix as a new string.
#[must_use]
pub fn decoration(config: &LogConfig, site: &CallSite) -> String {
    let mut out = String::new();
    write_decoration(&mut out, config, site);
    out
}

/// Composes the full newline-terminated line for one log call into `out`.
///
/// The line is always produced. On a placeholder/argument mismatch the
/// rendered text is followed by a bracketed note describing the mismatch and
/// the error is returned so the caller can report it.
pub fn format_line(
    out: &mut String,
    config: &LogConfig,
    severity: Severity,
    site: &CallSite,
    template: &str,
    args: &[&dyn Display],
) -> Result<(), FormatError> {
    write_decoration(out, config, site);
    out.push_str(severity.tag());
    let result = render_into(out, template, args);
    if let Err(err) = &result {
        // FormatError's own Display never fails.
        let _ = write!(out, " [{err}]");
    }
    out.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> CallSite {
        CallSite::from_parts("src/app/main.rs", "run", 27)
    }

    #[test]
    fn substitutes_in_order() {
        let rendered = render_template("user %s logged in at %s", &[&"alice", &"09:00"])
            .expect("matching counts");
        assert_eq!(rendered, "user alice logged in at 09:00");
    }

    #[test]
    fn heterogeneous_arguments_use_display() {
        let rendered =
            render_template("%d files, %f%% left, ok=%s", &[&3, &0.5, &true]).expect("counts");
        assert_eq!(rendered, "3 files, 0.5% left, ok=true");
    }

    #[test]
    fn escaped_and_stray_percents_are_literal() {
        assert_eq!(render_template("100%%", &[]).unwrap(), "100%");
        assert_eq!(render_template("50% off", &[]).unwrap(), "50% off");
        assert_eq!(render_template("trailing %", &[]).unwrap(), "trailing %");
        assert_eq!(count_placeholders("%z %%s %s"), 1);
    }

    #[test]
    fn missing_arguments_keep_markers_and_report() {
        let mut out = String::new();
        let err = render_into(&mut out, "a=%s b=%d", &[&1]).unwrap_err();
        assert_eq!(out, "a=1 b=%d");
        assert_eq!(
            err,
            FormatError::ArgumentCount {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn surplus_arguments_are_ignored_and_reported() {
        let mut out = String::new();
        let err = render_into(&mut out, "only %s", &[&"one", &"two"]).unwrap_err();
        assert_eq!(out, "only one");
        assert_eq!(
            err,
            FormatError::ArgumentCount {
                expected: 1,
                found: 2
            }
        );
    }

    /// Display impl that always fails.
    struct Unrenderable;

    impl Display for Unrenderable {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn failing_argument_is_reported_with_its_position() {
        let mut out = String::new();
        let err = render_into(&mut out, "a=%s b=%s c=%s", &[&1, &Unrenderable, &3]).unwrap_err();
        assert_eq!(out, "a=1 b= c=3");
        assert_eq!(err, FormatError::Argument { position: 1 });
    }

    #[test]
    fn count_mismatch_takes_precedence_over_failing_argument() {
        let mut out = String::new();
        let err = render_into(&mut out, "%s %s", &[&Unrenderable]).unwrap_err();
        assert_eq!(
            err,
            FormatError::ArgumentCount {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn multibyte_text_survives_tokenising() {
        assert_eq!(
            render_template("größe %s ✓", &[&"ok"]).unwrap(),
            "größe ok ✓"
        );
    }

    #[test]
    fn decoration_all_segments() {
        let config = LogConfig::default();
        assert_eq!(
            decoration(&config, &site()),
            "[src/app] [main.rs] [run] (Line: 27) "
        );
    }

    #[test]
    fn decoration_skips_empty_segments() {
        let site = CallSite::from_parts("main.rs", "", 3);
        assert_eq!(
            decoration(&LogConfig::default(), &site),
            "[main.rs] (Line: 3) "
        );
    }

    #[test]
    fn decoration_empty_when_all_hidden() {
        let config = LogConfig::plain(Severity::All);
        assert_eq!(decoration(&config, &site()), "");
    }

    #[test]
    fn format_line_plain() {
        let mut out = String::new();
        format_line(
            &mut out,
            &LogConfig::plain(Severity::Warn),
            Severity::Error,
            &site(),
            "disk full",
            &[],
        )
        .expect("no placeholders");
        assert_eq!(out, "[ERROR] disk full\n");
    }

    #[test]
    fn format_line_notes_mismatch() {
        let mut out = String::new();
        let err = format_line(
            &mut out,
            &LogConfig::plain(Severity::All),
            Severity::Info,
            &site(),
            "%s and %s",
            &[&"x"],
        )
        .unwrap_err();
        assert_eq!(
            out,
            "[INFO] x and %s [malformed template: expected 2 arguments, found 1]\n"
        );
        assert_eq!(
            err,
            FormatError::ArgumentCount {
                expected: 2,
                found: 1
            }
        );
    }
}
