/// Utility helpers for minitunes

/// Escape the five HTML-sensitive characters before interpolating any
/// user-supplied or remote-sourced string into rendered markup.
pub fn escape_html<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());

    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }

    out
}

/// Format a track length in seconds as `m:ss` with zero-padded seconds.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(
            escape_html("\"quoted\" 'single'"),
            "&quot;quoted&quot; &#39;single&#39;"
        );
    }

    #[test]
    fn escaped_output_never_contains_raw_script_tag() {
        let out = escape_html("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Ocean Drive"), "Ocean Drive");
    }

    #[test]
    fn formats_durations_with_zero_padded_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(150), "2:30");
        assert_eq!(format_duration(205), "3:25");
        assert_eq!(format_duration(600), "10:00");
    }
}
