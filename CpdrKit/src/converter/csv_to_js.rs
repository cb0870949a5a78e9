//! CSV to JavaScript snippet conversion
//!
//! The CSV text is placed between backticks untouched unless escaping is
//! switched on, so a backtick inside the data ends the literal early.

use crate::config::EmbedOptions;
use crate::error::{Error, Result};

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Printed above and below the declaration.
const DELIMITER: &str = "--------------------------------------------------";

const COPY_HINT: &str = "--- STEP 1: Copy the text below this line ---";
const PASTE_HINT: &str = "--- STEP 2: Paste it into your HTML file's script tag ---";

/// Read a CSV file and render its snippet
///
/// # Errors
/// Returns [`Error::FileNotFound`] if the file is missing, another IO error
/// if it cannot be read as UTF-8 text, or [`Error::InvalidIdentifier`] for a
/// bad variable name.
pub fn embed_csv_file<P: AsRef<Path>>(path: P, options: &EmbedOptions) -> Result<String> {
    let path = path.as_ref();
    tracing::info!("Embedding CSV→JS: {path:?}");

    let csv_text = fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
    let snippet = render_js_snippet(&csv_text, options)?;

    tracing::debug!("Rendered {} bytes of CSV into a snippet", csv_text.len());
    Ok(snippet)
}

/// Render the copy/paste block for `csv_text`.
///
/// ```text
/// --- STEP 1: Copy the text below this line ---
/// --------------------------------------------------
/// const csvData = `...`;
/// --------------------------------------------------
/// --- STEP 2: Paste it into your HTML file's script tag ---
/// ```
///
/// # Errors
/// Returns [`Error::InvalidIdentifier`] if the variable name cannot be used
/// in a `const` declaration.
pub fn render_js_snippet(csv_text: &str, options: &EmbedOptions) -> Result<String> {
    if !is_js_identifier(&options.variable_name) {
        return Err(Error::InvalidIdentifier(options.variable_name.clone()));
    }

    let body = if options.escape_backticks {
        escape_template_literal(csv_text)
    } else {
        if csv_text.contains('`') {
            tracing::warn!("CSV contains a backtick; the template literal will end early");
        }
        csv_text.to_string()
    };

    let mut out = String::with_capacity(body.len() + 256);
    let _ = writeln!(out, "{COPY_HINT}");
    let _ = writeln!(out, "{DELIMITER}");
    let _ = writeln!(out, "const {} = `{body}`;", options.variable_name);
    let _ = writeln!(out, "{DELIMITER}");
    let _ = writeln!(out, "{PASTE_HINT}");
    Ok(out)
}

/// Escape text for use inside a JavaScript template literal.
pub fn escape_template_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Whether `name` can be used as a `const` name (ASCII identifiers only,
/// reserved words excluded).
pub fn is_js_identifier(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
        "if", "import", "in", "instanceof", "let", "new", "null", "return", "static", "super",
        "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    ];

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let head_ok = first.is_ascii_alphabetic() || first == '_' || first == '$';
    head_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !RESERVED.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snippet_layout() {
        let options = EmbedOptions::default();
        let snippet = render_js_snippet("Item,case_status\nA,Unresolved\n", &options).unwrap();
        assert_eq!(
            snippet,
            "--- STEP 1: Copy the text below this line ---\n\
             --------------------------------------------------\n\
             const csvData = `Item,case_status\nA,Unresolved\n`;\n\
             --------------------------------------------------\n\
             --- STEP 2: Paste it into your HTML file's script tag ---\n"
        );
        assert_eq!(DELIMITER.len(), 50);
    }

    #[test]
    fn test_backticks_kept_verbatim_by_default() {
        let snippet = render_js_snippet("a`b", &EmbedOptions::default()).unwrap();
        assert!(snippet.contains("const csvData = `a`b`;"));
    }

    #[test]
    fn test_escaping_when_enabled() {
        let options = EmbedOptions {
            escape_backticks: true,
            ..EmbedOptions::default()
        };
        let snippet = render_js_snippet("a`b\\c ${x} $y", &options).unwrap();
        assert!(snippet.contains(r"const csvData = `a\`b\\c \${x} $y`;"));
    }

    #[test]
    fn test_variable_name_validation() {
        assert!(is_js_identifier("csvData"));
        assert!(is_js_identifier("_cases$2025"));
        assert!(!is_js_identifier(""));
        assert!(!is_js_identifier("2cases"));
        assert!(!is_js_identifier("csv-data"));
        assert!(!is_js_identifier("const"));

        let options = EmbedOptions {
            variable_name: "my data".to_string(),
            ..EmbedOptions::default()
        };
        assert!(matches!(
            render_js_snippet("x", &options),
            Err(Error::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_custom_variable_name() {
        let options = EmbedOptions {
            variable_name: "cases".to_string(),
            ..EmbedOptions::default()
        };
        let snippet = render_js_snippet("Item\n", &options).unwrap();
        assert!(snippet.contains("const cases = `Item\n`;"));
    }
}
