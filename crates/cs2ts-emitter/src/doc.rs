//! XML documentation summaries to JSDoc blocks.
//!
//! Only the `<summary>` element of a documentation comment is kept. Its
//! direct text is trimmed line by line and rewrapped:
//!
//! ```text
//! /// <summary>                    /**
//! /// Total price, in cents.   =>   * Total price, in cents.
//! /// </summary>                    */
//! ```

const SUMMARY_OPEN: &str = "<summary>";
const SUMMARY_CLOSE: &str = "</summary>";

/// Extracts the summary from leading comments as a `/** ... */` block.
///
/// Returns an empty string when there is no documentation comment, no
/// `<summary>` element, or the summary has no text. The block ends with a
/// newline.
///
/// # Examples
///
/// ```
/// use cs2ts_emitter::extract_doc;
///
/// let comments = vec![
///     "/// <summary>".to_owned(),
///     "/// The order total.".to_owned(),
///     "/// </summary>".to_owned(),
/// ];
/// assert_eq!(extract_doc(&comments), "/**\n * The order total.\n */\n");
/// ```
pub fn extract_doc(comments: &[String]) -> String {
    let xml = doc_xml(comments);
    let Some(summary) = summary_content(&xml) else {
        return String::new();
    };

    let text = decode_entities(&strip_elements(summary));
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut block = String::from("/**\n");
    for line in text.lines() {
        block.push_str(" * ");
        block.push_str(line.trim());
        block.push('\n');
    }
    block.push_str(" */\n");
    block
}

/// Prefixes every line of `block` with `indent`.
#[must_use]
pub fn indent_block(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(|line| format!("{indent}{line}\n"))
        .collect()
}

/// Concatenates the bodies of `///` and `/** */` comments, one line each.
fn doc_xml(comments: &[String]) -> String {
    let mut xml = String::new();
    for comment in comments {
        let comment = comment.trim();
        if let Some(line) = comment.strip_prefix("///") {
            xml.push_str(line);
            xml.push('\n');
        } else if let Some(body) = comment
            .strip_prefix("/**")
            .map(|body| body.strip_suffix("*/").unwrap_or(body))
        {
            for line in body.lines() {
                let line = line.trim_start();
                xml.push_str(line.strip_prefix('*').unwrap_or(line));
                xml.push('\n');
            }
        }
    }
    xml
}

fn summary_content(xml: &str) -> Option<&str> {
    let start = xml.find(SUMMARY_OPEN)? + SUMMARY_OPEN.len();
    let rest = xml.get(start..)?;
    let end = rest.find(SUMMARY_CLOSE).unwrap_or(rest.len());
    rest.get(..end)
}

/// Removes nested elements, including their content, keeping direct text.
fn strip_elements(content: &str) -> String {
    let mut text = String::with_capacity(content.len());
    let mut depth = 0usize;
    let mut rest = content;

    while let Some(open) = rest.find('<') {
        if depth == 0 {
            text.push_str(&rest[..open]);
        }
        let Some(close) = rest[open..].find('>') else {
            rest = "";
            break;
        };
        let tag = &rest[open + 1..open + close];
        if tag.starts_with('/') {
            depth = depth.saturating_sub(1);
        } else if !tag.ends_with('/') && !tag.starts_with('!') && !tag.starts_with('?') {
            depth += 1;
        }
        rest = &rest[open + close + 1..];
    }
    if depth == 0 {
        text.push_str(rest);
    }
    text
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
