//! Terminal output sanitization
//!
//! Message text comes from an untrusted export file. Before it reaches a terminal (CLI
//! output or the viewer) escape sequences are removed so a crafted message cannot move
//! the cursor, recolor the screen, or set the window title.

/// Remove ANSI CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL|ESC \`) sequences, other
/// lone escapes, and control characters except tab and newline.
///
/// # Examples
///
/// ```
/// use chat_export_viewer::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(sanitize_for_terminal("\x1b]0;title\x07hi"), "hi");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameter and intermediate bytes, then one final byte in @..~
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == '\x07' {
                            break;
                        }
                        if c == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                Some(_) => {
                    chars.next();
                }
                None => {}
            },
            '\t' | '\n' => out.push(ch),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}
