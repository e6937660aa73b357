//! Command-line argument escaping
//!
//! Builds a single command line from discrete arguments so that the target
//! program's argument parser splits it back into the same arguments.

use std::fmt::Display;

/// Join arguments into one command line string
pub trait ArgumentEscaper {
    fn escape<I, A>(&self, args: I) -> String
    where
        I: IntoIterator<Item = A>,
        A: Display;
}

/// Escaping for the Microsoft C runtime argument parser
///
/// Every argument is wrapped in double quotes. Backslashes are literal
/// except when they precede a double quote: a run of `n` backslashes
/// followed by `"` becomes `2n + 1` backslashes and the quote, and a run
/// at the end of an argument is doubled so it does not escape the closing
/// quote.
///
/// # Example
///
/// ```
/// use assay_core::{ArgumentEscaper, WindowsArgumentEscaper};
///
/// let line = WindowsArgumentEscaper.escape(["a b", r#"say "hi""#]);
/// assert_eq!(line, r#""a b" "say \"hi\"""#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsArgumentEscaper;

impl WindowsArgumentEscaper {
    fn quote(arg: &str, out: &mut String) {
        out.push('"');
        let mut backslashes = 0usize;
        for ch in arg.chars() {
            match ch {
                '\\' => backslashes += 1,
                '"' => {
                    push_backslashes(out, backslashes * 2 + 1);
                    out.push('"');
                    backslashes = 0;
                }
                other => {
                    push_backslashes(out, backslashes);
                    out.push(other);
                    backslashes = 0;
                }
            }
        }
        push_backslashes(out, backslashes * 2);
        out.push('"');
    }
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('\\').take(count));
}

impl ArgumentEscaper for WindowsArgumentEscaper {
    fn escape<I, A>(&self, args: I) -> String
    where
        I: IntoIterator<Item = A>,
        A: Display,
    {
        let mut line = String::new();
        for (idx, arg) in args.into_iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            Self::quote(&arg.to_string(), &mut line);
        }
        line
    }
}
