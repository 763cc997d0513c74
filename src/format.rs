//! Printf-style template rendering for log messages.
//!
//! Templates use positional conversion characters: `%s` for any value, `%d`
//! for integers, `%f` for floats, and `%%` for a literal percent sign.
//! Surplus arguments are ignored; a missing argument or a kind mismatch
//! fails with [`Error`](crate::Error).

use std::borrow::Cow;

use crate::{Error, Result};

/// A single substitution argument for [`render`]
#[derive(Debug, Clone)]
pub enum Arg<'a> {
    /// Text, accepted by `%s`
    Str(Cow<'a, str>),
    /// Signed integer, accepted by `%d` and `%s`
    Int(i64),
    /// Unsigned integer, accepted by `%d` and `%s`
    Uint(u64),
    /// Floating point, accepted by `%f` and `%s`
    Float(f64),
}

impl Arg<'_> {
    /// Kind name used in mismatch errors
    fn kind(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) | Arg::Uint(_) => "integer",
            Arg::Float(_) => "float",
        }
    }

    /// Display form, as substituted by `%s`
    fn display(&self) -> Cow<'_, str> {
        match self {
            Arg::Str(s) => Cow::Borrowed(s.as_ref()),
            Arg::Int(v) => Cow::Owned(v.to_string()),
            Arg::Uint(v) => Cow::Owned(v.to_string()),
            Arg::Float(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Arg::Str(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Str(Cow::Owned(value.to_string()))
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Str(Cow::Borrowed(if value { "true" } else { "false" }))
    }
}

macro_rules! impl_from_number {
    ($variant:ident: $to:ty => $($from:ty),+) => {
        $(impl From<$from> for Arg<'_> {
            fn from(value: $from) -> Self {
                Arg::$variant(value as $to)
            }
        })+
    };
}

impl_from_number!(Int: i64 => i8, i16, i32, i64, isize);
impl_from_number!(Uint: u64 => u8, u16, u32, u64, usize);
impl_from_number!(Float: f64 => f32, f64);

/// Build an argument array from mixed values
///
/// `args!["host1", 8080]` expands to `[Arg::from("host1"), Arg::from(8080)]`.
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::format::Arg<'static>; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::format::Arg::from($value)),+]
    };
}

/// Render `template`, substituting `args` in order
///
/// `%f` renders six decimal places, matching the default precision of the
/// host formatters this template syntax comes from.
pub fn render(template: &str, args: &[Arg<'_>]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut next = 0usize;
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(spec) = chars.next() else {
            return Err(Error::UnterminatedSpecifier);
        };
        match spec {
            '%' => out.push('%'),
            's' => {
                let (_, arg) = take(args, &mut next, 's')?;
                out.push_str(&arg.display());
            }
            'd' => {
                let (index, arg) = take(args, &mut next, 'd')?;
                match arg {
                    Arg::Int(v) => out.push_str(&v.to_string()),
                    Arg::Uint(v) => out.push_str(&v.to_string()),
                    other => {
                        return Err(Error::ArgumentType {
                            spec: 'd',
                            index,
                            found: other.kind(),
                        });
                    }
                }
            }
            'f' => {
                let (index, arg) = take(args, &mut next, 'f')?;
                match arg {
                    Arg::Float(v) => out.push_str(&format!("{:.6}", v)),
                    other => {
                        return Err(Error::ArgumentType {
                            spec: 'f',
                            index,
                            found: other.kind(),
                        });
                    }
                }
            }
            other => return Err(Error::UnknownSpecifier(other)),
        }
    }

    Ok(out)
}

/// Consume the next argument for `spec`, reporting its position
fn take<'s, 'a>(args: &'s [Arg<'a>], next: &mut usize, spec: char) -> Result<(usize, &'s Arg<'a>)> {
    let index = *next;
    let arg = args.get(index).ok_or(Error::MissingArgument { spec, index })?;
    *next += 1;
    Ok((index, arg))
}
