//! Value kinds an option can hold
//!
//! The set is closed: booleans, integers, floats and strings. Each kind knows
//! how many tokens it consumes from the command line and how it renders in
//! the usage listing.

use std::fmt;
use std::str::FromStr;

use super::storage::Storage;
use crate::errors::{ArgError, Result};

/// Tag naming the kind of value an option holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Switch,
    Integer,
    Float,
    Text,
}

impl ValueKind {
    /// Whether a flag of this kind consumes the following token
    pub fn takes_value(self) -> bool {
        !matches!(self, ValueKind::Switch)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Switch => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "string",
        };
        f.write_str(name)
    }
}

/// Type-erased storage of a registered option
#[derive(Debug)]
pub enum Binding<'a> {
    Switch(Storage<'a, bool>),
    Integer(Storage<'a, i64>),
    Float(Storage<'a, f64>),
    Text(Storage<'a, String>),
}

impl<'a> Binding<'a> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Binding::Switch(_) => ValueKind::Switch,
            Binding::Integer(_) => ValueKind::Integer,
            Binding::Float(_) => ValueKind::Float,
            Binding::Text(_) => ValueKind::Text,
        }
    }

    /// Apply one occurrence of `flag`, pulling its value token from `tokens`.
    ///
    /// Switches toggle and consume nothing. Every other kind consumes exactly
    /// one token; on a parse failure the stored value is left untouched.
    pub fn apply<'t, I>(&mut self, flag: &str, tokens: &mut I) -> Result<()>
    where
        I: Iterator<Item = &'t str>,
    {
        match self {
            Binding::Switch(storage) => {
                let value = storage.get_mut();
                *value = !*value;
                Ok(())
            }
            Binding::Integer(storage) => {
                *storage.get_mut() = parse_token(flag, next_token(flag, tokens)?)?;
                Ok(())
            }
            Binding::Float(storage) => {
                *storage.get_mut() = parse_token(flag, next_token(flag, tokens)?)?;
                Ok(())
            }
            Binding::Text(storage) => {
                *storage.get_mut() = next_token(flag, tokens)?.to_string();
                Ok(())
            }
        }
    }
}

/// Renders the current value the way the usage listing shows it
impl fmt::Display for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Switch(s) => f.write_str(if *s.get() { "On" } else { "Off" }),
            Binding::Integer(s) => write!(f, "{}", s.get()),
            Binding::Float(s) => write!(f, "{}", s.get()),
            Binding::Text(s) => f.write_str(s.get()),
        }
    }
}

fn next_token<'t, I>(flag: &str, tokens: &mut I) -> Result<&'t str>
where
    I: Iterator<Item = &'t str>,
{
    tokens
        .next()
        .ok_or_else(|| ArgError::MissingValue(flag.to_string()))
}

fn parse_token<T>(flag: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ArgError::ValueParse {
        flag: flag.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// Rust types that can back an option.
///
/// Sealed: implemented for `bool`, `i64`, `f64` and `String` only.
pub trait OptionType: sealed::Sealed + Sized + 'static {
    const KIND: ValueKind;

    #[doc(hidden)]
    fn into_binding(storage: Storage<'_, Self>) -> Binding<'_>;

    #[doc(hidden)]
    fn project<'r>(binding: &'r Binding<'_>) -> Option<&'r Self>;

    #[doc(hidden)]
    fn project_mut<'r>(binding: &'r mut Binding<'_>) -> Option<&'r mut Self>;
}

macro_rules! option_type {
    ($ty:ty, $variant:ident, $kind:expr) => {
        impl OptionType for $ty {
            const KIND: ValueKind = $kind;

            fn into_binding(storage: Storage<'_, Self>) -> Binding<'_> {
                Binding::$variant(storage)
            }

            fn project<'r>(binding: &'r Binding<'_>) -> Option<&'r Self> {
                match binding {
                    Binding::$variant(s) => Some(s.get()),
                    _ => None,
                }
            }

            fn project_mut<'r>(binding: &'r mut Binding<'_>) -> Option<&'r mut Self> {
                match binding {
                    Binding::$variant(s) => Some(s.get_mut()),
                    _ => None,
                }
            }
        }
    };
}

option_type!(bool, Switch, ValueKind::Switch);
option_type!(i64, Integer, ValueKind::Integer);
option_type!(f64, Float, ValueKind::Float);
option_type!(String, Text, ValueKind::Text);
