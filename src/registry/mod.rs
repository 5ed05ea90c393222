//! Runtime option registry
//!
//! Options are declared against an explicitly owned [`Registry`], which maps
//! each flag to a typed binding. [`Registry::try_parse_from`] walks argv and
//! dispatches every token to the matching binding in command-line order.
//!
//! ```
//! use argrt::registry::{ParseOutcome, Registry};
//!
//! let mut verbose = false;
//! let mut registry = Registry::new();
//! let n = registry.declare("-n", "iterations", 42_i64).unwrap();
//! registry.bind("-v", "verbose", &mut verbose).unwrap();
//!
//! let outcome = registry.try_parse_from(["prog", "-n", "7", "-v"]).unwrap();
//! assert_eq!(outcome, ParseOutcome::Complete);
//! assert_eq!(registry.get(&n), Some(&7));
//! drop(registry);
//! assert!(verbose);
//! ```

pub mod storage;
pub mod usage;
pub mod value;

use std::collections::BTreeMap;
use std::io;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::errors::{ArgError, Result};
use crate::status::ExitStatus;

pub use storage::Storage;
pub use value::{Binding, OptionType, ValueKind};

/// Reserved flag registered by [`Registry::with_help`]
pub const HELP_FLAG: &str = "-h";

const HELP_DESCRIPTION: &str = "print usage info?";

/// Result of a successful scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// All tokens applied
    Complete,
    /// All tokens applied and the help flag ended up set
    Help,
}

/// Typed key for reading a declared option back out of its registry
#[derive(Debug)]
pub struct OptionHandle<T> {
    flag: String,
    _kind: PhantomData<fn() -> T>,
}

impl<T> OptionHandle<T> {
    fn new(flag: String) -> Self {
        Self {
            flag,
            _kind: PhantomData,
        }
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }
}

impl<T> Clone for OptionHandle<T> {
    fn clone(&self) -> Self {
        Self::new(self.flag.clone())
    }
}

#[derive(Debug)]
struct Entry<'a> {
    description: String,
    binding: Binding<'a>,
}

/// Table of declared options, keyed and iterated by flag
///
/// Options bound with [`Registry::bind`] borrow the caller's variable for
/// `'a`, so the registry cannot outlive the storage it writes to.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    entries: BTreeMap<String, Entry<'a>>,
    help: Option<OptionHandle<bool>>,
    program_name: Option<String>,
}

impl<'a> Registry<'a> {
    /// Empty registry without any reserved flags
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the reserved `-h` switch pre-declared
    pub fn with_help() -> Self {
        let mut registry = Self::new();
        let binding = bool::into_binding(Storage::Owned(false));
        registry.insert(HELP_FLAG.to_string(), HELP_DESCRIPTION.to_string(), binding);
        registry.help = Some(OptionHandle::new(HELP_FLAG.to_string()));
        registry
    }

    /// Declare an option that owns its value, starting at `default`
    pub fn declare<T: OptionType>(
        &mut self,
        flag: impl Into<String>,
        description: impl Into<String>,
        default: T,
    ) -> Result<OptionHandle<T>> {
        self.register(flag.into(), description.into(), Storage::Owned(default))
    }

    /// Declare an option whose value lives in `target`
    ///
    /// The current value of `target` acts as the default, and every parsed
    /// occurrence writes straight into it.
    pub fn bind<T: OptionType>(
        &mut self,
        flag: impl Into<String>,
        description: impl Into<String>,
        target: &'a mut T,
    ) -> Result<OptionHandle<T>> {
        self.register(flag.into(), description.into(), Storage::Borrowed(target))
    }

    fn register<T: OptionType>(
        &mut self,
        flag: String,
        description: String,
        storage: Storage<'a, T>,
    ) -> Result<OptionHandle<T>> {
        validate_flag(&flag)?;
        if self.entries.contains_key(&flag) {
            debug!(flag = %flag, "rejecting duplicate flag");
            return Err(ArgError::DuplicateFlag(flag));
        }

        debug!(
            flag = %flag,
            kind = %T::KIND,
            takes_value = T::KIND.takes_value(),
            borrowed = storage.is_borrowed(),
            "option registered"
        );
        self.insert(flag.clone(), description, T::into_binding(storage));
        Ok(OptionHandle::new(flag))
    }

    fn insert(&mut self, flag: String, description: String, binding: Binding<'a>) {
        self.entries.insert(flag, Entry { description, binding });
    }

    /// Current value of a declared option
    ///
    /// `None` once the flag is no longer registered.
    pub fn get<T: OptionType>(&self, handle: &OptionHandle<T>) -> Option<&T> {
        self.entries
            .get(&handle.flag)
            .and_then(|entry| T::project(&entry.binding))
    }

    pub fn get_mut<T: OptionType>(&mut self, handle: &OptionHandle<T>) -> Option<&mut T> {
        self.entries
            .get_mut(&handle.flag)
            .and_then(|entry| T::project_mut(&mut entry.binding))
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.entries.contains_key(flag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered flags in sorted order
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Program name (argv[0]) seen by the most recent parse
    pub fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    /// Drop every registration, releasing any borrowed storage
    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "clearing registry");
        self.entries.clear();
        self.help = None;
    }

    /// Apply `args` (argv, program name first) to the declared options.
    ///
    /// Tokens are applied left to right. The first unknown token, missing
    /// value or malformed value aborts the scan; options applied before it
    /// keep their new values.
    pub fn try_parse_from<I, S>(&mut self, args: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let mut tokens = tokens.into_iter();

        if let Some(program) = tokens.next() {
            self.program_name = Some(program.to_string());
        }

        while let Some(token) = tokens.next() {
            let Some(entry) = self.entries.get_mut(token) else {
                debug!(token = %token, "unknown argument");
                return Err(ArgError::UnknownArgument(token.to_string()));
            };
            if let Err(e) = entry.binding.apply(token, &mut tokens) {
                debug!(
                    flag = e.flag().unwrap_or(token),
                    kind = %entry.binding.kind(),
                    error = %e,
                    "failed to apply option"
                );
                return Err(e);
            }
            trace!(
                flag = %token,
                kind = %entry.binding.kind(),
                value = %entry.binding,
                "option applied"
            );
        }

        if self.help_requested() {
            return Ok(ParseOutcome::Help);
        }
        Ok(ParseOutcome::Complete)
    }

    /// Like [`Registry::try_parse_from`], but handles the outcome itself.
    ///
    /// On help, prints usage to stderr and exits with status 0. On error,
    /// prints the message to stderr and exits with status 1.
    pub fn parse_from<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.try_parse_from(args) {
            Ok(ParseOutcome::Complete) => {}
            Ok(ParseOutcome::Help) => {
                let program = self.program_name().unwrap_or_default().to_string();
                self.write_usage(&mut io::stderr().lock(), &program).ok();
                std::process::exit(ExitStatus::Success.code());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(ExitStatus::Error.code());
            }
        }
    }

    fn help_requested(&self) -> bool {
        self.help
            .as_ref()
            .and_then(|handle| self.get(handle))
            .copied()
            .unwrap_or(false)
    }
}

fn validate_flag(flag: &str) -> Result<()> {
    if flag.is_empty() || flag.chars().any(char::is_whitespace) {
        return Err(ArgError::InvalidFlag(flag.to_string()));
    }
    Ok(())
}
