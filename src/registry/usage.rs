//! Usage listing

use std::io::{self, Write};

use super::Registry;

impl Registry<'_> {
    /// Write the usage listing for every registered option.
    ///
    /// Format: `usage: <program>` followed by one
    /// `\t<flag> <<description>>: <current value>` line per option, sorted by
    /// flag.
    pub fn write_usage<W: Write>(&self, out: &mut W, program_name: &str) -> io::Result<()> {
        writeln!(out, "usage: {}", program_name)?;
        for (flag, entry) in &self.entries {
            writeln!(out, "\t{} <{}>: {}", flag, entry.description, entry.binding)?;
        }
        out.flush()
    }

    /// Usage listing as a string
    pub fn usage(&self, program_name: &str) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        self.write_usage(&mut buf, program_name).ok();
        String::from_utf8_lossy(&buf).into_owned()
    }
}
