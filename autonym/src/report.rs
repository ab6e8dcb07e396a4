use crate::code::Code;
use std::io::{self, Write};

/// A code whose autonym differs from the code itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: Code,
    pub autonym: String,
}

impl Entry {
    pub fn new(code: Code, autonym: String) -> Self {
        Self { code, autonym }
    }
}

pub trait ReportSink {
    fn add(&mut self, entry: &Entry) -> io::Result<()>;
}

/// Put between the code and its autonym.
pub const SEPARATOR: &str = " ";

/// Writes each entry as a `<code> <autonym>` line as soon as it arrives.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ReportWriter<W> {
    fn add(&mut self, entry: &Entry) -> io::Result<()> {
        writeln!(self.out, "{}{SEPARATOR}{}", entry.code, entry.autonym)
    }
}

/// Keeps entries in memory; mostly useful for comparing runs.
#[derive(Debug, Default)]
pub struct EntryBag {
    entries: Vec<Entry>,
}

impl EntryBag {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl ReportSink for EntryBag {
    fn add(&mut self, entry: &Entry) -> io::Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
