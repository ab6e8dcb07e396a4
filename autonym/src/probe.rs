use crate::AResult;
use crate::code::{Code, codes};
use crate::lookup::{LanguageInfo, Lookup};
use crate::report::{Entry, ReportSink, ReportWriter};
use log::{debug, info, warn};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub visited: usize,
    pub emitted: usize,
}

/// Runs every two-letter code through a lookup and reports the ones whose
/// autonym is not just the code again.
#[derive(Debug)]
pub struct Probe<L> {
    lookup: L,
}

impl<L: Lookup> Probe<L> {
    pub fn new(lookup: L) -> Self {
        Probe { lookup }
    }

    pub fn entry_for(&self, code: Code) -> AResult<Option<Entry>> {
        let autonym = self.lookup.lookup(code.as_str())?.autonym();

        if code == *autonym {
            return Ok(None);
        }

        Ok(Some(Entry::new(code, autonym)))
    }

    /// Stops at the first failing lookup; entries already handed to `sink` stay there.
    pub fn run(&self, sink: &mut impl ReportSink) -> AResult<Summary> {
        let mut summary = Summary::default();

        for code in codes() {
            summary.visited += 1;

            if let Some(entry) = self.entry_for(code)? {
                debug!("{code}: {}", entry.autonym);
                sink.add(&entry)?;
                summary.emitted += 1;
            }
        }

        Ok(summary)
    }

    /// Runs the probe and writes the report lines to `out`.
    ///
    /// Lines are flushed even when a lookup fails. A lookup error wins over a
    /// flush error.
    pub fn write_to(&self, out: impl Write) -> AResult<Summary> {
        let mut writer = ReportWriter::new(out);
        let result = self.run(&mut writer);
        let flushed = writer.flush();

        let summary = match result {
            Ok(summary) => summary,
            Err(err) => {
                if let Err(flush_err) = flushed {
                    warn!("flushing the report failed: {flush_err}");
                }
                return Err(err);
            }
        };
        flushed?;

        info!("{} codes probed, {} with an autonym", summary.visited, summary.emitted);
        Ok(summary)
    }
}
