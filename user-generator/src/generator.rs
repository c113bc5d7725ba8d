use std::io;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use log::{debug, info};

use crate::error::GenError;
use crate::user::{EmailFormat, NameSet, UserRecord, HEADER};

/// Default destination, relative to the working directory
pub const DEFAULT_FILENAME: &str = "registration-users.csv";

/// Default number of users when none is requested
pub const DEFAULT_COUNT: u64 = 100;

/// Builds registration rows for indices `1..=count`.
///
/// Output is fully determined by the name set, the email format and the count,
/// so two runs with the same [`EmailFormat`] produce identical files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generator {
    names: NameSet,
    email_format: EmailFormat,
}

impl Generator {
    #[must_use]
    pub fn new(names: NameSet, email_format: EmailFormat) -> Self {
        Generator {
            names,
            email_format,
        }
    }

    /// The record at `index`. Indices are 1-based when coming from [`Generator::records`].
    #[must_use]
    pub fn record(&self, index: u64) -> UserRecord {
        UserRecord::new(index, self.names, self.email_format)
    }

    /// Lazily yields `count` records, starting at index 1
    pub fn records(&self, count: u64) -> impl Iterator<Item = UserRecord> + '_ {
        (1..=count).map(move |i| self.record(i))
    }

    /// Writes the header followed by `count` rows, returning the number of rows written.
    ///
    /// The header is written even when `count` is zero. Rows end in `\r\n`.
    ///
    /// # Errors
    /// Errors when the underlying writer fails or a record cannot be serialized
    pub fn write_csv<W: io::Write>(&self, count: u64, writer: W) -> Result<u64, GenError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(writer);
        writer.write_record(HEADER)?;

        let mut written = 0;
        for record in self.records(count) {
            writer.serialize(&record)?;
            written += 1;
        }
        writer.flush()?;
        debug!("Wrote {} records", written);

        Ok(written)
    }

    /// Creates (or truncates) the file at `path` and fills it with `count` users.
    ///
    /// The file is closed before returning, whether or not writing succeeded.
    ///
    /// # Errors
    /// Errors when the file cannot be created or written
    pub fn generate<P: AsRef<Path>>(&self, count: u64, path: P) -> Result<u64, GenError> {
        let path = path.as_ref();
        info!(
            "Generating {} users ({} names, {:?} emails) into {}",
            count,
            self.names,
            self.email_format,
            path.display()
        );
        let file = std::fs::File::create(path)?;
        self.write_csv(count, io::BufWriter::new(file))
    }
}

/// Generates `count` users into `path` with the default name set and plain emails
///
/// # Errors
/// See [`Generator::generate`]
pub fn generate<P: AsRef<Path>>(count: u64, path: P) -> Result<u64, GenError> {
    Generator::default().generate(count, path)
}
