#[macro_use]
extern crate failure;

pub mod logging;
mod record;
mod writer;

pub use crate::record::Record;
pub use crate::writer::Writer;
use std::io;
use std::result;
use tracing::debug;

pub type Result<T> = result::Result<T, RecordError>;

#[derive(Fail, Debug)]
pub enum RecordError {
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),
    #[fail(display = "invalid value: {}", _0)]
    InvalidValue(String),
}

impl From<io::Error> for RecordError {
    fn from(err: io::Error) -> RecordError {
        RecordError::Io(err)
    }
}

/// The three records the demo prints: a default one, an explicit one and
/// a copy of the explicit one.
pub fn canonical_records() -> [Record; 3] {
    let first = Record::default();
    let second = Record::new("sumeet", 2);
    let third = Record::copy_of(&second);
    [first, second, third]
}

pub fn run_demo<W: io::Write>(out: W) -> Result<()> {
    let mut writer = Writer::new(out);
    let records = canonical_records();
    for record in records.iter() {
        debug!(name = record.name(), value = record.value(), "rendering record");
    }
    writer.write_records(records.iter())?;
    writer.flush()?;
    Ok(())
}

/// Parses a `show` value argument. Any `i32` is accepted.
pub fn parse_value(raw: &str) -> Result<i32> {
    raw.parse()
        .map_err(|_| RecordError::InvalidValue(raw.to_string()))
}
