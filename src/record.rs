use std::fmt;

/// A name paired with an integer value.
///
/// Every construction path leaves both fields initialized, and a record
/// never changes after it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    value: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Record {
            name: name.into(),
            value,
        }
    }

    /// Builds an independent record holding the same fields as `other`.
    pub fn copy_of(other: &Record) -> Self {
        Record {
            name: other.name.clone(),
            value: other.value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Prints the record to stdout in its two-line form.
    pub fn render(&self) {
        print!("{}", self);
    }
}

impl Default for Record {
    fn default() -> Self {
        Record {
            name: "null".to_string(),
            value: -1,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "key {}", self.name)?;
        writeln!(f, " value {}", self.value)
    }
}
