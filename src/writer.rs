use crate::record::Record;
use std::io;

#[derive(Debug)]
pub struct Writer<W: io::Write> {
    wtr: W,
}

impl<W: io::Write> Writer<W> {
    pub fn new(wtr: W) -> Writer<W> {
        Writer { wtr }
    }

    pub fn write_record(&mut self, record: &Record) -> io::Result<()> {
        write!(self.wtr, "{}", record)
    }

    pub fn write_records<'a, I>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.wtr.flush()
    }

    pub fn into_inner(self) -> W {
        self.wtr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_records_in_order() {
        let mut writer = Writer::new(Vec::new());
        let records = vec![Record::new("a", 1), Record::new("b", -2)];
        writer.write_records(&records).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "key a\n value 1\nkey b\n value -2\n");
    }

    #[test]
    fn same_record_twice_gives_same_text() {
        let record = Record::new("", 0);
        let mut writer = Writer::new(Vec::new());
        writer.write_record(&record).unwrap();
        writer.write_record(&record).unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "key \n value 0\nkey \n value 0\n");
        assert_eq!(record, Record::new("", 0));
    }
}
