use std::io::Read;

use crate::command::CommandKind;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommandRow {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub account: String,
    pub counterpart: Option<String>,
    pub amount: Option<Decimal>,
}

/// Parses a ledger command list in CSV format, yielding each row with its line number.
pub struct CsvCommandParser<R> {
    iter: DeserializeRecordsIntoIter<R, CommandRow>,
}

impl<R> CsvCommandParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvCommandParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<CommandRow>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_rows() {
        let input = "type,account,counterpart,amount\n\
                     create, Id-1 ,,1000\n\
                     transfer,Id-1,Id-2,12.5\n\
                     bogus,Id-1,,1\n";
        let rows: Vec<_> = CsvCommandParser::new(input.as_bytes()).collect();
        assert_eq!(rows.len(), 3);

        let (_, create) = &rows[0];
        let create = create.as_ref().unwrap();
        assert_eq!(create.kind, CommandKind::Create);
        assert_eq!(create.account, "Id-1");
        assert_eq!(create.counterpart, None);
        assert_eq!(create.amount, Some(dec!(1000)));

        let (_, transfer) = &rows[1];
        let transfer = transfer.as_ref().unwrap();
        assert_eq!(transfer.kind, CommandKind::Transfer);
        assert_eq!(transfer.counterpart.as_deref(), Some("Id-2"));
        assert_eq!(transfer.amount, Some(dec!(12.5)));

        assert!(rows[2].1.is_err());
    }
}
