use std::io;

use csv::WriterBuilder;

use crate::account::AccountSnapshot;

/// Writes one CSV row per snapshot, with a `kind,number,holder,opened,balance` header.
pub fn write_statement<W, I>(writer: W, snapshots: I) -> Result<(), csv::Error>
where
    W: io::Write,
    I: IntoIterator<Item = AccountSnapshot>,
{
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for snapshot in snapshots {
        writer.serialize(snapshot)?;
    }
    writer.flush()?;
    Ok(())
}
