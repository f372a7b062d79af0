//! CSV export of match records.

use crate::models::Schedule;
use std::io;

const HEADER: [&str; 7] = [
    "schedule_id",
    "round_number",
    "court",
    "player1_id",
    "player1_name",
    "player2_id",
    "player2_name",
];

/// Write one CSV row per match (header always included, even for an empty schedule).
pub fn write_match_records<W: io::Write>(schedule: &Schedule, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in schedule.records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// The CSV export as an in-memory buffer.
pub fn match_records_csv(schedule: &Schedule) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    write_match_records(schedule, &mut buf)?;
    Ok(buf)
}
