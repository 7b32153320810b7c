//! CSV loading and writing for hotspot reference data, stream events, and
//! detected visits.
//!
//! This module is the validation boundary: records with non-finite
//! coordinates are rejected here with [`NearspotError::InvalidInput`] and
//! never reach the index.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NearspotError, Result};
use crate::types::{Hotspot, StreamEvent, Visit};

/// Raw hotspot CSV row: `id,name,x,y,category`.
#[derive(Debug, Deserialize)]
struct HotspotRecord {
    id: String,
    name: String,
    x: f64,
    y: f64,
    category: String,
}

/// Raw stream CSV row. The stream id column has an empty header in the
/// source data, hence the rename.
#[derive(Debug, Deserialize)]
struct StreamRecord {
    #[serde(rename = "")]
    stream_id: String,
    x: f64,
    y: f64,
    time_stamp: String,
}

fn check_finite(x: f64, y: f64, what: &str, row: usize) -> Result<()> {
    if !x.is_finite() || !y.is_finite() {
        log::warn!("Rejecting {what} record {row} with non-finite coordinates ({x}, {y})");
        return Err(NearspotError::InvalidInput(format!(
            "{what} record {row} has non-finite coordinates ({x}, {y})"
        )));
    }
    Ok(())
}

/// Load the hotspot reference set from a CSV file.
///
/// Expects a header row `id,name,x,y,category`. Coordinates must be finite
/// numbers; the first malformed record fails the whole load.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a record does not match the
/// expected shape, or a coordinate is non-finite.
pub fn load_hotspots<P: AsRef<Path>>(path: P) -> Result<Vec<Hotspot>> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut hotspots = Vec::new();
    for (row, record) in reader.deserialize().enumerate() {
        let record: HotspotRecord = record?;
        check_finite(record.x, record.y, "hotspot", row)?;
        hotspots.push(Hotspot::new(
            record.id,
            record.name,
            record.category,
            record.x,
            record.y,
        ));
    }

    log::info!(
        "Loaded {} hotspots from {}",
        hotspots.len(),
        path.as_ref().display()
    );
    Ok(hotspots)
}

/// Load a sequence of stream events from a CSV file.
///
/// Expects a header row `,x,y,time_stamp`; the stream identifier lives in
/// the unnamed leading column, matching the raw export format.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a record does not match the
/// expected shape, or a coordinate is non-finite.
pub fn load_stream_events<P: AsRef<Path>>(path: P) -> Result<Vec<StreamEvent>> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut events = Vec::new();
    for (row, record) in reader.deserialize().enumerate() {
        let record: StreamRecord = record?;
        check_finite(record.x, record.y, "stream", row)?;
        events.push(StreamEvent::new(
            record.stream_id,
            record.x,
            record.y,
            record.time_stamp,
        ));
    }

    log::info!(
        "Loaded {} stream events from {}",
        events.len(),
        path.as_ref().display()
    );
    Ok(events)
}

/// Serialized visit row with the output header `hotspot_id,stream_id,time_of_visit`.
#[derive(Debug, Serialize)]
struct VisitRecord<'a> {
    hotspot_id: &'a str,
    stream_id: &'a str,
    time_of_visit: &'a str,
}

/// Incremental CSV writer for detected visits.
///
/// # Examples
///
/// ```no_run
/// use nearspot::{Visit, storage::VisitWriter};
///
/// let mut writer = VisitWriter::from_path("outputs/hotspot_visit_data.csv")?;
/// writer.write(&Visit {
///     hotspot_id: "H1".into(),
///     stream_id: "S9".into(),
///     time_of_visit: "2021-03-01 10:00:00".into(),
/// })?;
/// writer.flush()?;
/// # Ok::<(), nearspot::NearspotError>(())
/// ```
pub struct VisitWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl VisitWriter<BufWriter<File>> {
    /// Create a writer targeting a file path, truncating any existing file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> VisitWriter<W> {
    /// Wrap any `Write` target. The header row is emitted with the first
    /// record.
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    /// Append one visit row.
    pub fn write(&mut self, visit: &Visit) -> Result<()> {
        self.writer.serialize(VisitRecord {
            hotspot_id: &visit.hotspot_id,
            stream_id: &visit.stream_id,
            time_of_visit: &visit.time_of_visit,
        })?;
        Ok(())
    }

    /// Flush buffered rows to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a batch of visits to a CSV file in one call.
pub fn write_visits<P: AsRef<Path>>(path: P, visits: &[Visit]) -> Result<()> {
    let mut writer = VisitWriter::from_path(path.as_ref())?;
    for visit in visits {
        writer.write(visit)?;
    }
    writer.flush()?;
    log::info!(
        "Wrote {} visits to {}",
        visits.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_hotspots() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,name,x,y,category").unwrap();
        writeln!(file, "H1,Corner Cafe,0,0,food").unwrap();
        writeln!(file, "H2,City Park,10,10,leisure").unwrap();
        file.flush().unwrap();

        let hotspots = load_hotspots(file.path()).unwrap();
        assert_eq!(hotspots.len(), 2);
        assert_eq!(hotspots[0].id, "H1");
        assert_eq!(hotspots[0].location.x(), 0.0);
        assert_eq!(hotspots[1].category, "leisure");
    }

    #[test]
    fn test_load_stream_events_unnamed_id_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ",x,y,time_stamp").unwrap();
        writeln!(file, "S1,1,1,2021-03-01 10:00:00").unwrap();
        writeln!(file, "S2,20,20,2021-03-01 10:05:00").unwrap();
        file.flush().unwrap();

        let events = load_stream_events(file.path()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].stream_id, "S1");
        assert_eq!(events[1].location.y(), 20.0);
        assert_eq!(events[1].timestamp, "2021-03-01 10:05:00");
    }

    #[test]
    fn test_load_hotspots_rejects_non_finite() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,name,x,y,category").unwrap();
        writeln!(file, "H1,Bad,NaN,0,food").unwrap();
        file.flush().unwrap();

        let err = load_hotspots(file.path()).unwrap_err();
        assert!(matches!(err, NearspotError::InvalidInput(_)));
    }

    #[test]
    fn test_load_hotspots_rejects_missing_field() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,name,x,y,category").unwrap();
        writeln!(file, "H1,Broken,1.0").unwrap();
        file.flush().unwrap();

        assert!(matches!(
            load_hotspots(file.path()),
            Err(NearspotError::Csv(_))
        ));
    }

    #[test]
    fn test_load_hotspots_empty_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,name,x,y,category").unwrap();
        file.flush().unwrap();

        let hotspots = load_hotspots(file.path()).unwrap();
        assert!(hotspots.is_empty());
    }

    #[test]
    fn test_write_visits_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let visits = vec![
            Visit {
                hotspot_id: "H1".into(),
                stream_id: "S1".into(),
                time_of_visit: "2021-03-01 10:00:00".into(),
            },
            Visit {
                hotspot_id: "H2".into(),
                stream_id: "S2".into(),
                time_of_visit: "2021-03-01 10:05:00".into(),
            },
        ];
        write_visits(file.path(), &visits).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("hotspot_id,stream_id,time_of_visit"));
        assert_eq!(lines.next(), Some("H1,S1,2021-03-01 10:00:00"));
        assert_eq!(lines.next(), Some("H2,S2,2021-03-01 10:05:00"));
    }
}
