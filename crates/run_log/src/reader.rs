//! CSV reader for deployment run logs.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use kinematics::JointPositions;
use nalgebra::vector;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::RunRecord;
use crate::time::{TimeWindow, parse_wall_time};

/// Locate a numbered column group `prefix_0..prefix_N`, or `None` if any
/// member is missing.
fn find_group<const N: usize>(headers: &StringRecord, prefix: &str) -> Option<[usize; N]> {
    let mut indices = [0usize; N];
    for (i, slot) in indices.iter_mut().enumerate() {
        let name = format!("{prefix}_{i}");
        *slot = headers.iter().position(|header| header == name)?;
    }
    Some(indices)
}

/// Indices of the columns this crate understands, located once from the
/// header row. The logger writes columns in insertion order, so position is
/// meaningless and only names count.
#[derive(Debug)]
struct Columns {
    wall_time: usize,
    joints: [usize; 12],
    foot_forces: Option<[usize; 4]>,
    odom_pos: Option<[usize; 3]>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let wall_time = headers
            .iter()
            .position(|header| header == "wall_time")
            .ok_or_else(|| Error::MissingColumn {
                name: "wall_time".to_owned(),
            })?;

        let mut joints = [0usize; 12];
        for (i, slot) in joints.iter_mut().enumerate() {
            let name = format!("q_{i}");
            *slot = headers
                .iter()
                .position(|header| header == name)
                .ok_or(Error::MissingColumn { name })?;
        }

        let foot_forces = find_group(headers, "foot_force");
        if foot_forces.is_none() {
            warn!("log has no foot_force columns, contact analysis unavailable");
        }

        let odom_pos = find_group(headers, "odom_pos");
        if odom_pos.is_none() {
            warn!("log has no odom_pos columns, odometry analysis unavailable");
        }

        Ok(Self {
            wall_time,
            joints,
            foot_forces,
            odom_pos,
        })
    }

    /// Highest column index any parsed field lives at.
    fn max_index(&self) -> usize {
        self.joints
            .iter()
            .chain(self.foot_forces.iter().flatten())
            .chain(self.odom_pos.iter().flatten())
            .copied()
            .fold(self.wall_time, usize::max)
    }
}

fn parse_field(
    record: &StringRecord,
    headers: &StringRecord,
    row: usize,
    index: usize,
) -> Result<f32> {
    let value = record.get(index).unwrap_or_default();
    value.parse().map_err(|_| Error::BadNumber {
        row,
        column: headers.get(index).unwrap_or_default().to_owned(),
        value: value.to_owned(),
    })
}

/// Read a run log, keeping only records whose wall time falls inside `window`.
///
/// Records are returned in file order. Logs without `foot_force_*` or
/// `odom_pos_*` columns still load; the corresponding fields are `None`.
/// A missing `wall_time` or `q_*` column, a short row, or an unparsable
/// number is an error.
pub fn read_log(path: impl AsRef<Path>, window: TimeWindow) -> Result<Vec<RunRecord>> {
    let file = File::open(path.as_ref())?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers)?;
    let expected = columns.max_index() + 1;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < expected {
            return Err(Error::ShortRow {
                row,
                expected,
                found: record.len(),
            });
        }

        let wall_time = parse_wall_time(record.get(columns.wall_time).unwrap_or_default())?;
        if !window.contains(wall_time) {
            continue;
        }

        let mut angles = [0.0f32; 12];
        for (slot, &index) in angles.iter_mut().zip(&columns.joints) {
            *slot = parse_field(&record, &headers, row, index)?;
        }

        let foot_forces = match columns.foot_forces {
            Some(indices) => {
                let mut forces = [0.0f32; 4];
                for (slot, &index) in forces.iter_mut().zip(&indices) {
                    *slot = parse_field(&record, &headers, row, index)?;
                }
                Some(forces)
            }
            None => None,
        };

        let odom_pos = match columns.odom_pos {
            Some([x, y, z]) => Some(vector![
                parse_field(&record, &headers, row, x)?,
                parse_field(&record, &headers, row, y)?,
                parse_field(&record, &headers, row, z)?
            ]),
            None => None,
        };

        records.push(RunRecord {
            wall_time,
            joints: JointPositions(angles),
            foot_forces,
            odom_pos,
        });
    }

    debug!(count = records.len(), "loaded run log");
    Ok(records)
}
