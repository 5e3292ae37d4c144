use crate::Result;
use std::path::Path;

/// Read an `(x, y)` series from a CSV file.
///
/// The first row is a header; every following row holds an x and a y value.
pub fn read_series_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for row in reader.deserialize::<(f64, f64)>() {
        let (x, y) = row?;
        xs.push(x);
        ys.push(y);
    }

    log::debug!(
        "Read {} points from {}",
        xs.len(),
        path.as_ref().display()
    );
    Ok((xs, ys))
}
