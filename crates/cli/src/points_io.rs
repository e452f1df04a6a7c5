//! Candidate point files: JSON (`[[x, y], …]` or `[{"x":…, "y":…}, …]`) and CSV (`x`,`y` columns).

use anyhow::{bail, Context, Result};
use cornerquad::quad::PointSet;
use cornerquad::Vec2;
use polars::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRecord {
    Pair([f64; 2]),
    Xy { x: f64, y: f64 },
}

impl PointRecord {
    fn to_vec2(&self) -> Vec2<f64> {
        match *self {
            PointRecord::Pair([x, y]) => Vec2::new(x, y),
            PointRecord::Xy { x, y } => Vec2::new(x, y),
        }
    }
}

/// Load candidates in file order (the first row becomes the anchor).
pub fn read_points(path: &Path) -> Result<PointSet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let pts = match ext.as_deref() {
        Some("json") => read_json(path)?,
        Some("csv") => read_csv(path)?,
        _ => bail!("unsupported point file {} (expected .json or .csv)", path.display()),
    };
    PointSet::new(pts).with_context(|| format!("validating points from {}", path.display()))
}

fn read_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<PointRecord> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as a point list", path.display()))?;
    Ok(records.iter().map(PointRecord::to_vec2).collect())
}

fn read_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Vec2::new(x, y)).collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    let mut out = Vec::with_capacity(values.len());
    for (row, v) in values.into_iter().enumerate() {
        match v {
            Some(v) => out.push(v),
            None => bail!("null in column `{name}` at row {row}"),
        }
    }
    Ok(out)
}

/// Write points as a two-column CSV (`x`,`y`).
pub fn write_points_csv(path: &Path, pts: &PointSet) -> Result<()> {
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_accepts_pairs_and_objects() {
        let dir = tempdir().unwrap();
        let pairs = dir.path().join("pairs.json");
        fs::write(&pairs, "[[0, 0], [10.5, 2]]").unwrap();
        let objs = dir.path().join("objs.json");
        fs::write(&objs, r#"[{"x": 0, "y": 0}, {"x": 10.5, "y": 2}]"#).unwrap();
        let a = read_points(&pairs).unwrap();
        let b = read_points(&objs).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice()[1], Vec2::new(10.5, 2.0));
    }

    #[test]
    fn csv_round_trip_keeps_scan_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        let pts = PointSet::from_pixels([(3, 0), (1, 2), (7, 9)]);
        write_points_csv(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn csv_without_y_column_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n1,2\n3,4\n").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing column `y`"));
    }

    #[test]
    fn unknown_extension_rejected() {
        assert!(read_points(Path::new("points.txt")).is_err());
    }
}
