// File: crates/plotter/src/output.rs
// Summary: Writes rendered graphs as PNG files and the computed series as CSV.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use integral_core::Computation;
use plot_core::Series;

pub const FUNCTION_PNG: &str = "function.png";
pub const INTEGRAL_PNG: &str = "integral.png";

/// Write both graphs into `dir` (created if missing). Returns the paths written.
pub fn write_pngs(dir: &Path, function_png: &[u8], integral_png: &[u8]) -> Result<[PathBuf; 2]> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating '{}'", dir.display()))?;
    let f = dir.join(FUNCTION_PNG);
    let i = dir.join(INTEGRAL_PNG);
    std::fs::write(&f, function_png).with_context(|| format!("writing '{}'", f.display()))?;
    std::fs::write(&i, integral_png).with_context(|| format!("writing '{}'", i.display()))?;
    Ok([f, i])
}

/// Long-format CSV: `series,x,y`. A hole in the function curve has an empty `y`.
pub fn write_csv<W: io::Write>(out: W, result: &Computation) -> Result<()> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["series", "x", "y"])?;
    write_series(&mut w, "function", &result.function)?;
    write_series(&mut w, "integral", &result.integral.series)?;
    w.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, result: &Computation) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("creating '{}'", path.display()))?;
    write_csv(io::BufWriter::new(file), result).with_context(|| format!("writing '{}'", path.display()))
}

fn write_series<W: io::Write>(w: &mut csv::Writer<W>, name: &str, series: &Series) -> Result<()> {
    for s in series {
        let y = s.y.map(|v| v.to_string()).unwrap_or_default();
        w.write_record([name, s.x.to_string().as_str(), y.as_str()])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_core::IntegralResult;
    use plot_core::Sample;

    #[test]
    fn csv_has_header_and_blank_holes() {
        let result = Computation {
            function: [Sample::present(0.0, 1.0), Sample::absent(0.5)].into_iter().collect(),
            integral: IntegralResult {
                integral: 0.5,
                series: [Sample::present(0.0, 0.0), Sample::present(1.0, 0.5)].into_iter().collect(),
                shapes: vec![],
            },
        };
        let mut buf = Vec::new();
        write_csv(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "series,x,y\nfunction,0,1\nfunction,0.5,\nintegral,0,0\nintegral,1,0.5\n");
    }
}
