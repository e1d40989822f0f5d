use std::io::Write;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::data::traces::Trace;
use crate::error::{PlotterError, Result};

/// Write traces as CSV: an `x` column followed by one column per trace.
///
/// Traces share their x-values, so the x of the first trace is used for every
/// line. Non-finite values are written as empty cells.
pub fn write_traces_csv<W: Write>(writer: W, traces: &[Trace]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    let mut header = vec!["x".to_string()];
    header.extend(traces.iter().map(|t| t.name.clone()));
    w.write_record(&header)?;

    let rows = traces.first().map_or(0, Trace::len);
    for i in 0..rows {
        let mut record = Vec::with_capacity(traces.len() + 1);
        record.push(format_value(traces[0].x[i]));
        for tr in traces {
            record.push(tr.y.get(i).copied().map_or_else(String::new, format_value));
        }
        w.write_record(&record)?;
    }
    w.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn save_traces_csv(path: &Path, traces: &[Trace]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| PlotterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_traces_csv(file, traces)
}

/// Encode a viewport screenshot as PNG (format chosen by the file extension).
pub fn save_screenshot(image: &egui::ColorImage, path: &Path) -> Result<()> {
    let [w, h] = image.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let p = image.pixels[y * w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    out.save(path).map_err(|source| PlotterError::Image {
        path: path.to_path_buf(),
        source,
    })
}

fn format_value(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        String::new()
    }
}
