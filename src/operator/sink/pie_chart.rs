use std::f64::consts::PI;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::operator::sink::Sink;
use crate::operator::RankedEntry;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 800.0;
const CENTER_X: f64 = WIDTH / 2.0;
const CENTER_Y: f64 = 440.0;
const RADIUS: f64 = 280.0;
/// Angle of the first wedge edge, in degrees counterclockwise from the positive x axis.
const START_ANGLE: f64 = 140.0;

/// Categorical palette with 20 colours, cycled when there are more wedges.
const PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Draw the ranking as an SVG pie chart.
///
/// Each word gets a wedge proportional to its share of the displayed total, labelled with the
/// word outside the pie and the percentage inside. Wedges are laid out counterclockwise starting
/// at 140 degrees.
#[derive(Debug)]
pub struct PieChartSink<W: Write> {
    writer: W,
}

impl PieChartSink<ChartFile> {
    /// Write the chart to the file at `path`, replacing it if it exists.
    ///
    /// The file is opened when the chart is drawn: if the run fails before reaching the sink an
    /// existing file is left as it is.
    pub fn create(path: impl Into<PathBuf>) -> Self {
        Self::new(ChartFile::new(path))
    }
}

/// A file that is created on the first write.
#[derive(Debug)]
pub struct ChartFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl ChartFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                debug!("Writing pie chart to {}", self.path.display());
                BufWriter::new(File::create(&self.path)?)
            }
        };
        Ok(self.file.insert(file))
    }
}

impl Write for ChartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.file {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<W: Write> PieChartSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for PieChartSink<W> {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        write_svg(&mut self.writer, ranked)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// A slice of the pie, angles in degrees.
#[derive(Debug, Clone, PartialEq)]
struct Wedge {
    start: f64,
    end: f64,
    share: f64,
}

fn wedges(ranked: &[RankedEntry]) -> Vec<Wedge> {
    let total: u64 = ranked.iter().map(|e| e.total).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut angle = START_ANGLE;
    ranked
        .iter()
        .map(|entry| {
            let share = entry.total as f64 / total as f64;
            let wedge = Wedge {
                start: angle,
                end: angle + 360.0 * share,
                share,
            };
            angle = wedge.end;
            wedge
        })
        .collect()
}

/// Point at `angle` degrees and `radius` from the center, in screen coordinates.
fn polar(angle: f64, radius: f64) -> (f64, f64) {
    let rad = angle * PI / 180.0;
    (CENTER_X + radius * rad.cos(), CENTER_Y - radius * rad.sin())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn write_svg(w: &mut impl Write, ranked: &[RankedEntry]) -> std::io::Result<()> {
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    writeln!(w, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        w,
        r#"<text x="{CENTER_X}" y="60" text-anchor="middle" font-family="sans-serif" font-size="22" font-weight="bold">Top {} words by frequency</text>"#,
        ranked.len()
    )?;

    let wedges = wedges(ranked);
    if wedges.is_empty() {
        writeln!(
            w,
            r#"<text x="{CENTER_X}" y="{CENTER_Y}" text-anchor="middle" font-family="sans-serif" font-size="16">No words to display</text>"#
        )?;
    }

    for (i, (entry, wedge)) in ranked.iter().zip(wedges.iter()).enumerate() {
        let colour = PALETTE[i % PALETTE.len()];
        if wedges.len() == 1 {
            writeln!(
                w,
                r#"<circle cx="{CENTER_X}" cy="{CENTER_Y}" r="{RADIUS}" fill="{colour}" stroke="white"/>"#
            )?;
        } else {
            let (x0, y0) = polar(wedge.start, RADIUS);
            let (x1, y1) = polar(wedge.end, RADIUS);
            let large_arc = u8::from(wedge.share > 0.5);
            writeln!(
                w,
                r#"<path d="M {CENTER_X} {CENTER_Y} L {x0:.2} {y0:.2} A {RADIUS} {RADIUS} 0 {large_arc} 0 {x1:.2} {y1:.2} Z" fill="{colour}" stroke="white"/>"#
            )?;
        }

        let middle = (wedge.start + wedge.end) / 2.0;
        let (lx, ly) = polar(middle, RADIUS * 1.1);
        let anchor = if lx >= CENTER_X { "start" } else { "end" };
        writeln!(
            w,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="{anchor}" font-family="sans-serif" font-size="12" font-weight="bold">{}</text>"#,
            escape(&entry.word)
        )?;
        let (px, py) = polar(middle, RADIUS * 0.6);
        writeln!(
            w,
            r#"<text x="{px:.2}" y="{py:.2}" text-anchor="middle" font-family="sans-serif" font-size="12" font-weight="bold">{:.1}%</text>"#,
            wedge.share * 100.0
        )?;
    }
    writeln!(w, "</svg>")
}
