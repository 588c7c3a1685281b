use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::scenario::{Report, Variant};

/// Writer for run results, either as text or as JSON lines.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Write the rendered frame of a run.
    pub fn frame(&mut self, variant: Variant, frame: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Frame,
                    data: Frame {
                        variant,
                        rows: DisplayString(frame),
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{frame}")?;
            }
        }

        Ok(())
    }

    /// Write the summary of a run.
    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Report,
                    data: report,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{report}")?;
            }
        }

        Ok(())
    }

    /// Consume the output, returning the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Frame,
    Report,
}

#[derive(Serialize)]
#[serde(bound = "T: fmt::Display")]
struct Frame<T> {
    variant: Variant,
    rows: DisplayString<T>,
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
