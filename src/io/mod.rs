//! Reading and writing [`Geometry`] files, picking the format by file name.

mod off;

pub use off::OffFormat;

use crate::errors::{Error, ErrorPolicy, LogCategory, report_error};
use crate::mesh::Geometry;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A file format geometry can be read from and written to.
pub trait FileFormat<S: Clone> {
    /// Short name of the format, e.g. `"OFF"`.
    fn id(&self) -> &'static str;

    /// Whether this format handles files named like `path`.
    fn accepts(&self, path: &Path) -> bool;

    /// Read a geometry. Failures are reported through [`Geometry::error`].
    fn read_geometry(&self, reader: &mut dyn BufRead) -> Geometry<S>;

    fn write_geometry(&self, geometry: &Geometry<S>, writer: &mut dyn Write) -> Result<(), Error>;
}

/// Every known file format, in lookup order.
pub fn supported_formats<S: Clone + 'static>() -> Vec<Box<dyn FileFormat<S>>> {
    vec![Box::new(OffFormat)]
}

fn format_for<S: Clone + 'static>(path: &Path) -> Result<Box<dyn FileFormat<S>>, Error> {
    supported_formats()
        .into_iter()
        .find(|format| format.accepts(path))
        .ok_or_else(|| {
            let error = Error::NotSupported(format!("{}: unknown file format", path.display()));
            report_error(LogCategory::Io, &error, "no format for file", ErrorPolicy::Fail);
            error
        })
}

fn file_system_error(path: &Path, error: std::io::Error) -> Error {
    let error = Error::FileSystem(format!("{}: {error}", path.display()));
    report_error(LogCategory::Io, &error, "could not access file", ErrorPolicy::Fail);
    error
}

/// Read the geometry stored at `path`, in the format its name suggests.
pub fn read_geometry<S: Clone + 'static>(path: impl AsRef<Path>) -> Geometry<S> {
    let path = path.as_ref();
    let format = match format_for::<S>(path) {
        Ok(format) => format,
        Err(error) => return Geometry::from_error(error),
    };

    match File::open(path) {
        Ok(file) => {
            tracing::debug!(target: "bspcsg::io", path = %path.display(), format = format.id(), "reading geometry");
            format.read_geometry(&mut BufReader::new(file))
        },
        Err(error) => Geometry::from_error(file_system_error(path, error)),
    }
}

/// Write `geometry` to `path`, in the format its name suggests.
pub fn write_geometry<S: Clone + 'static>(
    geometry: &Geometry<S>,
    path: impl AsRef<Path>,
) -> Result<(), Error> {
    let path = path.as_ref();
    let format = format_for::<S>(path)?;
    let file = File::create(path).map_err(|error| file_system_error(path, error))?;

    tracing::debug!(target: "bspcsg::io", path = %path.display(), format = format.id(), "writing geometry");
    let mut writer = BufWriter::new(file);
    format.write_geometry(geometry, &mut writer)?;
    writer.flush().map_err(|error| file_system_error(path, error))
}
