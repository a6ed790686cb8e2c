//! Object File Format (OFF) reader and writer.
//!
//! <http://www.geomview.org/docs/html/OFF.html>

use crate::errors::{Error, ErrorPolicy, LogCategory, report_error};
use crate::float_types::Real;
use crate::io::FileFormat;
use crate::mesh::Geometry;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

/// ASCII OFF, vertex positions only.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffFormat;

impl<S: Clone> FileFormat<S> for OffFormat {
    fn id(&self) -> &'static str {
        "OFF"
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("off"))
    }

    fn read_geometry(&self, reader: &mut dyn BufRead) -> Geometry<S> {
        match parse(reader) {
            Ok(polygons) => Geometry::from_polygons(polygons),
            Err(error) => {
                report_error(LogCategory::Io, &error, "could not read OFF data", ErrorPolicy::Fail);
                Geometry::from_error(error)
            },
        }
    }

    fn write_geometry(&self, geometry: &Geometry<S>, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write_all(geometry.to_off().as_bytes())?;
        Ok(())
    }
}

impl<S: Clone> Geometry<S> {
    /// Export to an OFF string.
    ///
    /// Vertices are shared between faces when their positions are bitwise
    /// equal, and listed in order of first use. Normals are not written.
    ///
    /// ```rust
    /// # use bspcsg::mesh::Geometry;
    /// # use nalgebra::Point3;
    /// let off = Geometry::<()>::cube(Point3::origin(), 1.0).to_off();
    /// assert!(off.starts_with("OFF\n8 6 0\n"));
    /// ```
    pub fn to_off(&self) -> String {
        let mut positions: Vec<Point3<Real>> = Vec::new();
        let mut index_of = HashMap::new();
        let mut faces: Vec<Vec<usize>> = Vec::with_capacity(self.polygons().len());

        for polygon in self.polygons() {
            let face = polygon
                .vertices
                .iter()
                .map(|v| {
                    *index_of.entry(v.pos.coords.map(Real::to_bits)).or_insert_with(|| {
                        positions.push(v.pos);
                        positions.len() - 1
                    })
                })
                .collect();
            faces.push(face);
        }

        let mut out = String::new();
        out.push_str("OFF\n");
        out.push_str(&format!("{} {} 0\n", positions.len(), faces.len()));
        for p in &positions {
            out.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
        }
        for face in &faces {
            out.push_str(&face.len().to_string());
            for index in face {
                out.push_str(&format!(" {index}"));
            }
            out.push('\n');
        }
        out
    }

    /// Parse an OFF string. Failures are reported through [`Geometry::error`].
    pub fn from_off(text: &str) -> Self {
        FileFormat::<S>::read_geometry(&OffFormat, &mut text.as_bytes())
    }
}

enum State {
    Magic,
    Header,
    Vertices { remaining: usize, faces: usize },
    Faces { remaining: usize },
}

fn malformed(line: usize, message: impl Into<String>) -> Error {
    Error::FileFormat {
        line,
        message: message.into(),
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, line: usize, what: &str) -> Result<T, Error> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| malformed(line, format!("invalid {what}")))
}

fn parse<S: Clone>(reader: &mut dyn BufRead) -> Result<Vec<Polygon<S>>, Error> {
    let mut state = State::Magic;
    let mut positions: Vec<Point3<Real>> = Vec::new();
    let mut polygons = Vec::new();
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();

        state = match state {
            State::Magic => {
                if line != "OFF" {
                    return Err(Error::NotSupported(format!(
                        "expected an OFF header, found {line:?}"
                    )));
                }
                State::Header
            },
            State::Header => {
                let vertex_count: usize = parse_field(fields.next(), line_number, "vertex count")?;
                let face_count: usize = parse_field(fields.next(), line_number, "face count")?;
                if face_count == 0 {
                    return Ok(polygons);
                }
                positions.reserve(vertex_count);
                polygons.reserve(face_count);
                if vertex_count == 0 {
                    State::Faces { remaining: face_count }
                } else {
                    State::Vertices {
                        remaining: vertex_count,
                        faces: face_count,
                    }
                }
            },
            State::Vertices { remaining, faces } => {
                let x: Real = parse_field(fields.next(), line_number, "vertex")?;
                let y: Real = parse_field(fields.next(), line_number, "vertex")?;
                let z: Real = parse_field(fields.next(), line_number, "vertex")?;
                positions.push(Point3::new(x, y, z));

                if remaining == 1 {
                    State::Faces { remaining: faces }
                } else {
                    State::Vertices {
                        remaining: remaining - 1,
                        faces,
                    }
                }
            },
            State::Faces { remaining } => {
                let n: usize = parse_field(fields.next(), line_number, "index count")?;
                if n < 3 {
                    return Err(malformed(line_number, format!("face with {n} vertices")));
                }

                let indices = (0..n)
                    .map(|_| {
                        let index: usize = parse_field(fields.next(), line_number, "index")?;
                        if index < positions.len() {
                            Ok(index)
                        } else {
                            Err(malformed(line_number, format!("index {index} out of range")))
                        }
                    })
                    .collect::<Result<Vec<_>, Error>>()?;

                polygons.push(face(&positions, &indices));

                if remaining == 1 {
                    return Ok(polygons);
                }
                State::Faces { remaining: remaining - 1 }
            },
        };
    }

    Err(malformed(last_line, "unexpected end of file"))
}

/// Polygon for one face. Each vertex gets the normal of the corner it spans
/// with its neighbours.
fn face<S: Clone>(positions: &[Point3<Real>], indices: &[usize]) -> Polygon<S> {
    let n = indices.len();
    let vertices = (0..n)
        .map(|j| {
            let a = positions[indices[(j + n - 1) % n]];
            let b = positions[indices[j]];
            let c = positions[indices[(j + 1) % n]];
            let normal = (b - a)
                .cross(&(c - a))
                .try_normalize(0.0)
                .unwrap_or_else(Vector3::zeros);
            Vertex::new(b, normal)
        })
        .collect();
    Polygon::new(vertices, None)
}
