use std::fmt;

use smallvec::SmallVec;

use super::{MeshError, Options, Result};

/// A vertex position, components kept as their source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex<'a>(pub [&'a str; 3]);

/// A texture coordinate, components kept as their source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexCoord<'a>(pub [&'a str; 2]);

/// Zero-based position indices of a single face.
pub type FaceIndexGroup = SmallVec<[i64; 3]>;

/// Records of one OBJ file, in order of appearance.
/// Vertex and texture components borrow from the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshDocument<'a> {
    pub vertices: Vec<Vertex<'a>>,
    pub faces: Vec<FaceIndexGroup>,
    pub tex_coords: Vec<TexCoord<'a>>,
}

impl<'a> MeshDocument<'a> {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    pub fn num_tex_coords(&self) -> usize {
        self.tex_coords.len()
    }
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
    /// Length of the flattened index run.
    pub fn num_indices(&self) -> usize {
        self.faces.iter().map(|f| f.len()).sum()
    }
    /// All face indices, flattened in order.
    pub fn indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.faces.iter().flat_map(|f| f.iter().copied())
    }
}

/// Takes the first `N` fields of a record, ignoring any extra.
fn leading<'a, const N: usize>(
    line: usize,
    tag: &str,
    fields: &[&'a str],
) -> Result<[&'a str; N]> {
    match fields.get(..N) {
        Some(f) => Ok(std::array::from_fn(|i| f[i])),
        None => Err(MeshError::malformed(
            line,
            tag,
            format!("expected {} fields, found {}", N, fields.len()),
        )),
    }
}

fn parse_face(line: usize, fields: &[&str], opts: &Options) -> Result<FaceIndexGroup> {
    if opts.triangles_only && fields.len() != 3 {
        return Err(MeshError::malformed(
            line,
            "f",
            format!("expected a triangle, found {} vertices", fields.len()),
        ));
    }
    fields
        .iter()
        .map(|field| {
            // position/texture/normal, only the position is kept
            let pos = field.split('/').next().unwrap_or_default();
            let i = pos.parse::<i64>().map_err(|e| {
                MeshError::malformed(line, "f", format!("invalid vertex index `{pos}`: {e}"))
            })?;
            i.checked_sub(1).ok_or_else(|| {
                MeshError::malformed(line, "f", format!("vertex index `{pos}` out of range"))
            })
        })
        .collect()
}

/// Every character which ends a line, `\r\n` counts as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits `text` into lines on any of [`LINE_BREAKS`].
/// A trailing break does not produce an empty last line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(i) = rest.find(LINE_BREAKS) else {
            return Some(std::mem::take(&mut rest));
        };
        let (line, brk) = rest.split_at(i);
        let len = if brk.starts_with("\r\n") {
            2
        } else {
            brk.chars().next().map_or(1, char::len_utf8)
        };
        rest = &brk[len..];
        Some(line)
    })
}

/// Reads the `v`, `vt` and `f` records of `text`. Every other record is skipped.
pub fn parse<'a>(text: &'a str, opts: &Options) -> Result<MeshDocument<'a>> {
    let mut doc = MeshDocument::default();
    for (i, l) in split_lines(text).enumerate() {
        let line = i + 1;
        let mut tokens = l.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };
        let fields = tokens.collect::<SmallVec<[&str; 4]>>();
        match tag {
            "v" => doc.vertices.push(Vertex(leading(line, tag, &fields)?)),
            "vt" => doc.tex_coords.push(TexCoord(leading(line, tag, &fields)?)),
            "f" => doc.faces.push(parse_face(line, &fields, opts)?),
            _ => {}
        }
    }
    Ok(doc)
}

impl fmt::Display for MeshDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":Vertices")?;
        for Vertex([x, y, z]) in &self.vertices {
            writeln!(f, "{x} {y} {z}")?;
        }
        writeln!(f, "\n:Indices")?;
        for i in self.indices() {
            write!(f, "{i} ")?;
        }
        writeln!(f, "\n\n:TexCoord")?;
        for TexCoord([u, v]) in &self.tex_coords {
            writeln!(f, "{u} {v}")?;
        }
        writeln!(f, "\n:Color")
    }
}

/// Converts OBJ text into `.mesh` text, accepting faces of any size.
pub fn convert(text: &str) -> Result<String> {
    convert_with(text, &Options::default())
}

pub fn convert_with(text: &str, opts: &Options) -> Result<String> {
    Ok(parse(text, opts)?.to_string())
}
