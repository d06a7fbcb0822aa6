// Copyright @yucwang 2026

use std::fs;
use std::path::Path;

use wavefront_obj::{obj, ParseError};
use std::fmt;

#[derive(Debug)]
pub enum ObjLoadError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl From<std::io::Error> for ObjLoadError {
    fn from(err: std::io::Error) -> Self {
        ObjLoadError::Io(err)
    }
}

impl From<ParseError> for ObjLoadError {
    fn from(err: ParseError) -> Self {
        ObjLoadError::Parse(err)
    }
}

impl fmt::Display for ObjLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjLoadError::Io(err) => write!(f, "io error: {}", err),
            ObjLoadError::Parse(err) => write!(f, "parse error: {}", err),
        }
    }
}

impl std::error::Error for ObjLoadError {}

pub fn load_obj_from_str(input: &str) -> Result<obj::ObjSet, ObjLoadError> {
    let triangulated = triangulate_faces(input);
    Ok(obj::parse(triangulated)?)
}

pub fn load_obj_from_file<P: AsRef<Path>>(path: P) -> Result<obj::ObjSet, ObjLoadError> {
    let data = fs::read_to_string(path)?;
    load_obj_from_str(&data)
}

// Fan-triangulate polygonal faces so the parser only sees triangles.
fn triangulate_faces(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for line in input.lines() {
        let trimmed = line.trim_start();
        let is_face = trimmed.starts_with("f ") || trimmed.starts_with("f\t");
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if is_face && parts.len() > 4 {
            let base = parts[1];
            for i in 2..(parts.len() - 1) {
                out.push_str("f ");
                out.push_str(base);
                out.push(' ');
                out.push_str(parts[i]);
                out.push(' ');
                out.push_str(parts[i + 1]);
                out.push('\n');
            }
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_triangles() {
        let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let obj_set = load_obj_from_str(input).expect("parse failed");
        assert_eq!(obj_set.objects.len(), 1);
        assert_eq!(obj_set.objects[0].vertices.len(), 3);
    }

    #[test]
    fn test_quad_fan_triangulation() {
        let input = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let obj_set = load_obj_from_str(input).expect("parse failed");
        let mut triangles = 0;
        for object in &obj_set.objects {
            for geom in &object.geometry {
                for shape in &geom.shapes {
                    if let obj::Primitive::Triangle(..) = shape.primitive {
                        triangles += 1;
                    }
                }
            }
        }
        assert_eq!(triangles, 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_obj_from_file("/nonexistent/mesh.obj");
        match result {
            Err(ObjLoadError::Io(_)) => {}
            _ => panic!("expected an io error"),
        }
    }
}
