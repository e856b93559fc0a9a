//! City records and the coordinate-section input format.
//!
//! A [`City`] is an identifier plus a 2D coordinate, immutable once loaded.
//! Identity is the id; ids must be unique within an instance, which
//! [`parse_node_coord_section`] and the runner both enforce so that the
//! variation operators can compare cities by id alone.

use crate::error::{TspError, TspResult};
use std::collections::HashSet;

/// A city in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique identifier within an instance.
    pub id: u32,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city at the given coordinates.
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Euclidean distance between two cities.
///
/// Always finite for finite coordinates; no error conditions.
#[inline]
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Checks that every city id occurs exactly once.
///
/// Called at the boundaries that feed cities into the algorithm, so the
/// id-based membership test in crossover stays sound.
pub(crate) fn validate_unique_ids(cities: &[City]) -> TspResult<()> {
    let mut seen = HashSet::with_capacity(cities.len());
    for city in cities {
        if !seen.insert(city.id) {
            return Err(TspError::InvalidInput(format!(
                "duplicate city id {}",
                city.id
            )));
        }
    }
    Ok(())
}

/// Parses the coordinate section of a TSPLIB-style instance.
///
/// The format is line-oriented: everything before a `NODE_COORD_SECTION`
/// header line is ignored, each following line holds one `id x y` triple,
/// and an `EOF` line terminates the section.
///
/// # Errors
///
/// - [`TspError::InvalidInput`] if the header is missing, no cities follow
///   it, or two cities share an id.
/// - [`TspError::Parse`] for a malformed triple inside the section.
pub fn parse_node_coord_section(input: &str) -> TspResult<Vec<City>> {
    let mut cities = Vec::new();
    let mut in_section = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line == "NODE_COORD_SECTION" {
            in_section = true;
            continue;
        }
        if line == "EOF" {
            break;
        }
        if !in_section || line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(TspError::Parse {
                line: idx + 1,
                message: format!("expected 'id x y', got {} fields", parts.len()),
            });
        }
        let id: u32 = parts[0].parse().map_err(|_| TspError::Parse {
            line: idx + 1,
            message: format!("invalid city id {:?}", parts[0]),
        })?;
        let x: f64 = parts[1].parse().map_err(|_| TspError::Parse {
            line: idx + 1,
            message: format!("invalid x coordinate {:?}", parts[1]),
        })?;
        let y: f64 = parts[2].parse().map_err(|_| TspError::Parse {
            line: idx + 1,
            message: format!("invalid y coordinate {:?}", parts[2]),
        })?;
        if !x.is_finite() || !y.is_finite() {
            return Err(TspError::Parse {
                line: idx + 1,
                message: format!("non-finite coordinate ({x}, {y})"),
            });
        }
        cities.push(City::new(id, x, y));
    }

    if !in_section {
        return Err(TspError::InvalidInput(
            "missing NODE_COORD_SECTION header".into(),
        ));
    }
    if cities.is_empty() {
        return Err(TspError::InvalidInput(
            "coordinate section contains no cities".into(),
        ));
    }
    validate_unique_ids(&cities)?;

    Ok(cities)
}
