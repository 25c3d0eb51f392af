//! Parse WKT text into structured geometries.

use geo_types::{
    coord, Coord, Geometry, GeometryCollection, LineString, MultiPoint, Point, Polygon,
};

use super::split::split_members;
use crate::error::{GeoSketchError, Result};

/// Keyword introducing a geometry collection.
const COLLECTION_KEYWORD: &str = "GEOMETRYCOLLECTION";

/// Parse WKT text into zero or more geometries.
///
/// Accepts the playground subset: `POINT`, `LINESTRING`, `POLYGON` with a
/// single outer ring, `MULTIPOINT`, and one flat `GEOMETRYCOLLECTION`.
/// Keywords are case-insensitive and whitespace, including embedded
/// newlines, is collapsed before matching.
///
/// Parsing is permissive end to end: text matching no recognized form
/// yields an empty vector and collection members that fail to parse are
/// dropped, never surfaced as errors. Malformed coordinate content (a
/// non-numeric token, a pair with more or fewer than two tokens) fails the
/// geometry it belongs to instead of producing a NaN coordinate.
pub fn read_wkt(text: &str) -> Vec<Geometry<f64>> {
    let text = normalize_whitespace(text);

    if starts_with_ignore_ascii_case(&text, COLLECTION_KEYWORD) {
        let Some(body) = parenthesized_body(&text[COLLECTION_KEYWORD.len()..]) else {
            return Vec::new();
        };
        let members: Vec<Geometry<f64>> = split_members(body)
            .into_iter()
            .filter_map(parse_geometry)
            .collect();
        return vec![Geometry::GeometryCollection(GeometryCollection(members))];
    }

    parse_geometry(&text).into_iter().collect()
}

/// One production of the WKT subset grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GeometryRule {
    Point,
    LineString,
    Polygon,
    MultiPoint,
}

/// Dispatch order. POINT outranks every later rule: any text containing a
/// decodable `POINT(…)` parses as a point no matter what else it contains.
const RULE_ORDER: [GeometryRule; 4] = [
    GeometryRule::Point,
    GeometryRule::LineString,
    GeometryRule::Polygon,
    GeometryRule::MultiPoint,
];

/// Parse a single, non-collection geometry from normalized text.
///
/// Rules run in [`RULE_ORDER`]; the first whose keyword, parenthesized body,
/// and coordinate decode all succeed wins. A body that fails to decode fails
/// that candidate only, so dispatch keeps scanning. That is what lets
/// `MULTIPOINT(…)` reach its own rule even though its text embeds `POINT(`.
fn parse_geometry(text: &str) -> Option<Geometry<f64>> {
    RULE_ORDER.iter().find_map(|rule| rule.apply(text))
}

impl GeometryRule {
    fn keyword(self) -> &'static str {
        match self {
            GeometryRule::Point => "POINT",
            GeometryRule::LineString => "LINESTRING",
            GeometryRule::Polygon => "POLYGON",
            GeometryRule::MultiPoint => "MULTIPOINT",
        }
    }

    /// Whether the body sits inside a double parenthesis pair.
    fn double_wrapped(self) -> bool {
        matches!(self, GeometryRule::Polygon)
    }

    /// Try the rule against `text`, scanning keyword occurrences left to
    /// right the way an unanchored pattern would.
    fn apply(self, text: &str) -> Option<Geometry<f64>> {
        let keyword = self.keyword();
        let mut from = 0;
        while let Some(at) = find_ignore_ascii_case(text, keyword, from) {
            if let Some(body) = self.capture(&text[at + keyword.len()..]) {
                if let Ok(geometry) = self.decode(body) {
                    return Some(geometry);
                }
            }
            from = at + 1;
        }
        None
    }

    /// Capture the parenthesized body following the keyword.
    ///
    /// Single-wrapped forms capture up to the parenthesis balancing the
    /// opening one, so MULTIPOINT members wrapped in their own parentheses
    /// survive in full. The double-wrapped POLYGON form captures only up to
    /// the first ring's closing parenthesis, so interior rings are silently
    /// discarded.
    fn capture(self, after_keyword: &str) -> Option<&str> {
        let body = if self.double_wrapped() {
            let inner = after_keyword
                .trim_start()
                .strip_prefix('(')?
                .trim_start()
                .strip_prefix('(')?;
            &inner[..inner.find(')')?]
        } else {
            parenthesized_body(after_keyword)?
        };
        if body.trim().is_empty() {
            None
        } else {
            Some(body)
        }
    }

    fn decode(self, body: &str) -> Result<Geometry<f64>> {
        match self {
            GeometryRule::Point => Ok(Geometry::Point(Point::from(decode_pair(body)?))),
            GeometryRule::LineString => {
                Ok(Geometry::LineString(LineString::new(decode_pairs(body)?)))
            }
            GeometryRule::Polygon => Ok(Geometry::Polygon(Polygon::new(
                LineString::new(decode_pairs(body)?),
                vec![],
            ))),
            GeometryRule::MultiPoint => {
                let points = body
                    .split(',')
                    .map(|member| {
                        // Each member may carry its own parentheses, as in
                        // MULTIPOINT((10 40), (40 30)).
                        let bare: String = member
                            .chars()
                            .filter(|ch| *ch != '(' && *ch != ')')
                            .collect();
                        Ok(Point::from(decode_pair(&bare)?))
                    })
                    .collect::<Result<Vec<Point<f64>>>>()?;
                Ok(Geometry::MultiPoint(MultiPoint::new(points)))
            }
        }
    }
}

/// Decode a comma-separated coordinate list.
fn decode_pairs(body: &str) -> Result<Vec<Coord<f64>>> {
    body.split(',').map(decode_pair).collect()
}

/// Decode one `lng lat` pair. Anything but exactly two finite numeric
/// tokens is a decode failure.
fn decode_pair(pair: &str) -> Result<Coord<f64>> {
    let mut tokens = pair.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Ok(coord! { x: decode_number(x)?, y: decode_number(y)? }),
        _ => Err(GeoSketchError::Wkt(format!(
            "expected two coordinate tokens in {pair:?}"
        ))),
    }
}

fn decode_number(token: &str) -> Result<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| GeoSketchError::Wkt(format!("invalid coordinate number {token:?}")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeoSketchError::Wkt(format!(
            "non-finite coordinate number {token:?}"
        )))
    }
}

/// Collapse newlines and whitespace runs to single spaces and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Body between the outermost matching parentheses after a keyword. The
/// opening parenthesis must directly follow the keyword (whitespace aside);
/// its partner is found by depth counting so nested parentheses do not
/// terminate the body early.
fn parenthesized_body(after_keyword: &str) -> Option<&str> {
    let rest = after_keyword.trim_start();
    if !rest.starts_with('(') {
        return None;
    }

    let mut depth = 0i64;
    for (i, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[1..i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn starts_with_ignore_ascii_case(text: &str, keyword: &str) -> bool {
    text.len() >= keyword.len()
        && text.as_bytes()[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
}

/// Byte offset of the first case-insensitive occurrence of `needle` at or
/// after `from`.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || from + needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
