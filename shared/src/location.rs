/// Location strings come from the detector as free text, usually either
/// `"Name (lat, lng)"`, a bare `"lat, lng"` pair, or a plain name.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLocation {
    pub name: String,
    pub coords: Option<(f64, f64)>,
}

/// Split a location string into a display name and optional coordinates.
/// Returns `None` only for empty input.
pub fn parse_location(location: &str) -> Option<ParsedLocation> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }

    // "Name (12.34, 56.78)"
    if let Some(open) = location.rfind('(') {
        if let Some(inner) = location[open + 1..].strip_suffix(')') {
            if let Some(coords) = parse_coords(inner) {
                let name = location[..open].trim();
                let name = if name.is_empty() { "Location" } else { name };
                return Some(ParsedLocation {
                    name: name.to_string(),
                    coords: Some(coords),
                });
            }
        }
    }

    // Bare "12.34, 56.78"
    if let Some(coords) = parse_coords(location) {
        return Some(ParsedLocation {
            name: "Location".to_string(),
            coords: Some(coords),
        });
    }

    Some(ParsedLocation {
        name: location.to_string(),
        coords: None,
    })
}

fn parse_coords(text: &str) -> Option<(f64, f64)> {
    let (lat, lng) = text.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Some((lat, lng))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_with_coordinates() {
        let parsed = parse_location("Main Entrance (12.345, 67.89)").unwrap();
        assert_eq!(parsed.name, "Main Entrance");
        assert_eq!(parsed.coords, Some((12.345, 67.89)));
    }

    #[test]
    fn bare_coordinates_get_a_placeholder_name() {
        let parsed = parse_location("-6.2, 106.81").unwrap();
        assert_eq!(parsed.name, "Location");
        assert_eq!(parsed.coords, Some((-6.2, 106.81)));
    }

    #[test]
    fn plain_name_has_no_coordinates() {
        let parsed = parse_location("West Parking Lot").unwrap();
        assert_eq!(parsed.name, "West Parking Lot");
        assert_eq!(parsed.coords, None);
    }

    #[test]
    fn out_of_range_coordinates_are_treated_as_text() {
        let parsed = parse_location("Somewhere (123.0, 456.0)").unwrap();
        assert_eq!(parsed.name, "Somewhere (123.0, 456.0)");
        assert_eq!(parsed.coords, None);
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(parse_location(""), None);
        assert_eq!(parse_location("   "), None);
    }
}
