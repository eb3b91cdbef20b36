use std::collections::HashMap;
use std::io;

use hifitime::Epoch;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use super::rfc3339_utc;
use crate::{propagator::SatLocation, satloc_errors::SatlocError};

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
const SATELLITE_ICON: &str = "http://maps.google.com/mapfiles/kml/shapes/satellite.png";

/// Build a KML document with one placemark per located satellite.
///
/// Arguments
/// -----------------
/// * `names`: satellites to include, in placemark order
/// * `locations`: located satellites by name; names without a location are skipped
/// * `timestamp`: instant of the locations, written in the document description
///
/// Return
/// ----------
/// * the KML text. Coordinates are `longitude,latitude,altitude` with the altitude in meters.
pub fn generate_kml<S: AsRef<str>>(
    names: &[S],
    locations: &HashMap<String, SatLocation>,
    timestamp: Epoch,
) -> Result<String, SatlocError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element("kml")
        .with_attribute(("xmlns", KML_NAMESPACE))
        .write_inner_content(|w| -> io::Result<()> {
            w.create_element("Document").write_inner_content(|w| -> io::Result<()> {
                w.create_element("name")
                    .write_text_content(BytesText::new("Starlink Satellite Locations"))?;
                let description = format!("Satellite positions at {}", rfc3339_utc(timestamp));
                w.create_element("description")
                    .write_text_content(BytesText::new(&description))?;
                write_style(w)?;

                for name in names {
                    let name = name.as_ref();
                    if let Some(location) = locations.get(name) {
                        write_placemark(w, name, location)?;
                    }
                }
                Ok(())
            })?;
            Ok(())
        })?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_style<W: io::Write>(w: &mut Writer<W>) -> io::Result<()> {
    w.create_element("Style")
        .with_attribute(("id", "satellite"))
        .write_inner_content(|w| -> io::Result<()> {
            w.create_element("IconStyle").write_inner_content(|w| -> io::Result<()> {
                w.create_element("Icon").write_inner_content(|w| -> io::Result<()> {
                    w.create_element("href")
                        .write_text_content(BytesText::new(SATELLITE_ICON))?;
                    Ok(())
                })?;
                w.create_element("scale")
                    .write_text_content(BytesText::new("1.0"))?;
                Ok(())
            })?;
            w.create_element("LabelStyle").write_inner_content(|w| -> io::Result<()> {
                w.create_element("scale")
                    .write_text_content(BytesText::new("0.8"))?;
                Ok(())
            })?;
            Ok(())
        })?;
    Ok(())
}

fn write_placemark<W: io::Write>(
    w: &mut Writer<W>,
    name: &str,
    location: &SatLocation,
) -> io::Result<()> {
    let velocity = location
        .velocity
        .map_or_else(|| "n/a".to_string(), |v| format!("{v:.3}"));
    let description = format!(
        "Altitude: {:.3} km\nVelocity: {velocity} km/s",
        location.altitude
    );
    let coordinates = format!(
        "{:.6},{:.6},{:.0}",
        location.longitude,
        location.latitude,
        location.altitude * 1000.0
    );

    w.create_element("Placemark").write_inner_content(|w| -> io::Result<()> {
        w.create_element("name")
            .write_text_content(BytesText::new(name))?;
        w.create_element("description")
            .write_text_content(BytesText::new(&description))?;
        w.create_element("styleUrl")
            .write_text_content(BytesText::new("#satellite"))?;
        w.create_element("Point").write_inner_content(|w| -> io::Result<()> {
            w.create_element("coordinates")
                .write_text_content(BytesText::new(&coordinates))?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod kml_test {
    use quick_xml::Reader;

    use super::*;

    fn location(latitude: f64, longitude: f64, altitude: f64) -> SatLocation {
        SatLocation {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            latitude,
            longitude,
            altitude,
            velocity: Some(7.6153),
        }
    }

    /// Unescaped text of every `tag` element, in document order.
    fn texts_of(kml: &str, tag: &str) -> Vec<String> {
        let mut reader = Reader::from_str(kml);
        let mut inside = false;
        let mut texts = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == tag.as_bytes() => inside = true,
                Event::End(e) if e.name().as_ref() == tag.as_bytes() => inside = false,
                Event::Text(t) if inside => texts.push(t.unescape().unwrap().into_owned()),
                Event::Eof => break,
                _ => {}
            }
        }
        texts
    }

    #[test]
    fn test_generate_kml() {
        let mut locations = HashMap::new();
        locations.insert(
            "STARLINK-1008".to_string(),
            location(-12.3456789, 140.1234567, 549.87654),
        );
        let timestamp = Epoch::from_gregorian_utc(2025, 4, 28, 15, 8, 0, 0);

        let kml =
            generate_kml(&["STARLINK-1008", "STARLINK-9999"], &locations, timestamp).unwrap();

        assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(kml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
        assert!(kml.contains("Satellite positions at 2025-04-28T15:08:00Z"));
        assert!(kml.contains("<name>STARLINK-1008</name>"));
        assert!(kml.contains("Altitude: 549.877 km"));
        assert!(kml.contains("Velocity: 7.615 km/s"));
        assert!(kml.contains("<coordinates>140.123457,-12.345679,549877</coordinates>"));
        assert!(!kml.contains("STARLINK-9999"));
        assert_eq!(kml.matches("<Placemark>").count(), 1);
        assert!(kml.trim_end().ends_with("</kml>"));
    }

    #[test]
    fn test_missing_velocity_and_escaping() {
        let mut locations = HashMap::new();
        let mut loc = location(0.0, 0.0, 500.0);
        loc.velocity = None;
        locations.insert("A&B <test>".to_string(), loc);

        let kml = generate_kml(
            &["A&B <test>"],
            &locations,
            Epoch::from_gregorian_utc_at_midnight(2025, 1, 1),
        )
        .unwrap();
        assert!(kml.contains("<name>A&amp;B &lt;test&gt;</name>"));
        assert!(kml.contains("Velocity: n/a km/s"));

        // the document reads back to the original names
        assert_eq!(
            texts_of(&kml, "name"),
            vec!["Starlink Satellite Locations", "A&B <test>"]
        );
    }

    #[test]
    fn test_empty_document() {
        let kml = generate_kml::<&str>(
            &[],
            &HashMap::new(),
            Epoch::from_gregorian_utc_at_midnight(2025, 1, 1),
        )
        .unwrap();
        assert_eq!(kml.matches("<Placemark>").count(), 0);
        assert!(kml.contains("<Style id=\"satellite\">"));
        assert_eq!(texts_of(&kml, "scale"), vec!["1.0", "0.8"]);
    }
}
