//! Android colour resource output.
//!
//! Light-theme values go to `values/colors.xml`. Dark values that differ
//! from light go to `values-night/colors.xml`, which is only written when
//! at least one colour qualifies.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::error::Result;
use crate::types::{ColorValue, Palette};

use super::{ensure_dir, write_file, EmitReport};

/// A single `<color>` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorResource {
    pub name: String,
    pub value: String,
}

/// Resources for the default and night resource directories, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidColours {
    pub day: Vec<ColorResource>,
    pub night: Vec<ColorResource>,
}

/// Writes `values/colors.xml` and `values-night/colors.xml`.
#[derive(Debug, Clone)]
pub struct AndroidColorEmitter {
    output: PathBuf,
}

impl AndroidColorEmitter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn emit(&self, palette: &Palette) -> Result<EmitReport> {
        let colours = collect_android_colours(palette);

        let values = self.output.join("values");
        ensure_dir(&values)
            .and_then(|_| write_file(&values.join("colors.xml"), &render_colors_xml(&colours.day)))
            .map_err(|e| e.context("Failed to generate values/colors.xml"))?;

        if !colours.night.is_empty() {
            let night = self.output.join("values-night");
            ensure_dir(&night)
                .and_then(|_| {
                    write_file(&night.join("colors.xml"), &render_colors_xml(&colours.night))
                })
                .map_err(|e| e.context("Failed to generate values-night/colors.xml"))?;
        }

        Ok(EmitReport {
            written: colours.day.len() + colours.night.len(),
            skipped: palette.gradient_count(),
        })
    }
}

/// Resolve every non-gradient colour into day and night resources.
pub fn collect_android_colours(palette: &Palette) -> AndroidColours {
    let mut colours = AndroidColours::default();

    // Palette iteration is name-ordered, so both lists come out sorted.
    for (name, definition) in palette.solid_colours() {
        let light = definition.resolve_light();

        if let Some(value) = light {
            colours.day.push(ColorResource {
                name: name.to_string(),
                value: format_android_color(value),
            });
        }

        if let Some(dark) = definition.resolve_dark() {
            if light != Some(dark) {
                colours.night.push(ColorResource {
                    name: name.to_string(),
                    value: format_android_color(dark),
                });
            }
        }
    }

    colours
}

/// Format a colour as `#RRGGBB`, or `#AARRGGBB` when translucent.
pub fn format_android_color(value: &ColorValue) -> String {
    if value.is_opaque() {
        return value.hex().to_string();
    }

    let digits = value.hex().trim_start_matches('#');
    format!("#{:02X}{}", value.alpha_byte(), digits)
}

/// Render a `colors.xml` resource file.
pub fn render_colors_xml(resources: &[ColorResource]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");
    for resource in resources {
        let _ = writeln!(
            xml,
            "    <color name=\"{}\">{}</color>",
            escape_xml(&resource.name),
            resource.value
        );
    }
    xml.push_str("</resources>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_palette;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn resource(name: &str, value: &str) -> ColorResource {
        ColorResource {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_format_opaque_keeps_hex() {
        let value = ColorValue::opaque("#ff0000").unwrap();
        assert_eq!(format_android_color(&value), "#ff0000");
    }

    #[test]
    fn test_format_translucent_prefixes_alpha() {
        let value = ColorValue::new("#FF0000", 0.5).unwrap();
        assert_eq!(format_android_color(&value), "#7FFF0000");

        let value = ColorValue::new("#00ff00", 0.0).unwrap();
        assert_eq!(format_android_color(&value), "#0000ff00");
    }

    #[test]
    fn test_collect_sorted_and_night_only_when_different() {
        let source = r##"
zebra:
  hex: "#111111"
apple:
  default: { hex: "#000000" }
  dark: { hex: "#FFFFFF" }
Mango:
  light: { hex: "#222222" }
  dark: { hex: "#222222" }
"##;
        let colours = collect_android_colours(&parse_palette(source).unwrap());

        assert_eq!(
            colours.day,
            vec![
                resource("Mango", "#222222"),
                resource("apple", "#000000"),
                resource("zebra", "#111111"),
            ]
        );
        assert_eq!(colours.night, vec![resource("apple", "#FFFFFF")]);
    }

    #[test]
    fn test_collect_light_override_feeds_default_file() {
        let source = r##"
card:
  default: { hex: "#AAAAAA" }
  light: { hex: "#BBBBBB" }
"##;
        let colours = collect_android_colours(&parse_palette(source).unwrap());

        assert_eq!(colours.day, vec![resource("card", "#BBBBBB")]);
        // Dark falls back to default, which differs from light.
        assert_eq!(colours.night, vec![resource("card", "#AAAAAA")]);
    }

    #[test]
    fn test_collect_dark_only() {
        let colours =
            collect_android_colours(&parse_palette("glow:\n  dark: { hex: \"#FFFFFF\" }\n").unwrap());

        assert!(colours.day.is_empty());
        assert_eq!(colours.night, vec![resource("glow", "#FFFFFF")]);
    }

    #[test]
    fn test_render_colors_xml() {
        let xml = render_colors_xml(&[resource("brand", "#FF0000"), resource("a&b", "#80000000")]);

        insta::assert_snapshot!(xml, @r###"
        <?xml version="1.0" encoding="utf-8"?>
        <resources>
            <color name="brand">#FF0000</color>
            <color name="a&amp;b">#80000000</color>
        </resources>
        "###);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_colors_xml(&[]),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n"
        );
    }

    #[test]
    fn test_emit_simple_has_no_night_file() {
        let palette = parse_palette("brand:\n  hex: \"#FF0000\"\n  alpha: 1.0\n").unwrap();
        let dir = tempdir().unwrap();

        let report = AndroidColorEmitter::new(dir.path()).emit(&palette).unwrap();

        let day = fs::read_to_string(dir.path().join("values/colors.xml")).unwrap();
        assert!(day.contains("<color name=\"brand\">#FF0000</color>"));
        assert!(!dir.path().join("values-night").exists());
        assert_eq!(report, EmitReport { written: 1, skipped: 0 });
    }

    #[test]
    fn test_emit_writes_night_file() {
        let source = r##"
brand:
  default: { hex: "#000000", alpha: 1 }
  dark: { hex: "#FFFFFF", alpha: 1 }
"##;
        let palette = parse_palette(source).unwrap();
        let dir = tempdir().unwrap();

        AndroidColorEmitter::new(dir.path()).emit(&palette).unwrap();

        let night = fs::read_to_string(dir.path().join("values-night/colors.xml")).unwrap();
        assert!(night.contains("<color name=\"brand\">#FFFFFF</color>"));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let source = "b:\n  hex: \"#000000\"\na:\n  hex: \"#FFFFFF\"\n";
        let palette = parse_palette(source).unwrap();
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();

        AndroidColorEmitter::new(first.path()).emit(&palette).unwrap();
        AndroidColorEmitter::new(second.path()).emit(&palette).unwrap();

        assert_eq!(
            fs::read(first.path().join("values/colors.xml")).unwrap(),
            fs::read(second.path().join("values/colors.xml")).unwrap()
        );
    }
}
