//! End-to-end runs of both pipelines against fixture inputs.

use std::fs;
use std::path::{Path, PathBuf};

use appassets::{
    load_palette, scan_images, AndroidColorEmitter, AndroidImageEmitter, IosColorEmitter,
    IosImageEmitter, Manifest, DENSITIES,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn colour_palette_to_android() {
    let palette = load_palette(&fixture("colors.yaml")).unwrap();
    let out = tempdir().unwrap();

    let report = AndroidColorEmitter::new(out.path()).emit(&palette).unwrap();
    assert_eq!(report.skipped, 1);

    assert_eq!(
        read(&out.path().join("values/colors.xml")),
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<resources>\n",
            "    <color name=\"background\">#FFFFFF</color>\n",
            "    <color name=\"brand\">#FF0000</color>\n",
            "    <color name=\"divider\">#E0E0E0</color>\n",
            "    <color name=\"overlay\">#7F000000</color>\n",
            "    <color name=\"text-primary\">#1A1A1A</color>\n",
            "</resources>\n",
        )
    );

    assert_eq!(
        read(&out.path().join("values-night/colors.xml")),
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<resources>\n",
            "    <color name=\"background\">#121212</color>\n",
            "    <color name=\"text-primary\">#E5F5F5F5</color>\n",
            "</resources>\n",
        )
    );
}

#[test]
fn colour_palette_to_ios() {
    let palette = load_palette(&fixture("colors.yaml")).unwrap();
    let out = tempdir().unwrap();

    let report = IosColorEmitter::new(out.path()).emit(&palette).unwrap();
    assert_eq!(report.written, 5);

    assert!(!out.path().join("hero-gradient.colorset").exists());

    let contents: serde_json::Value =
        serde_json::from_str(&read(&out.path().join("background.colorset/Contents.json")))
            .unwrap();
    let colors = contents["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[1]["appearances"][0]["value"], "dark");
    assert_eq!(contents["info"]["author"], "xcode");
    assert_eq!(contents["info"]["version"], 1);

    // Only light and dark given: default falls back to light, so no light entry.
    let contents: serde_json::Value =
        serde_json::from_str(&read(&out.path().join("text-primary.colorset/Contents.json")))
            .unwrap();
    let colors = contents["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[1]["appearances"][0]["value"], "dark");
    assert_eq!(colors[1]["color"]["components"]["alpha"], "0.9");
}

#[test]
fn single_colour_has_no_night_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("colors.yaml");
    fs::write(&input, "brand:\n  hex: \"#FF0000\"\n  alpha: 1.0\n").unwrap();

    let palette = load_palette(&input).unwrap();
    AndroidColorEmitter::new(dir.path().join("res"))
        .emit(&palette)
        .unwrap();

    let xml = read(&dir.path().join("res/values/colors.xml"));
    assert!(xml.contains("<color name=\"brand\">#FF0000</color>"));
    assert!(!dir.path().join("res/values-night/colors.xml").exists());
}

#[test]
fn image_folder_to_both_platforms() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();

    fs::write(input.path().join("Tab-Home.png"), b"home-1x").unwrap();
    fs::write(input.path().join("back@2x.png"), b"back-2x").unwrap();
    fs::write(input.path().join("back@3x.png"), b"back-3x").unwrap();
    fs::write(input.path().join("notes.txt"), b"ignored").unwrap();

    let catalog = scan_images(input.path(), &Manifest::default()).unwrap();
    assert_eq!(catalog.len(), 2);

    IosImageEmitter::new(input.path(), out.path())
        .emit(&catalog)
        .unwrap();
    AndroidImageEmitter::new(input.path(), out.path())
        .emit(&catalog)
        .unwrap();

    // iOS keeps original names.
    assert!(out.path().join("Tab-Home.imageset/Tab-Home.png").is_file());
    assert!(out.path().join("back.imageset/back@2x.png").is_file());
    assert!(out.path().join("back.imageset/back@3x.png").is_file());

    // A lone 1x fills every bucket under the Android name.
    for density in DENSITIES {
        let path = out.path().join(density.directory()).join("tab_home.png");
        assert_eq!(fs::read(&path).unwrap(), b"home-1x");
    }

    // 2x covers mdpi..xhdpi, 3x covers xxhdpi and xxxhdpi.
    let drawable = |dir: &str| fs::read(out.path().join(dir).join("back.png")).unwrap();
    assert_eq!(drawable("drawable-mdpi"), b"back-2x");
    assert_eq!(drawable("drawable-hdpi"), b"back-2x");
    assert_eq!(drawable("drawable-xhdpi"), b"back-2x");
    assert_eq!(drawable("drawable-xxhdpi"), b"back-3x");
    assert_eq!(drawable("drawable-xxxhdpi"), b"back-3x");
}
