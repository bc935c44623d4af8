//! Integration tests for format detection and the read/write entry points.

use duotone_core::Bitmap;
use duotone_io::{read, write, Format, IoError};

fn checker(width: u32, height: u32) -> Bitmap {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Bitmap::from_raw(width, height, data).unwrap()
}

#[test]
fn png_roundtrip_through_entry_points() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");

    let bitmap = checker(16, 16);
    write(&path, &bitmap).unwrap();

    let loaded = read(&path).unwrap();
    assert_eq!(loaded, bitmap);
}

#[test]
fn read_detects_by_magic_not_extension() {
    let dir = tempfile::tempdir().unwrap();
    // A PNG stream behind a .jpg name still decodes as PNG.
    let path = dir.path().join("mislabeled.jpg");

    let bitmap = checker(4, 4);
    duotone_io::png::write(&path, &bitmap).unwrap();

    let loaded = read(&path).unwrap();
    assert_eq!(loaded, bitmap);
}

#[test]
fn read_rejects_unknown_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-an-image.png");
    std::fs::write(&path, b"plain text, no magic").unwrap();

    let err = read(&path).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
}

#[test]
fn write_rejects_non_png_target() {
    let dir = tempfile::tempdir().unwrap();
    let bitmap = checker(2, 2);

    for name in ["out.jpg", "out.webp", "out"] {
        let err = write(dir.path().join(name), &bitmap).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)), "{}", name);
    }
}

#[test]
fn detect_reads_only_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.png");
    write(&path, &checker(8, 8)).unwrap();
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);

    let missing = dir.path().join("missing.png");
    assert!(Format::detect(&missing).is_err());
}
