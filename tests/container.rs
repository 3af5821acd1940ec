use icodir::{Error, IconDir, IconSource};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[test]
fn three_image_layout() {
    let dir = scratch_dir("three_image_layout");
    let sources = vec![
        source(&dir, "16.png", 16, 500),
        source(&dir, "32.png", 32, 1200),
        source(&dir, "256.png", 256, 9000),
    ];
    let output = IconDir::assemble(sources).unwrap().to_bytes().unwrap();
    assert_eq!(output.len(), 6 + 3 * 16 + 500 + 1200 + 9000);
    assert_eq!(&output[..6], b"\x00\x00\x01\x00\x03\x00");
    // Per-record dimension bytes and offset chain: 54, 554, 1754.
    assert_eq!(record_dimensions(&output, 0), (16, 16));
    assert_eq!(record_dimensions(&output, 1), (32, 32));
    assert_eq!(record_dimensions(&output, 2), (0, 0));
    assert_eq!(record_span(&output, 0), (54, 500));
    assert_eq!(record_span(&output, 1), (554, 1200));
    assert_eq!(record_span(&output, 2), (1754, 9000));
    // Payload ranges hold the source files' bytes, unchanged.
    assert_eq!(&output[54..554], payload(500).as_slice());
    assert_eq!(&output[554..1754], payload(1200).as_slice());
    assert_eq!(&output[1754..10754], payload(9000).as_slice());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn round_trip() {
    let dir = scratch_dir("round_trip");
    let sources = vec![
        source(&dir, "24.png", 24, 320),
        source(&dir, "48.png", 48, 640),
    ];
    let icondir = IconDir::assemble(sources).unwrap();
    let encoded = icondir.to_bytes().unwrap();
    let decoded = IconDir::read(Cursor::new(&encoded)).unwrap();
    assert_eq!(decoded.entries().len(), icondir.entries().len());
    for (entry, original) in decoded.entries().iter().zip(icondir.entries().iter()) {
        assert_eq!(entry.width(), original.width());
        assert_eq!(entry.height(), original.height());
        assert_eq!(entry.data(), original.data());
    }
    // Re-encoding the decoded directory reproduces the file exactly.
    assert_eq!(decoded.to_bytes().unwrap(), encoded);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn assemble_is_deterministic() {
    let dir = scratch_dir("assemble_is_deterministic");
    let sources = vec![
        source(&dir, "16.png", 16, 100),
        source(&dir, "32.png", 32, 200),
    ];
    let first = IconDir::assemble(sources.clone()).unwrap().to_bytes().unwrap();
    let second = IconDir::assemble(sources).unwrap().to_bytes().unwrap();
    assert_eq!(first, second);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_source_aborts_assembly() {
    let dir = scratch_dir("missing_source_aborts_assembly");
    let sources = vec![
        source(&dir, "16.png", 16, 100),
        IconSource::new(dir.join("no-such-file.png"), 32, 32).unwrap(),
    ];
    match IconDir::assemble(sources) {
        Err(Error::SourceUnreadable { path, .. }) => {
            assert_eq!(path, dir.join("no-such-file.png"));
        }
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn save_writes_complete_file() {
    let dir = scratch_dir("save_writes_complete_file");
    let destination = dir.join("icon.ico");
    fs::write(&destination, b"stale contents").unwrap();
    let icondir = IconDir::assemble(vec![source(&dir, "64.png", 64, 750)]).unwrap();
    icondir.save(&destination).unwrap();
    assert_eq!(fs::read(&destination).unwrap(), icondir.to_bytes().unwrap());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn failed_save_leaves_no_file() {
    let dir = scratch_dir("failed_save_leaves_no_file");
    let destination = dir.join("missing-subdir").join("icon.ico");
    let icondir = IconDir::assemble(vec![source(&dir, "16.png", 16, 64)]).unwrap();
    match icondir.save(&destination) {
        Err(Error::DestinationWriteFailed { path, .. }) => assert_eq!(path, destination),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!destination.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn png_header_probing() {
    let dir = scratch_dir("png_header_probing");
    let path = dir.join("probe.png");
    write_png(&path, 48, 48);
    let probed = IconSource::for_png_file(&path).unwrap();
    assert_eq!(probed.width(), 48);
    assert_eq!(probed.height(), 48);
    let icondir = IconDir::assemble(vec![probed]).unwrap();
    assert_eq!(icondir.entries()[0].width(), 48);
    assert_eq!(icondir.entries()[0].data(), fs::read(&path).unwrap().as_slice());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn probing_rejects_oversized_png() {
    let dir = scratch_dir("probing_rejects_oversized_png");
    let path = dir.join("big.png");
    write_png(&path, 300, 300);
    match IconSource::for_png_file(&path) {
        Err(Error::ImageTooLarge { width: 300, height: 300 }) => {}
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
    let _ = fs::remove_dir_all(&dir);
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icodir-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a deterministic fake payload of the given length and returns a
/// source descriptor for it.  Build-time payloads are opaque, so the bytes
/// need not be a real PNG stream.
fn source(dir: &Path, name: &str, size: u32, payload_length: usize) -> IconSource {
    let path = dir.join(name);
    fs::write(&path, payload(payload_length)).unwrap();
    IconSource::new(path, size, size).unwrap()
}

fn payload(length: usize) -> Vec<u8> {
    (0..length).map(|index| (index * 31 % 251) as u8).collect()
}

fn write_png(path: &Path, width: u32, height: u32) {
    let file = fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer
        .write_image_data(&vec![0u8; (width * height * 4) as usize])
        .unwrap();
}

fn record_dimensions(output: &[u8], index: usize) -> (u8, u8) {
    let record = &output[6 + 16 * index..6 + 16 * (index + 1)];
    (record[0], record[1])
}

fn record_span(output: &[u8], index: usize) -> (u32, u32) {
    let record = &output[6 + 16 * index..6 + 16 * (index + 1)];
    let size = u32::from_le_bytes([record[8], record[9], record[10], record[11]]);
    let offset = u32::from_le_bytes([record[12], record[13], record[14], record[15]]);
    (offset, size)
}
