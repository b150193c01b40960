//! Converting whole drawings, through the library and the binary.

use std::process::Command;

use pretty_assertions::assert_eq;
use svg2ttic::{convert_svg, ConvertError, ConvertOptions};
use write_icons::{Error as IconError, ReservedNames};

const TRIANGLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
  <g id="layer1">
    <title>triangle</title>
    <g id="bounds">
      <title>__TTauriIconBounds</title>
      <rect x="0" y="0" width="24" height="24"/>
    </g>
    <g id="guides">
      <title>__guides</title>
      <path d="M0 0L48 0L48 48Z" fill="#f00"/>
    </g>
    <path d="M6 6L18 6L18 18Z" fill="#fff" stroke-width="0.6"/>
  </g>
</svg>
"##;

#[rustfmt::skip]
const TRIANGLE_TTIC: &[u8] = &[
    b'T', b'T', b'I', b'C',
    0x01, 0x00, // paths
    0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0xff, 0xff, // fill
    0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x00, // stroke
    0x66, 0x06, // stroke width, miter
    0x01, 0x00, // contours
    0x03, 0x00, // points
    0x00, 0xc0, 0x00, 0x40,
    0x00, 0x40, 0x00, 0x40,
    0x00, 0x40, 0x00, 0xc0,
];

fn svg2ttic() -> Command {
    Command::new(env!("CARGO_BIN_EXE_svg2ttic"))
}

#[test]
fn triangle() {
    let bytes = convert_svg(TRIANGLE, &ConvertOptions::default()).unwrap();
    assert_eq!(bytes, TRIANGLE_TTIC);
}

#[test]
fn conversion_is_deterministic() {
    let options = ConvertOptions::default();
    assert_eq!(
        convert_svg(TRIANGLE, &options).unwrap(),
        convert_svg(TRIANGLE, &options).unwrap()
    );
}

#[test]
fn renamed_bounds_group() {
    let svg = TRIANGLE.replace("__TTauriIconBounds", "frame");
    // the rectangle is now drawn, and the default bounds are far too small
    let err = convert_svg(&svg, &ConvertOptions::default()).unwrap_err();
    assert!(
        matches!(
            err,
            ConvertError::Icon(IconError::CoordinateOverflow { .. })
        ),
        "{err}"
    );

    let options = ConvertOptions {
        reserved: ReservedNames {
            bounds_title: "frame".into(),
            ..Default::default()
        },
    };
    assert_eq!(convert_svg(&svg, &options).unwrap(), TRIANGLE_TTIC);
}

#[test]
fn unsupported_command_fails() {
    let svg = TRIANGLE.replace("M6 6L18 6", "M6 6H18");
    let err = convert_svg(&svg, &ConvertOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to convert icon: Path command 'H' is not supported"
    );
}

#[test]
fn no_groups() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0L1 1Z"/></svg>"#;
    let bytes = convert_svg(svg, &ConvertOptions::default()).unwrap();
    assert_eq!(bytes, b"TTIC\x00\x00");
}

#[test]
fn binary_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("triangle.svg");
    let output = dir.path().join("triangle.ttic");
    std::fs::write(&input, TRIANGLE).unwrap();

    let status = svg2ttic()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&output).unwrap(), TRIANGLE_TTIC);
}

#[test]
fn binary_without_output_only_validates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("triangle.svg");
    std::fs::write(&input, TRIANGLE).unwrap();

    let status = svg2ttic().arg(&input).status().unwrap();
    assert!(status.success());
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn binary_reserved_name_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    let output = dir.path().join("icon.ttic");
    let svg = TRIANGLE
        .replace("__TTauriIconBounds", "meta:bounds")
        .replace("__guides", "meta:guides");
    std::fs::write(&input, svg).unwrap();

    let status = svg2ttic()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--hidden-prefix", "meta:", "--bounds-title", "meta:bounds"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&output).unwrap(), TRIANGLE_TTIC);
}

#[test]
fn binary_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.svg");
    let output = dir.path().join("bad.ttic");
    std::fs::write(&input, TRIANGLE.replace("#fff", "#ffff0")).unwrap();

    let result = svg2ttic()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("#ffff0"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn binary_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = svg2ttic()
        .arg(dir.path().join("missing.svg"))
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to read"), "{stderr}");
}

#[test]
fn binary_usage_error() {
    let result = svg2ttic().output().unwrap();
    assert_eq!(result.status.code(), Some(2));
}
