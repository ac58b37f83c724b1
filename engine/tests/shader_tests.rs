//! Validates the WGSL shader offline so a typo fails in CI rather than at
//! pipeline creation on someone's headset.

use naga::valid::{Capabilities, ValidationFlags, Validator};

const SCENE_SHADER: &str = include_str!("../../shaders/scene.wgsl");

#[test]
fn scene_shader_parses_and_validates() {
    let module = naga::front::wgsl::parse_str(SCENE_SHADER)
        .unwrap_or_else(|e| panic!("WGSL parse error: {e}"));

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {e:?}"));
}

#[test]
fn scene_shader_exports_expected_entry_points() {
    let module = naga::front::wgsl::parse_str(SCENE_SHADER).unwrap();
    let names: Vec<&str> = module
        .entry_points
        .iter()
        .map(|ep| ep.name.as_str())
        .collect();
    for expected in ["vs_main", "fs_main", "vs_line", "fs_line"] {
        assert!(names.contains(&expected), "missing entry point {expected}");
    }
}
