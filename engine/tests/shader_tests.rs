//! Shader Tests - WGSL Validation
//!
//! Parses and validates the flat 2D shader with naga so a typo in the
//! WGSL fails in CI instead of at window creation.

use naga::front::wgsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::ShaderStage;

const FLAT2D_SRC: &str = include_str!("../../shaders/flat2d.wgsl");

#[test]
fn test_flat2d_shader_parses_and_validates() {
    let module = wgsl::parse_str(FLAT2D_SRC).expect("flat2d.wgsl failed to parse");

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::empty());
    validator
        .validate(&module)
        .expect("flat2d.wgsl failed validation");
}

#[test]
fn test_flat2d_shader_has_both_entry_points() {
    let module = wgsl::parse_str(FLAT2D_SRC).unwrap();

    let vertex = module
        .entry_points
        .iter()
        .find(|ep| ep.name == "vs_main")
        .expect("missing vs_main");
    assert_eq!(vertex.stage, ShaderStage::Vertex);

    let fragment = module
        .entry_points
        .iter()
        .find(|ep| ep.name == "fs_main")
        .expect("missing fs_main");
    assert_eq!(fragment.stage, ShaderStage::Fragment);
}

#[test]
fn test_flat2d_shader_binds_the_screen_uniform() {
    let module = wgsl::parse_str(FLAT2D_SRC).unwrap();

    // Exactly one resource: the viewport uniform at group 0 binding 0
    let bindings: Vec<_> = module
        .global_variables
        .iter()
        .filter_map(|(_, var)| var.binding.as_ref())
        .collect();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].group, 0);
    assert_eq!(bindings[0].binding, 0);
}
