use shapebake_core::{
    mesh::Mesh,
    parse_clip_json,
    rebuild::{rebuild, NullRegistry, TargetMapping},
    sampling::sample_clip,
    ShapeKeyCatalog,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn parses_clip_fixture_and_preserves_binding_order() {
    let json = shapebake_fixtures::clips::json("lipsync-aa").expect("load lipsync-aa fixture");
    let clip = parse_clip_json(&json).expect("parse clip fixture");

    assert_eq!(clip.name, "lipsync-aa");
    assert_eq!(clip.bindings.len(), 3);
    assert_eq!(clip.bindings[0].property_path, "blendShape.vrc.v_aa");
    approx(clip.bindings[0].curve.keys[0].value, 60.0, 1e-6);
    // Non-blend-shape and empty-curve bindings survive parsing; the sampler
    // decides relevance.
    assert_eq!(clip.bindings[1].property_path, "m_LocalPosition.x");
    assert!(clip.bindings[2].curve.keys.is_empty());
}

#[test]
fn rejects_malformed_clip_json() {
    assert!(parse_clip_json("{").is_err());
    assert!(parse_clip_json(r#"{"bindings": []}"#).is_err()); // missing name
}

#[test]
fn fixture_mesh_and_clip_drive_a_full_bake() {
    let mesh_json = shapebake_fixtures::meshes::json("face-basic").expect("load mesh fixture");
    let mesh: Mesh = serde_json::from_str(&mesh_json).expect("parse mesh fixture");
    mesh.validate_basic().expect("fixture mesh is well formed");

    let clip_json = shapebake_fixtures::clips::json("mouth-shrink").expect("load clip fixture");
    let clip = parse_clip_json(&clip_json).expect("parse clip fixture");

    // The clip binds vrc.v_aa, jawOpen and one shape the mesh doesn't have.
    let catalog = ShapeKeyCatalog::for_mesh(&mesh);
    let sampled = sample_clip(Some(&clip), &catalog);
    assert_eq!(sampled.len(), 3);
    assert!(sampled.iter().any(|s| s.name == "notOnThisMesh" && s.channel.is_none()));

    let mapping = TargetMapping {
        names: vec!["vrc.v_aa".into()],
        clips: vec![Some(clip)],
    };
    let live = vec![0.0; mesh.channels.len()];
    let (out, report) = rebuild(&mesh, &live, &mapping, &mut NullRegistry).unwrap();

    assert_eq!(out.channel_names(), mesh.channel_names());
    assert_eq!(report.replaced, vec!["vrc.v_aa".to_string()]);

    // vrc.v_aa absorbs both resolved bindings: its own deltas at 0.4 plus
    // jawOpen's deltas at 0.25.
    let aa = &mesh.channels[0].deltas;
    let jaw = &mesh.channels[2].deltas;
    let got = &out.channels[0].deltas;
    for k in 0..mesh.vertex_count {
        for c in 0..3 {
            approx(
                got.positions[k][c],
                aa.positions[k][c] * 0.4 + jaw.positions[k][c] * 0.25,
                1e-6,
            );
        }
    }
    // Untargeted channels are untouched.
    assert_eq!(out.channels[1], mesh.channels[1]);
    assert_eq!(out.channels[2], mesh.channels[2]);
}
