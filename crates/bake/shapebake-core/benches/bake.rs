use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shapebake_core::{
    clip::{AnimationClip, Curve, CurveBinding, Keyframe},
    mesh::{BlendShapeChannel, ChannelDeltas, Mesh},
    rebuild::{rebuild, NullRegistry, TargetMapping},
};

fn mk_mesh(vertex_count: usize, channel_count: usize) -> Mesh {
    let channels = (0..channel_count)
        .map(|i| {
            let mut deltas = ChannelDeltas::zeroed(vertex_count);
            for k in 0..vertex_count {
                let f = (i as f32 + 1.0) * 0.01 * (k as f32 + 1.0);
                deltas.positions[k] = [f, -f, f * 0.5];
                deltas.normals[k] = [0.0, f * 0.1, 0.0];
            }
            BlendShapeChannel {
                name: format!("shape{i}"),
                frame_weight: 100.0,
                deltas,
            }
        })
        .collect();
    Mesh {
        name: "bench".into(),
        vertex_count,
        channels,
    }
}

fn mk_clip(targets: &[usize]) -> AnimationClip {
    AnimationClip {
        name: "bench-clip".into(),
        bindings: targets
            .iter()
            .map(|i| CurveBinding {
                property_path: format!("blendShape.shape{i}"),
                curve: Curve {
                    keys: vec![Keyframe {
                        time: 0.0,
                        value: 60.0,
                    }],
                },
            })
            .collect(),
    }
}

fn bench_rebuild(c: &mut Criterion) {
    let mesh = mk_mesh(10_000, 16);
    let live = vec![0.0f32; 16];
    let mapping = TargetMapping {
        names: vec!["shape0".into(), "shape3".into(), "shape7".into()],
        clips: vec![
            Some(mk_clip(&[0, 1, 2])),
            Some(mk_clip(&[3])),
            Some(mk_clip(&[7, 8])),
        ],
    };

    c.bench_function("rebuild_10k_verts_16_channels", |b| {
        b.iter(|| {
            let out = rebuild(
                black_box(&mesh),
                black_box(&live),
                black_box(&mapping),
                &mut NullRegistry,
            )
            .unwrap();
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_rebuild);
criterion_main!(benches);
