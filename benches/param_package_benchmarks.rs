use criterion::{black_box, criterion_group, criterion_main, Criterion};
use param_package::ParamPackage;

fn flat_package() -> ParamPackage {
    let mut package = ParamPackage::new();
    package.set("engine", "sdl");
    package.set("guid", "030000005e0400008e02000000007200");
    package.set("port", 0);
    package.set("button", 12);
    package
}

fn escaped_package() -> ParamPackage {
    let mut package = ParamPackage::new();
    package.set("display", "Pad 1, port: $0");
    package.set("path", "/dev/input/event4:raw,grab");
    package
}

fn nested_package() -> ParamPackage {
    let mut stick = ParamPackage::new();
    stick.set("axis_x", 0);
    stick.set("axis_y", 1);
    stick.set("deadzone", 0.15);
    stick.set("range", 0.95);

    let mut motion = ParamPackage::new();
    motion.set("engine", "cemuhookudp");
    motion.set("pad", 0);
    motion.set("stick", &stick);

    let mut package = flat_package();
    package.set("motion", &motion);
    package.set("modifiers", vec![16, 17, 18]);
    package.set("pads", vec![stick.clone(), motion.clone()]);
    package
}

fn large_list_package() -> ParamPackage {
    let mut package = ParamPackage::new();
    package.set("samples", (0..1000).collect::<Vec<u32>>());
    package
}

// ========== ENCODING ==========

fn encode_flat(c: &mut Criterion) {
    let data = flat_package();
    c.bench_function("encode_flat", |b| b.iter(|| black_box(&data).encode()));
}

fn encode_escaped(c: &mut Criterion) {
    let data = escaped_package();
    c.bench_function("encode_escaped", |b| b.iter(|| black_box(&data).encode()));
}

fn encode_nested(c: &mut Criterion) {
    let data = nested_package();
    c.bench_function("encode_nested", |b| b.iter(|| black_box(&data).encode()));
}

fn encode_large_list(c: &mut Criterion) {
    let data = large_list_package();
    c.bench_function("encode_large_list", |b| {
        b.iter(|| black_box(&data).encode())
    });
}

// ========== DECODING ==========

fn decode_flat(c: &mut Criterion) {
    let encoded = flat_package().encode();
    c.bench_function("decode_flat", |b| {
        b.iter(|| ParamPackage::decode(black_box(&encoded)))
    });
}

fn decode_escaped(c: &mut Criterion) {
    let encoded = escaped_package().encode();
    c.bench_function("decode_escaped", |b| {
        b.iter(|| ParamPackage::decode(black_box(&encoded)))
    });
}

fn decode_nested(c: &mut Criterion) {
    let encoded = nested_package().encode();
    c.bench_function("decode_nested", |b| {
        b.iter(|| ParamPackage::decode(black_box(&encoded)))
    });
}

fn decode_large_list(c: &mut Criterion) {
    let encoded = large_list_package().encode();
    c.bench_function("decode_large_list", |b| {
        b.iter(|| ParamPackage::decode(black_box(&encoded)))
    });
}

// ========== TYPED GETTERS ==========

fn get_nested(c: &mut Criterion) {
    let data = nested_package();
    c.bench_function("get_nested", |b| {
        b.iter(|| {
            let motion = black_box(&data).get("motion", ParamPackage::new());
            motion.get("stick", ParamPackage::new()).get("deadzone", 0.0f32)
        })
    });
}

fn get_large_list(c: &mut Criterion) {
    let data = large_list_package();
    c.bench_function("get_large_list", |b| {
        b.iter(|| black_box(&data).get("samples", Vec::<u32>::new()))
    });
}

criterion_group!(encode_benches, encode_flat, encode_escaped, encode_nested, encode_large_list);
criterion_group!(decode_benches, decode_flat, decode_escaped, decode_nested, decode_large_list);
criterion_group!(getter_benches, get_nested, get_large_list);
criterion_main!(encode_benches, decode_benches, getter_benches);
