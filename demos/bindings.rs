use param_package::ParamPackage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stores a few controller bindings the way a settings file would, then
/// reads them back. Run with `RUST_LOG=debug` to see the getter fallbacks.
fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut button_a = ParamPackage::new();
    button_a.set("engine", "keyboard");
    button_a.set("code", 65);

    let mut shoulder = ParamPackage::new();
    shoulder.set("engine", "sdl");
    shoulder.set("port", 0);
    shoulder.set("guid", "030000005e0400008e02000000007200");
    shoulder.set("button", 9);
    shoulder.set("threshold", 0.5);

    // settings files keep one line per binding
    let lines = [button_a.encode(), shoulder.encode(), "engine:sdl,garbled".to_owned()];
    for line in &lines {
        println!("{line}");
    }

    for line in &lines {
        let binding = ParamPackage::decode(line);
        let engine = binding.get("engine", String::from("none"));
        let code = binding.get("code", binding.get("button", -1));
        let threshold = binding.get("threshold", 1.0f32);
        println!("engine={engine} code={code} threshold={threshold}");
    }

    let strict = lines[2].parse::<ParamPackage>();
    println!("strict read of the last line: {strict:?}");
}
