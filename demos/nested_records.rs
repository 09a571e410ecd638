use param_package::{Config, ParamPackage, ParsedValue};

fn main() {
    let mut stick = ParamPackage::new();
    stick.set("axis_x", 0);
    stick.set("axis_y", 1);
    stick.set("deadzone", 0.15);

    let mut motion = ParamPackage::new();
    motion.set("engine", "cemuhookudp");
    motion.set("port", 26760);

    let mut controller = ParamPackage::new();
    controller.set("name", "Pro Controller");
    controller.set("stick", &stick);
    controller.set("sensors", vec![motion, ParamPackage::new()]);
    controller.set("buttons", vec![0, 1, 2, 3]);

    let encoded = controller.encode();
    println!("{encoded}");

    let decoded = ParamPackage::decode(&encoded);
    for (key, _) in &decoded {
        match decoded.get_value(key) {
            Some(ParsedValue::Scalar(text)) => println!("{key}: scalar {text}"),
            Some(ParsedValue::List { elements, .. }) => {
                println!("{key}: list of {}", elements.len())
            }
            Some(ParsedValue::Record { inner, .. }) => println!("{key}: record {inner}"),
            None => unreachable!(),
        }
    }

    let stick = decoded.get("stick", ParamPackage::new());
    println!("deadzone = {}", stick.get("deadzone", 0.0));
    let sensors = decoded.get("sensors", Vec::<ParamPackage>::new());
    println!("first sensor port = {}", sensors[0].get("port", 0));

    // a shallow limit drops the nested values and keeps the rest
    let shallow = Config::new().max_depth(1).deserialize_str(&encoded);
    match shallow {
        Ok(package) => println!("with max_depth 1: {package}"),
        Err(err) => println!("with max_depth 1: {err}"),
    }
}
