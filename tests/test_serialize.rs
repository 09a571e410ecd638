use param_package::{ParamPackage, ser};
use pretty_assertions::assert_eq;

#[test]
fn serialize_flat() {
    let mut binding = ParamPackage::new();
    binding.set("code", 65);
    binding.set("engine", "keyboard");
    binding.set("toggle", false);

    insta::assert_snapshot!(binding.encode(), @"code:65,engine:keyboard,toggle:false");
}

#[test]
fn serialize_empty() {
    assert_eq!(ParamPackage::new().encode(), "[empty]");
    assert_eq!(param_package::to_string(&ParamPackage::new()), "[empty]");
}

#[test]
fn serialize_escapes_keys_and_values() {
    let package = ParamPackage::from_iter([("k", "a:b,c$d")]);
    insta::assert_snapshot!(package.encode(), @"k:a$0b$1c$2d");

    let package = ParamPackage::from_iter([("a,b", "c")]);
    insta::assert_snapshot!(package.encode(), @"a$1b:c");
}

#[test]
fn serialize_leaves_brackets_and_pipes() {
    let package = ParamPackage::from_iter([("k", "[x|y]")]);
    assert_eq!(package.encode(), "k:[x|y]");
}

#[test]
fn serialize_numbers() {
    let mut package = ParamPackage::new();
    package.set("a", -128i8);
    package.set("b", u64::MAX);
    package.set("c", 1.0f64);
    package.set("d", 0.1f32);
    package.set("e", 1e21f64);

    insta::assert_snapshot!(
        package.encode(),
        @"a:-128,b:18446744073709551615,c:1.0,d:0.1,e:1e21"
    );
}

#[test]
fn serialize_nested() {
    let mut stick = ParamPackage::new();
    stick.set("axis_x", 0);
    stick.set("axis_y", 1);

    let mut binding = ParamPackage::new();
    binding.set("engine", "sdl");
    binding.set("stick", &stick);

    insta::assert_snapshot!(
        binding.encode(),
        @"engine:sdl,stick:[axis_x$00$1axis_y$01]"
    );
}

#[test]
fn serialize_list_of_packages() {
    let pads = vec![
        ParamPackage::from_iter([("port", "0")]),
        ParamPackage::from_iter([("port", "1")]),
    ];
    let mut package = ParamPackage::new();
    package.set("pads", pads);

    insta::assert_snapshot!(package.encode(), @"pads:[port$00|port$01]");
}

#[test]
fn serialize_to_writer() {
    let package = ParamPackage::from_iter([("a", "1"), ("b", "x,y")]);
    let mut buffer = Vec::new();
    param_package::to_writer(&package, &mut buffer).unwrap();
    assert_eq!(buffer, b"a:1,b:x$1y");

    let mut buffer = Vec::new();
    param_package::to_writer(&ParamPackage::new(), &mut buffer).unwrap();
    assert_eq!(buffer, b"[empty]");
}

#[test]
fn display_matches_encode() {
    let package = ParamPackage::from_iter([("a", "1"), ("b", "$")]);
    assert_eq!(package.to_string(), package.encode());
    assert_eq!(format!("{package}"), "a:1,b:$2");
}

#[test]
fn escape_is_public() {
    assert_eq!(ser::escape("a:b,c$d"), "a$0b$1c$2d");
    assert_eq!(param_package::de::unescape("a$0b$1c$2d"), "a:b,c$d");
}
