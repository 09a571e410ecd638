use param_package::ParamPackage;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct ControllerProfile {
    name: String,
    bindings: Vec<ParamPackage>,
}

fn profile() -> ControllerProfile {
    let mut button_a = ParamPackage::new();
    button_a.set("button", 1);
    button_a.set("engine", "sdl");

    let mut stick = ParamPackage::new();
    stick.set("axis_x", 0);
    stick.set("axis_y", 1);
    let mut analog = ParamPackage::new();
    analog.set("engine", "sdl");
    analog.set("stick", &stick);

    ControllerProfile {
        name: "default".to_owned(),
        bindings: vec![button_a, analog, ParamPackage::new()],
    }
}

#[test]
fn package_is_a_json_string() {
    let json = serde_json::to_string(&profile()).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"{"name":"default","bindings":["button:1,engine:sdl","engine:sdl,stick:[axis_x$00$1axis_y$01]","[empty]"]}"#
    );
}

#[test]
fn json_roundtrip() {
    let profile = profile();
    let json = serde_json::to_string(&profile).unwrap();
    let decoded: ControllerProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn json_decoding_is_lenient() {
    let decoded: ControllerProfile =
        serde_json::from_str(r#"{"name":"x","bindings":["a:1,bad"]}"#).unwrap();
    assert_eq!(decoded.bindings, [ParamPackage::from_iter([("a", "1")])]);
}

#[test]
fn json_rejects_non_strings() {
    let result = serde_json::from_str::<ControllerProfile>(r#"{"name":"x","bindings":[1]}"#);
    assert!(result.is_err());
}
