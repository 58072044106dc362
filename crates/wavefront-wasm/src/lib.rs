use serde::Serialize;
use wasm_bindgen::prelude::*;
use wavefront_core::{AnimationSequence, Scene, WaveConfig};

/// Config JSON for a built-in scene, for the page to tweak before `generate`.
#[wasm_bindgen]
pub fn preset(scene: &str) -> Result<String, JsValue> {
    preset_json(scene).map_err(|e| JsValue::from_str(&e))
}

/// Generate the full animation sequence for `config_json`.
/// Returns `{ coordinates, initial, frames, steps }` as a plain JS object.
#[wasm_bindgen]
pub fn generate(config_json: &str) -> Result<JsValue, JsValue> {
    let sequence = build_sequence(config_json).map_err(|e| JsValue::from_str(&e))?;
    to_js(&sequence)
}

/// Figure titles and value range for `scene` run with `config_json`.
#[wasm_bindgen]
pub fn layout(scene: &str, config_json: &str) -> Result<JsValue, JsValue> {
    let scene: Scene = scene.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let config = WaveConfig::from_json(config_json).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    to_js(&scene.layout(&config))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects rather than JS `Map`s so the page can index by axis name.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

fn preset_json(scene: &str) -> Result<String, String> {
    let scene: Scene = scene.parse().map_err(|e| format!("{e}"))?;
    scene.config().to_json().map_err(|e| format!("{e}"))
}

fn build_sequence(config_json: &str) -> Result<AnimationSequence, String> {
    let config = WaveConfig::from_json(config_json).map_err(|e| format!("{e}"))?;
    config.run().map_err(|e| format!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_json_feeds_back_into_generation() {
        let json = preset_json("hyperspace").unwrap();
        let seq = build_sequence(&json).unwrap();
        assert_eq!(seq.len(), 40);
    }

    #[test]
    fn errors_are_reported_as_messages() {
        assert!(preset_json("torus").unwrap_err().contains("unknown scene"));
        assert!(build_sequence("{}").unwrap_err().starts_with("Invalid config"));
    }
}
