//! Systems for input action evaluation.
use bevy::prelude::*;
use super::types::*;

pub fn system_evaluate_bindings(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input_map: ResMut<InputMap>,
) {
    let dt = time.delta_secs();
    evaluate_bindings(&mut input_map, |k| keyboard.pressed(k), dt);
}

/// Advance binding runtimes against `is_down` and fold them into action states.
pub fn evaluate_bindings(input_map: &mut InputMap, is_down: impl Fn(KeyCode) -> bool, dt: f32) {
    let map = &mut *input_map;
    if map.bindings_runtime.len() < map.bindings.len() { map.bindings_runtime.resize(map.bindings.len(), BindingRuntime::default()); }
    for (binding, rt) in map.bindings.iter().zip(map.bindings_runtime.iter_mut()) { let all_down = binding.keys.iter().all(|k| is_down(*k)); if all_down { if rt.active { rt.hold_elapsed += dt; } else { rt.active = true; rt.hold_elapsed = 0.0; } } else { rt.active = false; rt.hold_elapsed = 0.0; } }
    for meta in &map.actions { let now = map.bindings_index.get(&meta.id).is_some_and(|ids| ids.iter().any(|bid| { let i = *bid as usize; map.bindings_runtime[i].eligible(&map.bindings[i]) })); if let Some(state) = map.states.get_mut(meta.id.0 as usize) { state.settle(now); } }
}
