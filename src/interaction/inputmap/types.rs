use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

use crate::gameplay::flight::ports::{Control, InputSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16); // internal index (array position)

#[derive(Debug, Clone)]
pub struct ActionMeta { pub id: ActionId, pub name: String, pub description: String }

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState { pub pressed: bool, pub just_pressed: bool, pub just_released: bool }
impl ActionState {
    /// Fold this frame's raw level into edge flags.
    pub fn settle(&mut self, now_pressed: bool) { self.just_pressed = now_pressed && !self.pressed; self.just_released = !now_pressed && self.pressed; self.pressed = now_pressed; }
}

/// A chord of keys that must all be down; `hold_secs` > 0 delays activation.
#[derive(Debug, Clone)]
pub struct Binding { pub id: u32, pub keys: SmallVec<[KeyCode; 2]>, pub hold_secs: f32 }

#[derive(Debug, Default, Clone)]
pub struct BindingRuntime { pub active: bool, pub hold_elapsed: f32 }
impl BindingRuntime { pub fn eligible(&self, binding: &Binding) -> bool { self.active && self.hold_elapsed >= binding.hold_secs } }

#[derive(Resource, Debug, Default)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    pub bindings_index: HashMap<ActionId, Vec<u32>>, // action -> binding ids
    pub bindings: Vec<Binding>,
    pub bindings_runtime: Vec<BindingRuntime>,
    pub states: Vec<ActionState>,
    /// Whether the `["debug.bindings"]` overlay was merged in.
    pub debug_layer: bool,
}

impl InputMap {
    pub fn get_state(&self, name: &str) -> Option<&ActionState> { self.name_to_id.get(name).and_then(|id| self.states.get(id.0 as usize)) }
    pub fn pressed(&self, name: &str) -> bool { self.get_state(name).is_some_and(|s| s.pressed) }
    pub fn just_pressed(&self, name: &str) -> bool { self.get_state(name).is_some_and(|s| s.just_pressed) }
    pub fn just_released(&self, name: &str) -> bool { self.get_state(name).is_some_and(|s| s.just_released) }
    pub fn bindings_for(&self, name: &str) -> impl Iterator<Item = &Binding> + '_ {
        let ids = self.name_to_id.get(name).and_then(|id| self.bindings_index.get(id));
        ids.into_iter().flatten().filter_map(|bid| self.bindings.get(*bid as usize))
    }
}

impl InputSource for InputMap {
    fn is_held(&self, control: Control) -> bool { self.pressed(control.action_name()) }
    fn is_pressed(&self, control: Control) -> bool { self.just_pressed(control.action_name()) }
}
