use super::types::*;
use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedInputConfig { pub input_map: InputMap, pub errors: Vec<String> }

#[derive(Debug, serde::Deserialize)]
struct ActionDecl { description: Option<String>, kind: Option<String> }

// BTreeMap keeps action ids and binding ids stable across runs.
#[derive(Debug, serde::Deserialize)]
struct RootToml { actions: Option<BTreeMap<String, ActionDecl>>, bindings: Option<BTreeMap<String, Vec<String>>>, #[serde(rename = "debug.bindings")] debug_bindings: Option<BTreeMap<String, Vec<String>>> }

pub fn parse_input_toml(raw: &str, debug_layer: bool) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) { Ok(r) => r, Err(e) => { result.errors.push(format!("Top-level parse: {e}")); return result; } };
    let mut input_map = InputMap { debug_layer, ..Default::default() };
    if let Some(map) = root.actions { for (name, decl) in map { if !validate_action_name(&name) { result.errors.push(format!("Invalid action name '{}': must be PascalCase", name)); continue; } if let Some(kind) = decl.kind.as_deref().filter(|k| *k != "Binary") { result.errors.push(format!("Action {} kind '{}' unsupported: only Binary actions exist", name, kind)); continue; } let id = ActionId(input_map.actions.len() as u16); input_map.actions.push(ActionMeta { id, name: name.clone(), description: decl.description.unwrap_or_default() }); input_map.name_to_id.insert(name, id); } }
    input_map.states = vec![ActionState::default(); input_map.actions.len()];

    // Merge bindings (normal + debug overlay if allowed)
    let mut all_bindings: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if let Some(b) = root.bindings { for (k, v) in b { all_bindings.entry(k).or_default().extend(v); } }
    if let Some(db) = root.debug_bindings { if debug_layer { for (k, v) in db { all_bindings.entry(k).or_default().extend(v); } } else { debug!(target: "input", "debug bindings present but debug layer disabled ({} actions skipped)", db.len()); } }

    for (action_name, list) in all_bindings { let Some(aid) = input_map.name_to_id.get(&action_name).copied() else { result.errors.push(format!("Binding references unknown action '{}'", action_name)); continue; }; for spec in &list { match parse_binding(spec) { Ok((mut keys, hold_secs)) => { keys.sort_by_key(|k| keycode_rank(*k)); let id = input_map.bindings.len() as u32; input_map.bindings_index.entry(aid).or_default().push(id); input_map.bindings.push(Binding { id, keys, hold_secs }); }, Err(err) => result.errors.push(format!("[binding {} '{}'] {err}", action_name, spec)), } } }
    input_map.bindings_runtime = vec![BindingRuntime::default(); input_map.bindings.len()];
    result.input_map = input_map; result
}

fn validate_action_name(name: &str) -> bool { let bytes = name.as_bytes(); if bytes.is_empty() { return false; } if !bytes[0].is_ascii_uppercase() { return false; } !name.chars().any(|c| !c.is_ascii_alphanumeric()) }

fn keycode_rank(k: KeyCode) -> u16 { use bevy::input::keyboard::KeyCode::*; match k { Space=>1, ArrowLeft=>20, ArrowRight=>21, ArrowUp=>22, KeyA=>100, KeyC=>101, KeyD=>102, KeyL=>103, KeyW=>104, ShiftLeft=>200, ControlLeft=>201, F1=>250, _=> 1000 } }

fn parse_binding(spec: &str) -> Result<(SmallVec<[KeyCode; 2]>, f32), String> { let mut keys: SmallVec<[KeyCode; 2]> = SmallVec::new(); let mut hold: f32 = 0.0; let mut seen: HashSet<KeyCode> = HashSet::new(); for part in spec.split('+') { let p = part.trim(); if p.is_empty() { continue; } let token = if let Some(rest) = p.strip_prefix("hold>") { let (secs_str, after) = rest.split_once(':').ok_or_else(|| format!("Malformed hold qualifier '{}': missing ':'", p))?; hold = secs_str.parse::<f32>().map_err(|_| format!("Invalid hold seconds '{}'", secs_str))?; if !(hold.is_finite() && hold >= 0.0) { return Err(format!("Hold seconds must be >= 0 (got {})", secs_str)); } parse_token(after)? } else { parse_token(p)? }; if !seen.insert(token) { return Err(format!("Duplicate key in chord: {:?}", token)); } keys.push(token); }
 if keys.is_empty() { return Err("Empty binding".into()); }
 Ok((keys, hold)) }

fn parse_token(s: &str) -> Result<KeyCode, String> { match s.strip_prefix("Key:") { Some(rest) => parse_keycode(rest), None => Err(format!("Unrecognized token '{}' (expected Key:<name>)", s)) } }

fn parse_keycode(name: &str) -> Result<KeyCode, String> { let kc = match name { "Space" => KeyCode::Space, "Left"|"ArrowLeft" => KeyCode::ArrowLeft, "Right"|"ArrowRight" => KeyCode::ArrowRight, "Up"|"ArrowUp" => KeyCode::ArrowUp, "A"|"KeyA" => KeyCode::KeyA, "C"|"KeyC" => KeyCode::KeyC, "D"|"KeyD" => KeyCode::KeyD, "L"|"KeyL" => KeyCode::KeyL, "W"|"KeyW" => KeyCode::KeyW, "ShiftLeft" => KeyCode::ShiftLeft, "ControlLeft" => KeyCode::ControlLeft, "F1" => KeyCode::F1, other => return Err(format!("Unsupported KeyCode '{}' (extend parser)", other)), }; Ok(kc) }
