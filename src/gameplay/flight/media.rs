//! Audio clips and particle emitters for the rocket, driven through [`MediaCue`].
use std::path::{Path, PathBuf};

use bevy::prelude::*;

use super::controller::FlightSetupError;
use super::ports::{Clip, Effect, MediaCue};
use crate::core::components::LevelEntity;
use crate::core::config::CueConfig;

/// Validated clip asset paths.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CuePaths {
    pub boost: String,
    pub victory: String,
    pub death: String,
}

impl CuePaths {
    pub fn from_config(cfg: &CueConfig) -> Result<Self, FlightSetupError> {
        let check = |path: &str, name: &'static str| {
            if path.trim().is_empty() {
                Err(FlightSetupError::MissingCue(name))
            } else {
                Ok(path.trim().to_string())
            }
        };
        Ok(Self {
            boost: check(&cfg.boost, "boost")?,
            victory: check(&cfg.victory, "victory")?,
            death: check(&cfg.death, "death")?,
        })
    }

    /// Every clip must exist under `asset_root` before the game starts.
    pub fn verify(&self, asset_root: &Path) -> Result<(), FlightSetupError> {
        for (cue, path) in [
            ("boost", &self.boost),
            ("victory", &self.victory),
            ("death", &self.death),
        ] {
            let full = asset_root.join(path);
            if !full.is_file() {
                return Err(FlightSetupError::MissingCueFile { cue, path: full });
            }
        }
        Ok(())
    }
}

/// Directory the asset server reads from: `BEVY_ASSET_ROOT`, else the crate
/// root under cargo, else next to the executable; plus `assets/`.
pub fn asset_root() -> PathBuf {
    let base = std::env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("assets")
}

/// Loaded clip handles. Default (empty) handles when no asset server is present.
#[derive(Resource, Debug, Clone, Default)]
pub struct CueSet {
    boost: Handle<AudioSource>,
    victory: Handle<AudioSource>,
    death: Handle<AudioSource>,
}

impl CueSet {
    pub fn handle(&self, clip: Clip) -> Handle<AudioSource> {
        match clip {
            Clip::Boost => self.boost.clone(),
            Clip::Victory => self.victory.clone(),
            Clip::Death => self.death.clone(),
        }
    }
}

pub fn load_cue_set(
    mut commands: Commands,
    paths: Option<Res<CuePaths>>,
    assets: Option<Res<AssetServer>>,
) {
    let (Some(paths), Some(assets)) = (paths, assets) else {
        debug!(target: "flight", "audio cues unavailable (no paths or asset server)");
        return;
    };
    commands.insert_resource(CueSet {
        boost: assets.load(paths.boost.clone()),
        victory: assets.load(paths.victory.clone()),
        death: assets.load(paths.death.clone()),
    });
}

/// The rocket's single audio channel.
#[derive(Component, Debug, Default)]
pub struct Voice {
    current: Option<Entity>,
}

impl Voice {
    pub fn current(&self) -> Option<Entity> {
        self.current
    }
}

/// Marker on spawned audio player entities owned by a [`Voice`].
#[derive(Component, Debug)]
pub struct RocketVoice {
    pub clip: Clip,
}

/// Active particle emitters, keyed by the elapsed time they started at.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct EffectEmitters {
    pub boost: Option<f32>,
    pub victory: Option<f32>,
    pub death: Option<f32>,
}

impl EffectEmitters {
    fn slot(&mut self, effect: Effect) -> &mut Option<f32> {
        match effect {
            Effect::Boost => &mut self.boost,
            Effect::Victory => &mut self.victory,
            Effect::Death => &mut self.death,
        }
    }
}

/// [`MediaCue`] over one rocket's voice and emitters.
pub struct RocketMedia<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    cues: &'a CueSet,
    voice: &'a mut Voice,
    effects: &'a mut EffectEmitters,
    now: f32,
}

impl<'a, 'w, 's> RocketMedia<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        cues: &'a CueSet,
        voice: &'a mut Voice,
        effects: &'a mut EffectEmitters,
        now: f32,
    ) -> Self {
        Self {
            commands,
            cues,
            voice,
            effects,
            now,
        }
    }

    fn play(&mut self, clip: Clip, settings: PlaybackSettings) {
        self.stop();
        let id = self
            .commands
            .spawn((
                Name::new(format!("Voice:{clip:?}")),
                RocketVoice { clip },
                LevelEntity,
                AudioPlayer::new(self.cues.handle(clip)),
                settings,
            ))
            .id();
        self.voice.current = Some(id);
    }
}

impl MediaCue for RocketMedia<'_, '_, '_> {
    fn play_loop(&mut self, clip: Clip) {
        self.play(clip, PlaybackSettings::LOOP);
    }
    fn play_once(&mut self, clip: Clip) {
        self.play(clip, PlaybackSettings::DESPAWN);
    }
    fn is_playing(&self) -> bool {
        self.voice.current.is_some()
    }
    fn stop(&mut self) {
        if let Some(e) = self.voice.current.take() {
            self.commands.entity(e).try_despawn();
        }
    }
    fn start_effect(&mut self, effect: Effect) {
        let now = self.now;
        self.effects.slot(effect).get_or_insert(now);
    }
    fn stop_effect(&mut self, effect: Effect) {
        *self.effects.slot(effect) = None;
    }
}

/// Forget voices whose one-shot player despawned itself.
pub fn reap_finished_voices(mut voices: Query<&mut Voice>, players: Query<(), With<RocketVoice>>) {
    for mut voice in &mut voices {
        if let Some(e) = voice.current {
            if players.get(e).is_err() {
                voice.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cue_path_is_rejected() {
        let mut cfg = CueConfig::default();
        assert!(CuePaths::from_config(&cfg).is_ok());
        cfg.victory = "  ".into();
        assert_eq!(
            CuePaths::from_config(&cfg),
            Err(FlightSetupError::MissingCue("victory"))
        );
    }

    #[test]
    fn cue_file_must_exist_under_asset_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let audio = dir.path().join("audio");
        std::fs::create_dir_all(&audio).expect("mkdir");
        for name in ["boost.wav", "victory.wav"] {
            std::fs::write(audio.join(name), b"RIFF").expect("write clip");
        }
        let mut cfg = CueConfig {
            death: "audio/definitely_not_here.wav".into(),
            ..Default::default()
        };
        let paths = CuePaths::from_config(&cfg).expect("non-empty paths");
        assert_eq!(
            paths.verify(dir.path()),
            Err(FlightSetupError::MissingCueFile {
                cue: "death",
                path: dir.path().join("audio/definitely_not_here.wav"),
            })
        );

        cfg.death = "audio/victory.wav".into();
        let paths = CuePaths::from_config(&cfg).expect("non-empty paths");
        assert_eq!(paths.verify(dir.path()), Ok(()));
    }

    #[test]
    fn shipped_cues_exist() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let paths = CuePaths::from_config(&CueConfig::default()).expect("default cues");
        assert_eq!(paths.verify(&root), Ok(()));
    }
}
