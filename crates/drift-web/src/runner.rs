use drift_engine::{CommandBuffer, DrawCommand, SnowConfig, SnowScene, StepStats};

/// Owns the scene and the recorded draw commands between frames.
///
/// The browser drives it from `requestAnimationFrame`: one `tick` per
/// display refresh, after which JavaScript reads the command buffer
/// straight out of WASM memory.
pub struct SceneRunner {
    scene: SnowScene,
    commands: CommandBuffer,
    last_stats: StepStats,
}

impl SceneRunner {
    pub fn new(config: SnowConfig) -> Self {
        let capacity = 1 + config.particle_count;
        Self {
            scene: SnowScene::new(config),
            commands: CommandBuffer::with_capacity(capacity),
            last_stats: StepStats::default(),
        }
    }

    /// Build a runner from an optional JSON config, falling back to defaults
    /// when the string is missing or malformed.
    pub fn from_json(config_json: Option<&str>) -> Self {
        let config = match config_json {
            Some(json) => SnowConfig::from_json(json).unwrap_or_else(|err| {
                log::warn!("snow config rejected ({}), using defaults", err);
                SnowConfig::default()
            }),
            None => SnowConfig::default(),
        };
        Self::new(config)
    }

    /// Forward a viewport size from the host element.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.on_resize(width, height);
    }

    /// Run one frame: simulate, then record the frame's draw commands.
    pub fn tick(&mut self, dt: f32) {
        self.last_stats = self.scene.simulate(dt);
        self.commands.clear_commands();
        self.scene.render(&mut self.commands);
    }

    pub fn scene(&self) -> &SnowScene {
        &self.scene
    }

    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    // ---- Pointer accessors for reads from WASM memory ----

    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.commands_ptr()
    }

    pub fn command_count(&self) -> u32 {
        self.commands.command_count()
    }

    pub fn command_floats(&self) -> &[f32] {
        self.commands.as_floats()
    }

    pub fn command_stride(&self) -> u32 {
        DrawCommand::FLOATS as u32
    }

    pub fn width(&self) -> u32 {
        self.scene.width()
    }

    pub fn height(&self) -> u32 {
        self.scene.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_engine::CommandKind;

    #[test]
    fn tick_before_resize_only_clears() {
        let mut runner = SceneRunner::new(SnowConfig::default());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.command_count(), 1);
        assert_eq!(runner.scene().frames(), 0);
    }

    #[test]
    fn tick_records_full_frame() {
        let config = SnowConfig {
            particle_count: 10,
            ..SnowConfig::default()
        };
        let mut runner = SceneRunner::new(config);
        runner.resize(32, 24);
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);

        assert_eq!(runner.scene().frames(), 2);
        assert_eq!(runner.command_count(), 1 + 10 + 32);
        assert_eq!(runner.command_floats().len(), (1 + 10 + 32) * 8);
        let first = DrawCommand {
            kind: runner.command_floats()[0],
            ..DrawCommand::default()
        };
        assert_eq!(first.kind(), Some(CommandKind::Clear));
    }

    #[test]
    fn bad_config_falls_back_to_defaults() {
        let runner = SceneRunner::from_json(Some("not json"));
        assert_eq!(runner.scene().config(), &SnowConfig::default());
    }

    #[test]
    fn json_config_is_applied() {
        let runner = SceneRunner::from_json(Some(r#"{ "particle_count": 3 }"#));
        assert_eq!(runner.scene().config().particle_count, 3);
    }
}
