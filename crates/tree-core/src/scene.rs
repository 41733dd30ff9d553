use rand::prelude::*;

use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::population::{Population, PopulationKind};
use crate::text::TextRasterSampler;

/// Every population of the tree with all three formations generated.
///
/// Formations are built once here and only the word formation is ever
/// regenerated (on message change).
pub struct TreeScene {
    config: SceneConfig,
    text: TextRasterSampler,
    populations: Vec<Population>,
    rng: StdRng,
}

impl TreeScene {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build with a caller-supplied generator (seeded scenes in tests).
    pub fn with_rng(config: SceneConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let text = TextRasterSampler::default();
        let cloud = text.trace(&config.text.message);
        if cloud.is_empty() {
            log::warn!(
                "[scene] message {:?} has no visible glyphs; word formation collapses to the origin",
                config.text.message
            );
        }

        let mut populations = Vec::with_capacity(config.ornament_types.len() + 3);
        populations.push(Population::foliage(&config, &cloud, &mut rng));
        for ty in &config.ornament_types {
            populations.push(Population::ornaments(&config, ty, &cloud, &mut rng));
        }
        populations.push(Population::pearls(&config, &cloud, &mut rng));
        populations.push(Population::star(&config, &mut rng));

        let scene = Self {
            config,
            text,
            populations,
            rng,
        };
        log::info!(
            "[scene] built {} populations, {} elements",
            scene.populations.len(),
            scene.element_count()
        );
        Ok(scene)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn message(&self) -> &str {
        &self.config.text.message
    }

    /// Swap the message and regenerate the word formation of every
    /// population. Chaos and tree targets are kept. Returns whether anything
    /// changed.
    pub fn set_message(&mut self, message: &str) -> bool {
        if message == self.config.text.message {
            return false;
        }
        self.config.text.message = message.to_string();
        let cloud = self.text.trace(message);
        for pop in &mut self.populations {
            pop.resample_words(&self.config, &cloud, &mut self.rng);
        }
        log::info!("[scene] word formation rebuilt for {:?}", message);
        true
    }

    pub fn populations(&self) -> &[Population] {
        &self.populations
    }

    pub fn populations_mut(&mut self) -> &mut [Population] {
        &mut self.populations
    }

    pub fn by_kind(&self, kind: PopulationKind) -> impl Iterator<Item = &Population> {
        self.populations.iter().filter(move |p| p.kind == kind)
    }

    pub fn element_count(&self) -> usize {
        self.populations.iter().map(Population::len).sum()
    }
}
