use std::fmt;

/// World generator presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldType {
    Default,
    Flat,
    LargeBiomes,
    Amplified,
    Customized,
}

impl WorldType {
    pub const ALL: [WorldType; 5] = [
        WorldType::Default,
        WorldType::Flat,
        WorldType::LargeBiomes,
        WorldType::Amplified,
        WorldType::Customized,
    ];

    /// Name stored in `level.dat` as `generatorName`.
    pub fn generator_name(&self) -> &'static str {
        match self {
            WorldType::Default => "default",
            WorldType::Flat => "flat",
            WorldType::LargeBiomes => "largeBiomes",
            WorldType::Amplified => "amplified",
            WorldType::Customized => "customized",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorldType::Default => "Default",
            WorldType::Flat => "Flat",
            WorldType::LargeBiomes => "Large Biomes",
            WorldType::Amplified => "Amplified",
            WorldType::Customized => "Customized",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.generator_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for WorldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(WorldType::from_name("LARGEBIOMES"), Some(WorldType::LargeBiomes));
        assert_eq!(WorldType::from_name("flat"), Some(WorldType::Flat));
        assert_eq!(WorldType::from_name("debug_all_block_states"), None);
    }
}
