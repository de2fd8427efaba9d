// ─── Recognised Versions ───
// Game versions the viewer knows how to drive, newest first.

use std::fmt;

const KNOWN_VERSIONS: &[&str] = &[
    "1.12.2", "1.12.1", "1.12", "17w06a", "1.11.2", "1.11.1", "1.11", "16w40a", "1.10.2",
    "1.10.1", "1.10", "16w20a", "1.9.4", "1.9.2", "1.9.1", "1.9", "15w46a", "1.8.9", "1.8.8",
    "1.8.3", "1.8.1", "1.8", "14w21a", "1.7.10", "1.7.9", "1.7.5", "1.7.4", "1.7.2", "13w36a",
    "1.6.4", "1.6.2", "1.6.1", "1.5.2", "1.5.1", "1.4.7", "1.4.6", "1.4.5", "1.4.2", "1.3.2",
    "1.3.1", "1.2.5", "1.2.4", "1.1", "1.0", "b1.9-pre6", "b1.8.1",
];

/// A game version matched against [`KNOWN_VERSIONS`], or [`RecognisedVersion::UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognisedVersion {
    name: &'static str,
    known: bool,
}

impl RecognisedVersion {
    pub const UNKNOWN: RecognisedVersion = RecognisedVersion {
        name: "UNKNOWN",
        known: false,
    };

    pub fn from_version_id(version_id: &str) -> Self {
        KNOWN_VERSIONS
            .iter()
            .copied()
            .find(|known| *known == version_id)
            .map(|name| RecognisedVersion { name, known: true })
            .unwrap_or(Self::UNKNOWN)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_known(&self) -> bool {
        self.known
    }
}

impl fmt::Display for RecognisedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_is_recognised() {
        let v = RecognisedVersion::from_version_id("1.12");
        assert!(v.is_known());
        assert_eq!(v.name(), "1.12");
    }

    #[test]
    fn unknown_id_maps_to_sentinel() {
        let v = RecognisedVersion::from_version_id("my-modpack");
        assert_eq!(v, RecognisedVersion::UNKNOWN);
        assert_eq!(v.name(), "UNKNOWN");
    }
}
