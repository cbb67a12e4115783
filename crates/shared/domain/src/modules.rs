use crate::constants::{AUTH, CHAT, EXAMS, STUDY_ROOM};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

bitflags! {
    /// Represents the set of enabled application modules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModuleSet: u32 {
        const AUTH = 1 << 0;
        const CHAT = 1 << 1;
        const EXAMS = 1 << 2;
        const STUDY_ROOM = 1 << 3;

        const ALL = Self::AUTH.bits()
            | Self::CHAT.bits()
            | Self::EXAMS.bits()
            | Self::STUDY_ROOM.bits();
    }
}

impl From<&str> for ModuleSet {
    fn from(s: &str) -> Self {
        match s {
            AUTH => Self::AUTH,
            CHAT => Self::CHAT,
            EXAMS => Self::EXAMS,
            STUDY_ROOM => Self::STUDY_ROOM,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for ModuleSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for ModuleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
