//! Pokémon record - the subset of a PokeAPI `/pokemon/{name}` payload that gets displayed

use crate::error::FetchError;
use serde::Deserialize;

/// Number of positional base stats in a payload
pub const STAT_COUNT: usize = 6;

/// Stat positions, in payload order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; STAT_COUNT] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    /// Index into `stats[]`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Hp => "HP:",
            StatKind::Attack => "Attack:",
            StatKind::Defense => "Defense:",
            StatKind::SpecialAttack => "Special Attack:",
            StatKind::SpecialDefense => "Special Defense:",
            StatKind::Speed => "Speed:",
        }
    }
}

/// Decoded lookup result. Lives for one display update only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    /// Type names, in payload order
    pub types: Vec<String>,
    /// Base stats, indexed by `StatKind::index`
    pub stats: [u32; STAT_COUNT],
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
}

impl PokemonRecord {
    pub fn stat(&self, kind: StatKind) -> u32 {
        self.stats[kind.index()]
    }

    /// Decode a response body. Any shape mismatch is `Malformed`.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let raw: RawPokemon =
            serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        Self::try_from(raw)
    }
}

#[derive(Debug, Deserialize)]
struct RawPokemon {
    types: Vec<RawTypeSlot>,
    stats: Vec<RawStat>,
    height: u32,
    weight: u32,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: u32,
}

impl TryFrom<RawPokemon> for PokemonRecord {
    type Error = FetchError;

    fn try_from(raw: RawPokemon) -> Result<Self, Self::Error> {
        if raw.stats.len() < STAT_COUNT {
            return Err(FetchError::Malformed(format!(
                "expected {} stats, got {}",
                STAT_COUNT,
                raw.stats.len()
            )));
        }

        let mut stats = [0u32; STAT_COUNT];
        for (slot, stat) in stats.iter_mut().zip(&raw.stats) {
            *slot = stat.base_stat;
        }

        Ok(Self {
            types: raw.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats,
            height: raw.height,
            weight: raw.weight,
        })
    }
}
