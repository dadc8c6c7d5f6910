//! Rank bands.
//!
//! Each level in 1..=100 maps to exactly one military rank. Badge slugs are
//! frozen per rank and never derived from the display label, so renaming a
//! label does not mint a new badge or orphan the old one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Recruta,
    Soldado,
    Cabo,
    TerceiroSargento,
    SegundoSargento,
    PrimeiroSargento,
    Subtenente,
    Cadete,
    Aspirante,
    SegundoTenente,
    PrimeiroTenente,
    Capitao,
    Major,
    TenenteCoronel,
    Coronel,
    GeneralDeBrigada,
    GeneralDeDivisao,
    GeneralDeExercito,
    Marechal,
    Comandante,
    Lenda,
}

/// Inclusive level ranges, ordered and contiguous
pub const RANK_BANDS: &[(u32, u32, Rank)] = &[
    (1, 2, Rank::Recruta),
    (3, 5, Rank::Soldado),
    (6, 9, Rank::Cabo),
    (10, 14, Rank::TerceiroSargento),
    (15, 19, Rank::SegundoSargento),
    (20, 24, Rank::PrimeiroSargento),
    (25, 29, Rank::Subtenente),
    (30, 34, Rank::Cadete),
    (35, 39, Rank::Aspirante),
    (40, 44, Rank::SegundoTenente),
    (45, 49, Rank::PrimeiroTenente),
    (50, 55, Rank::Capitao),
    (56, 61, Rank::Major),
    (62, 67, Rank::TenenteCoronel),
    (68, 73, Rank::Coronel),
    (74, 79, Rank::GeneralDeBrigada),
    (80, 85, Rank::GeneralDeDivisao),
    (86, 90, Rank::GeneralDeExercito),
    (91, 95, Rank::Marechal),
    (96, 99, Rank::Comandante),
    (100, 100, Rank::Lenda),
];

impl Rank {
    /// Rank for a level, None outside the table
    pub fn from_level(level: u32) -> Option<Rank> {
        RANK_BANDS
            .iter()
            .find(|(min, max, _)| level >= *min && level <= *max)
            .map(|(_, _, rank)| *rank)
    }

    /// All ranks in ascending order
    pub fn all() -> impl Iterator<Item = Rank> {
        RANK_BANDS.iter().map(|(_, _, rank)| *rank)
    }

    /// Inclusive level range of this rank
    pub fn levels(self) -> (u32, u32) {
        RANK_BANDS
            .iter()
            .find(|(_, _, rank)| *rank == self)
            .map(|(min, max, _)| (*min, *max))
            .unwrap_or((0, 0))
    }

    pub fn slug(self) -> &'static str {
        match self {
            Rank::Recruta => "rank_recruta",
            Rank::Soldado => "rank_soldado",
            Rank::Cabo => "rank_cabo",
            Rank::TerceiroSargento => "rank_terceiro_sargento",
            Rank::SegundoSargento => "rank_segundo_sargento",
            Rank::PrimeiroSargento => "rank_primeiro_sargento",
            Rank::Subtenente => "rank_subtenente",
            Rank::Cadete => "rank_cadete",
            Rank::Aspirante => "rank_aspirante",
            Rank::SegundoTenente => "rank_segundo_tenente",
            Rank::PrimeiroTenente => "rank_primeiro_tenente",
            Rank::Capitao => "rank_capitao",
            Rank::Major => "rank_major",
            Rank::TenenteCoronel => "rank_tenente_coronel",
            Rank::Coronel => "rank_coronel",
            Rank::GeneralDeBrigada => "rank_general_de_brigada",
            Rank::GeneralDeDivisao => "rank_general_de_divisao",
            Rank::GeneralDeExercito => "rank_general_de_exercito",
            Rank::Marechal => "rank_marechal",
            Rank::Comandante => "rank_comandante",
            Rank::Lenda => "rank_lenda",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Recruta => "Recruta",
            Rank::Soldado => "Soldado",
            Rank::Cabo => "Cabo",
            Rank::TerceiroSargento => "Terceiro Sargento",
            Rank::SegundoSargento => "Segundo Sargento",
            Rank::PrimeiroSargento => "Primeiro Sargento",
            Rank::Subtenente => "Subtenente",
            Rank::Cadete => "Cadete",
            Rank::Aspirante => "Aspirante",
            Rank::SegundoTenente => "Segundo Tenente",
            Rank::PrimeiroTenente => "Primeiro Tenente",
            Rank::Capitao => "Capitão",
            Rank::Major => "Major",
            Rank::TenenteCoronel => "Tenente-Coronel",
            Rank::Coronel => "Coronel",
            Rank::GeneralDeBrigada => "General de Brigada",
            Rank::GeneralDeDivisao => "General de Divisão",
            Rank::GeneralDeExercito => "General de Exército",
            Rank::Marechal => "Marechal",
            Rank::Comandante => "Comandante",
            Rank::Lenda => "Lenda",
        }
    }

    /// Badge color by tier of the rank
    pub fn color(self) -> &'static str {
        let (min, _) = self.levels();
        match min {
            0..=9 => "#6b7b3a",
            10..=29 => "#8d6e63",
            30..=49 => "#607d8b",
            50..=73 => "#daa520",
            74..=99 => "#7c4dff",
            _ => "#dc143c",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
