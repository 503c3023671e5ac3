// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three catalog collections a user can mark as favorite.
/// Each kind is backed by its own join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Planets,
    Vehicles,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [FavoriteKind::People, FavoriteKind::Planets, FavoriteKind::Vehicles];

    /// Path segment used in `/users/:id/favorites/:kind/:item_id`
    pub fn segment(&self) -> &'static str {
        match self {
            FavoriteKind::People => "people",
            FavoriteKind::Planets => "planets",
            FavoriteKind::Vehicles => "vehicles",
        }
    }

    /// Singular label used in client-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            FavoriteKind::People => "People",
            FavoriteKind::Planets => "Planet",
            FavoriteKind::Vehicles => "Vehicle",
        }
    }

    pub fn join_table(&self) -> &'static str {
        match self {
            FavoriteKind::People => "favorite_people",
            FavoriteKind::Planets => "favorite_planets",
            FavoriteKind::Vehicles => "favorite_vehicles",
        }
    }

    /// Foreign-key column in the join table pointing at the catalog row
    pub fn item_column(&self) -> &'static str {
        match self {
            FavoriteKind::People => "people_id",
            FavoriteKind::Planets => "planet_id",
            FavoriteKind::Vehicles => "vehicle_id",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for FavoriteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FavoriteKind::ALL
            .into_iter()
            .find(|kind| kind.segment() == s)
            .ok_or_else(|| format!("unknown favorite kind: {}", s))
    }
}
