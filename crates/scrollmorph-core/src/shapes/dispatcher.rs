//! Shape dispatcher.
//!
//! Maps a [`ShapeKind`] to its generator so a sequence can be described by
//! name (from config or JavaScript) and built in one pass.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MorphError;
use crate::point_set::PointSet;
use crate::shapes::primitives::*;

/// The authored shapes, in the order they appear on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Cloud,
    TorusSlash,
    Ribbon,
    Sphere,
    QuestionMark,
    BarChart,
}

impl ShapeKind {
    /// Default morph order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cloud,
        ShapeKind::TorusSlash,
        ShapeKind::Ribbon,
        ShapeKind::Sphere,
        ShapeKind::QuestionMark,
        ShapeKind::BarChart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cloud => "cloud",
            ShapeKind::TorusSlash => "torus-slash",
            ShapeKind::Ribbon => "ribbon",
            ShapeKind::Sphere => "sphere",
            ShapeKind::QuestionMark => "question-mark",
            ShapeKind::BarChart => "bar-chart",
        }
    }

    /// Whether the generator draws from the random source.
    pub fn is_random(self) -> bool {
        !matches!(self, ShapeKind::Sphere)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == key)
            .ok_or_else(|| MorphError::UnknownShape(s.to_string()))
    }
}

/// Generate `n` points for `kind`.
pub fn generate<R: Rng + ?Sized>(kind: ShapeKind, n: usize, rng: &mut R) -> PointSet {
    match kind {
        ShapeKind::Cloud => shape_cloud(n, rng),
        ShapeKind::TorusSlash => shape_torus_slash(n, rng),
        ShapeKind::Ribbon => shape_ribbon(n, rng),
        ShapeKind::Sphere => shape_sphere(n),
        ShapeKind::QuestionMark => shape_question_mark(n, rng),
        ShapeKind::BarChart => shape_bar_chart(n, rng),
    }
}
