use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    atlas::{Line, TransitMode},
    route::{transit_time, walk_time},
    shared::{geo::Distance, time::Duration},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentMode {
    Walk,
    Metro,
    Bus,
    Train,
}

impl From<TransitMode> for SegmentMode {
    fn from(value: TransitMode) -> Self {
        match value {
            TransitMode::Metro => Self::Metro,
            TransitMode::Bus => Self::Bus,
            TransitMode::Train => Self::Train,
        }
    }
}

impl Display for SegmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walk => f.write_str("Walk"),
            Self::Metro => f.write_str("Metro"),
            Self::Bus => f.write_str("Bus"),
            Self::Train => f.write_str("Train"),
        }
    }
}

/// Presentation handle for the line a transit segment rides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRef {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<&Line> for LineRef {
    fn from(value: &Line) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            color: value.color.to_string(),
        }
    }
}

/// One leg of a suggested route. Computed on demand, never stored in the
/// reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub mode: SegmentMode,
    pub from: String,
    pub to: String,
    pub distance: Distance,
    pub duration: Duration,
    pub line: Option<LineRef>,
}

impl RouteSegment {
    pub(crate) fn walk(from: String, to: String, distance: Distance) -> Self {
        Self {
            mode: SegmentMode::Walk,
            from,
            to,
            distance,
            duration: walk_time(distance),
            line: None,
        }
    }

    pub(crate) fn transit(from: String, to: String, distance: Distance, line: &Line) -> Self {
        Self {
            mode: line.mode.into(),
            from,
            to,
            distance,
            duration: transit_time(distance),
            line: Some(line.into()),
        }
    }
}
