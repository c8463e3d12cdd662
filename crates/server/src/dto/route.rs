use serde::{Deserialize, Serialize};
use tabiji::route::RouteSegment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSegmentDto {
    pub mode: String,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub minutes: u32,
    pub line: Option<String>,
    pub line_color: Option<String>,
}

impl From<RouteSegment> for RouteSegmentDto {
    fn from(segment: RouteSegment) -> Self {
        Self {
            mode: segment.mode.to_string(),
            from: segment.from,
            to: segment.to,
            distance_km: segment.distance.as_kilometers(),
            minutes: segment.duration.as_minutes(),
            line: segment.line.as_ref().map(|line| line.name.clone()),
            line_color: segment.line.as_ref().map(|line| line.color.clone()),
        }
    }
}
