pub mod atlas;
pub mod fixtures;
pub mod intercity;
pub mod route;
pub mod shared;
pub mod trip;

pub mod prelude {
    pub use crate::atlas::Atlas;
    pub use crate::fixtures::Fixtures;
    pub use crate::route::{RouteSegment, TravelEstimate, TravelMode};
    pub use crate::shared::geo::{Coordinate, Distance};
    pub use crate::trip::Trip;
}
