mod poi;
mod route;
mod station;

pub use poi::*;
pub use route::*;
pub use station::*;
