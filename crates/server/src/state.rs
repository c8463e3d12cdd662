use tabiji::atlas::Atlas;

pub struct AppState {
    pub atlas: Atlas,
}

impl AppState {
    pub fn new(atlas: Atlas) -> Self {
        Self { atlas }
    }
}
