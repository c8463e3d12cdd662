use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Accommodation,
    Transport,
    Food,
    Attractions,
    Shopping,
    Other,
}

/// Per-category spending in yen. The total is derived on every read, so it
/// can never disagree with the categories it sums.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    accommodation: u32,
    transport: u32,
    food: u32,
    attractions: u32,
    shopping: u32,
    other: u32,
}

impl Budget {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Transport => self.transport,
            Category::Food => self.food,
            Category::Attractions => self.attractions,
            Category::Shopping => self.shopping,
            Category::Other => self.other,
        }
    }

    pub fn set(&mut self, category: Category, amount: u32) {
        *self.slot(category) = amount;
    }

    pub fn add(&mut self, category: Category, amount: u32) {
        let slot = self.slot(category);
        *slot = slot.saturating_add(amount);
    }

    /// Floors at zero rather than underflowing, removing an item can never
    /// drive a category negative.
    pub fn subtract(&mut self, category: Category, amount: u32) {
        let slot = self.slot(category);
        *slot = slot.saturating_sub(amount);
    }

    pub fn total(&self) -> u32 {
        self.accommodation
            + self.transport
            + self.food
            + self.attractions
            + self.shopping
            + self.other
    }

    fn slot(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Accommodation => &mut self.accommodation,
            Category::Transport => &mut self.transport,
            Category::Food => &mut self.food,
            Category::Attractions => &mut self.attractions,
            Category::Shopping => &mut self.shopping,
            Category::Other => &mut self.other,
        }
    }
}
