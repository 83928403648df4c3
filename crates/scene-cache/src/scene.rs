//! Scene records and the grid cells that hold them.

use chrono::NaiveDate;
use geo_common::GridAddress;
use serde::{Deserialize, Serialize};

/// One acquisition of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scene {
    pub entity_id: String,
    pub address: GridAddress,
    pub date: NaiveDate,
}

impl Scene {
    pub fn new(entity_id: impl Into<String>, address: GridAddress, date: NaiveDate) -> Self {
        Self {
            entity_id: entity_id.into(),
            address,
            date,
        }
    }

    /// Ordering used by sorted scene lists: grid address, then date.
    pub fn sort_key(&self) -> (GridAddress, NaiveDate, &str) {
        (self.address, self.date, &self.entity_id)
    }
}

/// A grid cell and the scenes currently available in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub address: GridAddress,
    pub scenes: Vec<Scene>,
}

impl GridCell {
    pub fn new(address: GridAddress, scenes: Vec<Scene>) -> Self {
        Self { address, scenes }
    }

    /// Index of the first scene acquired on `date`.
    pub fn index_of_date(&self, date: NaiveDate) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2001, 6, d).unwrap()
    }

    #[test]
    fn test_index_of_date() {
        let address = GridAddress::new(29, 30);
        let cell = GridCell::new(
            address,
            vec![
                Scene::new("a", address, day(1)),
                Scene::new("b", address, day(17)),
            ],
        );
        assert_eq!(cell.index_of_date(day(17)), Some(1));
        assert_eq!(cell.index_of_date(day(2)), None);
    }

    #[test]
    fn test_sort_key_orders_by_address_then_date() {
        let early = Scene::new("z", GridAddress::new(1, 2), day(20));
        let late = Scene::new("a", GridAddress::new(1, 3), day(1));
        assert!(early.sort_key() < late.sort_key());
    }
}
