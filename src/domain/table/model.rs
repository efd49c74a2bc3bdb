//! Dining table snapshot

/// Read-only projection of a dining table: who owns it and how many
/// guests it seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    pub table_id: String,
    pub restaurant_id: String,
    pub capacity: u32,
}

impl TableSnapshot {
    pub fn belongs_to(&self, restaurant_id: &str) -> bool {
        self.restaurant_id == restaurant_id
    }

    pub fn can_seat(&self, guests: u32) -> bool {
        guests <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_and_capacity() {
        let table = TableSnapshot {
            table_id: "table-1".into(),
            restaurant_id: "rest-1".into(),
            capacity: 4,
        };
        assert!(table.belongs_to("rest-1"));
        assert!(!table.belongs_to("rest-2"));
        assert!(table.can_seat(4));
        assert!(!table.can_seat(5));
    }
}
