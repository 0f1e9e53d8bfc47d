//! Pretty output formatting.

use departures_core::item::Item;

use crate::client::health::HealthStatus;

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!(
        "{} / {}\n  {} -> {} at {}\n  Seats: {}/{}",
        item.uuid,
        item.name,
        item.departure,
        item.destination,
        item.time,
        item.passenger,
        item.capacity
    );
    if item.is_overbooked() {
        output.push_str(" (overbooked)");
    }
    for passenger in &item.passengers {
        output.push_str(&format!("\n  - {}", passenger.namelist));
        if !passenger.comment.is_empty() {
            output.push_str(&format!(" ({})", passenger.comment));
        }
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format the health report for display.
pub fn format_health(health: &HealthStatus) -> String {
    let mut output = format!("Status: {}\n  Backend: {}", health.status, health.backend);
    if let Some(table) = &health.table {
        output.push_str(&format!("\n  Table: {}", table));
    }
    output
}

#[cfg(test)]
mod tests {
    use departures_core::item::{ItemKey, Passenger};

    use super::*;

    #[test]
    fn test_format_item() {
        let item = Item::new(ItemKey::new("t1", "bus-1"), "Tokyo", "Osaka", "10:00", 40)
            .with_passengers(
                2,
                vec![Passenger::new("Aiko", "window seat"), Passenger::new("Ren", "")],
            );

        assert_eq!(
            format_item(&item),
            "t1 / bus-1\n  Tokyo -> Osaka at 10:00\n  Seats: 2/40\n  - Aiko (window seat)\n  - Ren"
        );
    }

    #[test]
    fn test_format_item_overbooked() {
        let item = Item::new(ItemKey::new("t1", "bus-1"), "Tokyo", "Osaka", "10:00", 1)
            .with_passengers(3, vec![]);

        assert!(format_item(&item).contains("Seats: 3/1 (overbooked)"));
    }

    #[test]
    fn test_format_items_empty() {
        assert_eq!(format_items(&[]), "No items found.");
    }

    #[test]
    fn test_format_health() {
        let health = HealthStatus {
            status: "ok".to_string(),
            backend: "dynamodb".to_string(),
            table: Some("DepatureManageTable".to_string()),
        };

        assert_eq!(
            format_health(&health),
            "Status: ok\n  Backend: dynamodb\n  Table: DepatureManageTable"
        );
    }
}
