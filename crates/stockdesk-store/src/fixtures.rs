//! # Seed Fixtures
//!
//! The fixed product set standing in for a backend data source.
//!
//! ## Coverage
//! The 20 records deliberately span the stock states the views care about:
//! - ids 1-8:   normal stock (`stock >= min_stock`)
//! - ids 9-16:  low stock (`0 < stock < min_stock`)
//! - ids 17-20: out of stock (`stock == 0`)
//!
//! Creation dates run one day apart so the newest-first ordering of the
//! loaded collection is observable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use stockdesk_core::Product;

/// Fixture timestamp: the given 2024 day at 10:00:00 UTC.
fn ts(month: u32, day: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("fixture dates are valid");
    Utc.from_utc_datetime(&date)
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    stock: i64,
    min_stock: i64,
    category: &str,
    sku: &str,
    month: u32,
    day: u32,
) -> Product {
    let created = ts(month, day);
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        stock,
        min_stock: Some(min_stock),
        category: category.to_string(),
        sku: sku.to_string(),
        created_at: created,
        updated_at: created,
    }
}

/// The full fixture set, in seeding order (oldest first; `load()` sorts).
pub fn seed_products() -> Vec<Product> {
    vec![
        // Normal stock
        seeded(
            "1",
            "Laptop Pro 15\"",
            "High-performance laptop for professionals",
            15_000_000,
            25,
            10,
            "Electronics",
            "LAP-PRO-15-001",
            1,
            15,
        ),
        seeded(
            "2",
            "Wireless Mouse",
            "Ergonomic wireless mouse with long battery life",
            250_000,
            150,
            50,
            "Accessories",
            "MOU-WLS-001",
            1,
            16,
        ),
        seeded(
            "3",
            "Mechanical Keyboard",
            "RGB mechanical keyboard with Cherry MX switches",
            1_200_000,
            45,
            20,
            "Accessories",
            "KEY-MEC-RGB-001",
            1,
            17,
        ),
        seeded(
            "4",
            "4K Monitor 27\"",
            "Ultra HD monitor with HDR support",
            5_000_000,
            30,
            15,
            "Electronics",
            "MON-4K-27-001",
            1,
            18,
        ),
        seeded(
            "5",
            "USB-C Hub",
            "Multi-port USB-C hub with HDMI and SD card reader",
            450_000,
            80,
            30,
            "Accessories",
            "HUB-USBC-001",
            1,
            19,
        ),
        seeded(
            "6",
            "Gaming Headset",
            "7.1 Surround sound gaming headset with RGB lighting",
            2_500_000,
            60,
            25,
            "Accessories",
            "HS-GAM-7.1-001",
            1,
            20,
        ),
        seeded(
            "7",
            "SSD 1TB NVMe",
            "High-speed NVMe SSD for gaming and professional use",
            2_000_000,
            100,
            40,
            "Hardware",
            "SSD-NVME-1TB-001",
            1,
            21,
        ),
        seeded(
            "8",
            "Webcam HD 1080p",
            "Professional webcam with auto-focus and noise cancellation",
            1_500_000,
            75,
            30,
            "Accessories",
            "CAM-HD-1080-001",
            1,
            22,
        ),
        // Low stock
        seeded(
            "9",
            "Wireless Earbuds",
            "True wireless earbuds with noise cancellation",
            1_800_000,
            5,
            15,
            "Accessories",
            "EAR-WLS-TWS-001",
            1,
            23,
        ),
        seeded(
            "10",
            "Tablet 10\"",
            "10-inch Android tablet with stylus support",
            8_000_000,
            8,
            20,
            "Electronics",
            "TAB-10-AND-001",
            1,
            24,
        ),
        seeded(
            "11",
            "RAM 16GB DDR4",
            "High-performance DDR4 RAM module",
            1_200_000,
            3,
            10,
            "Hardware",
            "RAM-DDR4-16GB-001",
            1,
            25,
        ),
        seeded(
            "12",
            "Graphics Card RTX 4060",
            "NVIDIA RTX 4060 for gaming and content creation",
            12_000_000,
            2,
            5,
            "Hardware",
            "GPU-RTX-4060-001",
            1,
            26,
        ),
        seeded(
            "13",
            "Smart Watch",
            "Fitness tracker with heart rate monitor",
            3_500_000,
            7,
            12,
            "Electronics",
            "WAT-SMT-FIT-001",
            1,
            27,
        ),
        seeded(
            "14",
            "External Hard Drive 2TB",
            "Portable external hard drive USB 3.0",
            1_800_000,
            4,
            15,
            "Hardware",
            "HDD-EXT-2TB-001",
            1,
            28,
        ),
        seeded(
            "15",
            "Office Suite License",
            "Professional office software suite license",
            2_500_000,
            9,
            20,
            "Software",
            "SW-OFF-SUITE-001",
            1,
            29,
        ),
        seeded(
            "16",
            "Laptop Stand",
            "Adjustable aluminum laptop stand for ergonomic setup",
            450_000,
            6,
            12,
            "Accessories",
            "STA-LAP-ADJ-001",
            1,
            30,
        ),
        // Out of stock
        seeded(
            "17",
            "Gaming Mouse Pad",
            "Large RGB gaming mouse pad with smooth surface",
            350_000,
            0,
            10,
            "Accessories",
            "PAD-GAM-RGB-001",
            2,
            1,
        ),
        seeded(
            "18",
            "Laptop Charger 65W",
            "Universal laptop charger with multiple tips",
            550_000,
            0,
            8,
            "Accessories",
            "CHG-LAP-65W-001",
            2,
            2,
        ),
        seeded(
            "19",
            "Anti-Virus Software",
            "Premium antivirus software 1-year license",
            800_000,
            0,
            5,
            "Software",
            "SW-AV-PREM-001",
            2,
            3,
        ),
        seeded(
            "20",
            "USB Flash Drive 64GB",
            "High-speed USB 3.0 flash drive",
            200_000,
            0,
            20,
            "Accessories",
            "USB-FLASH-64GB-001",
            2,
            4,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_twenty_products_with_unique_ids() {
        let products = seed_products();
        assert_eq!(products.len(), 20);

        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_stock_state_coverage() {
        let products = seed_products();
        let low: Vec<&str> = products
            .iter()
            .filter(|p| p.is_low_stock())
            .map(|p| p.id.as_str())
            .collect();
        let out: Vec<&str> = products
            .iter()
            .filter(|p| p.is_out_of_stock())
            .map(|p| p.id.as_str())
            .collect();

        // ids 9-20 are below their thresholds, 17-20 are fully depleted
        assert_eq!(low.len(), 12);
        assert_eq!(out, vec!["17", "18", "19", "20"]);
    }

    #[test]
    fn test_timestamps_equal_at_seed_and_strictly_ordered() {
        let products = seed_products();
        for p in &products {
            assert_eq!(p.created_at, p.updated_at);
        }
        for pair in products.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
    }
}
