//! Seed data loaded at startup.

use std::collections::HashMap;

use schoolkit_core::{CartEntry, Class, EquipmentItem, Grade, School, UserId};

use super::catalog::Catalog;
use super::users::{UserRecord, UserRegistry};

/// The built-in user registry.
#[must_use]
pub fn users() -> UserRegistry {
    UserRegistry::new(vec![
        UserRecord::new("1", "avner", "2004"),
        UserRecord::new("2", "admin", "1234"),
        UserRecord::new("3", "noam", "1919"),
    ])
}

/// The built-in catalog tables.
#[must_use]
pub fn catalog() -> Catalog {
    let schools = vec![
        School::new("1", "Ben Gurion"),
        School::new("2", "ORT"),
        School::new("3", "Brener"),
        School::new("4", "Herzel"),
        School::new("5", "Begin"),
    ];

    let grades = (9..=12)
        .map(|n| Grade::new(n.to_string(), format!("{n}th Grade")))
        .collect();

    let classes = (1..=8)
        .map(|n| Class::new(n.to_string(), format!("Class {n}")))
        .collect();

    let equipment = HashMap::from([
        (
            "1-9-1".to_string(),
            vec![
                EquipmentItem::new("101", "Notebook (Ruled)", 5),
                EquipmentItem::new("102", "Pencil", 12),
                EquipmentItem::new("103", "Math Textbook - Algebra I", 1),
            ],
        ),
        (
            "2-12-5".to_string(),
            vec![
                EquipmentItem::new("201", "Laptop (Required)", 1),
                EquipmentItem::new("202", "Engineering Calculator", 1),
                EquipmentItem::new("203", "Physics Textbook - Advanced", 1),
            ],
        ),
    ]);

    let default_equipment = vec![
        EquipmentItem::new("901", "Binder (3-ring)", 2),
        EquipmentItem::new("902", "Highlighters", 4),
    ];

    Catalog::new(schools, grades, classes, equipment, default_equipment)
}

/// Carts the first two users start with.
#[must_use]
pub fn carts() -> Vec<(UserId, Vec<CartEntry>)> {
    vec![
        (
            UserId::new("1"),
            vec![CartEntry {
                id: "cart-1".into(),
                timestamp: 1_700_000_000,
                school: School::new("1", "Ben Gurion"),
                grade: Grade::new("9", "9th Grade"),
                class: Some(Class::new("1", "Class 1")),
                items: vec![
                    EquipmentItem::new("101", "Notebook", 2),
                    EquipmentItem::new("102", "Engineering Calculator", 1),
                    EquipmentItem::new("103", "Physics Textbook - Advanced", 1),
                ],
            }],
        ),
        (
            UserId::new("2"),
            vec![CartEntry {
                id: "cart-2".into(),
                timestamp: 1_700_000_001,
                school: School::new("2", "ORT"),
                grade: Grade::new("12", "12th Grade"),
                class: Some(Class::new("5", "Class 5")),
                items: vec![
                    EquipmentItem::new("201", "Laptop (Required)", 1),
                    EquipmentItem::new("202", "Engineering Calculator", 1),
                    EquipmentItem::new("203", "Physics Textbook - Beginners", 1),
                ],
            }],
        ),
    ]
}
