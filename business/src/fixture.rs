//! Seed data for the directory store.
//!
//! Stand-in for the "fetch all users" call of a real user-directory service.
//! The directory is populated from this once at startup and again on refresh.

use chrono::{DateTime, TimeZone, Utc};

use crate::user::{User, UserRole, UserStatus};

fn login(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    // All fixture timestamps are valid by construction.
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

/// The 8 seed records (ids 1–8).
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Juan Pérez".to_owned(),
            email: "juan.perez@example.com".to_owned(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            phone: Some("+1 234 567 8900".to_owned()),
            department: Some("IT".to_owned()),
            notes: Some("Primary system administrator".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Juan+Perez&background=007bff&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 15, 10, 30),
            selected: false,
        },
        User {
            id: 2,
            name: "María García".to_owned(),
            email: "maria.garcia@example.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Active,
            phone: Some("+1 234 567 8901".to_owned()),
            department: Some("Marketing".to_owned()),
            notes: Some("Digital marketing specialist".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Maria+Garcia&background=28a745&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 14, 15, 45),
            selected: false,
        },
        User {
            id: 3,
            name: "Carlos López".to_owned(),
            email: "carlos.lopez@example.com".to_owned(),
            role: UserRole::Moderator,
            status: UserStatus::Active,
            phone: Some("+1 234 567 8902".to_owned()),
            department: Some("Support".to_owned()),
            notes: Some("Content moderator".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Carlos+Lopez&background=ffc107&color=000000&size=40".to_owned(),
            last_login: login(2024, 1, 13, 9, 20),
            selected: false,
        },
        User {
            id: 4,
            name: "Ana Martínez".to_owned(),
            email: "ana.martinez@example.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Inactive,
            phone: Some("+1 234 567 8903".to_owned()),
            department: Some("Sales".to_owned()),
            notes: Some("Sales representative".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Ana+Martinez&background=dc3545&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 10, 14, 15),
            selected: false,
        },
        User {
            id: 5,
            name: "Luis Rodríguez".to_owned(),
            email: "luis.rodriguez@example.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Pending,
            phone: Some("+1 234 567 8904".to_owned()),
            department: Some("Human Resources".to_owned()),
            notes: Some("New hire pending activation".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Luis+Rodriguez&background=6c757d&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 12, 11, 30),
            selected: false,
        },
        User {
            id: 6,
            name: "Sofia Herrera".to_owned(),
            email: "sofia.herrera@example.com".to_owned(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            phone: Some("+1 234 567 8905".to_owned()),
            department: Some("Finance".to_owned()),
            notes: Some("Finance administrator".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Sofia+Herrera&background=17a2b8&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 15, 8, 45),
            selected: false,
        },
        User {
            id: 7,
            name: "Diego Morales".to_owned(),
            email: "diego.morales@example.com".to_owned(),
            role: UserRole::User,
            status: UserStatus::Active,
            phone: Some("+1 234 567 8906".to_owned()),
            department: Some("Engineering".to_owned()),
            notes: Some("Frontend developer".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Diego+Morales&background=6f42c1&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 14, 16, 20),
            selected: false,
        },
        User {
            id: 8,
            name: "Elena Vargas".to_owned(),
            email: "elena.vargas@example.com".to_owned(),
            role: UserRole::Moderator,
            status: UserStatus::Inactive,
            phone: Some("+1 234 567 8907".to_owned()),
            department: Some("Quality".to_owned()),
            notes: Some("Quality moderator".to_owned()),
            avatar: "https://ui-avatars.com/api/?name=Elena+Vargas&background=fd7e14&color=ffffff&size=40".to_owned(),
            last_login: login(2024, 1, 8, 13, 10),
            selected: false,
        },
    ]
}
