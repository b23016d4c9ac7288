//! Demo seed dataset: three identities and five stores.

use chrono::NaiveDate;
use ratehub_auth::{IdentityDirectory, IdentityRecord};
use ratehub_core::{Identity, Rating, RatingValue, Role, Store, StoreId, UserId};

/// The identities the demo backend knows at startup.
pub fn directory() -> IdentityDirectory {
    IdentityDirectory::from_records(vec![
        IdentityRecord::new(
            Identity::new(
                UserId::new("admin-1"),
                "System Administrator",
                "admin@example.com",
                Role::Admin,
                "123 Admin Street, Admin City",
            ),
            "Admin@123",
        ),
        IdentityRecord::new(
            Identity::new(
                UserId::new("user-1"),
                "John Regular User",
                "user@example.com",
                Role::User,
                "456 User Avenue, User Town",
            ),
            "User@123",
        ),
        IdentityRecord::new(
            Identity::new(
                UserId::new("store-1"),
                "Store Owner",
                "store@example.com",
                Role::StoreOwner,
                "789 Store Boulevard, Store City",
            )
            .with_store(StoreId::new("1")),
            "Store@123",
        ),
    ])
}

/// The store catalog at startup.
pub fn stores() -> Vec<Store> {
    let mut grocery = Store::new(
        StoreId::new("1"),
        "Grocery Mart",
        "contact@grocerymart.com",
        "123 Market Street, New York, NY",
    )
    .with_owner(UserId::new("store-1"));
    grocery.rate(rating("user-1", 4, 2023, 8, 15));
    grocery.rate(rating("admin-1", 5, 2023, 9, 20));

    let mut tech = Store::new(
        StoreId::new("2"),
        "Tech Haven",
        "info@techhaven.com",
        "456 Electronics Avenue, San Francisco, CA",
    );
    tech.rate(rating("user-1", 3, 2023, 7, 10));

    let fashion = Store::new(
        StoreId::new("3"),
        "Fashion Boutique",
        "service@fashionboutique.com",
        "789 Style Street, Miami, FL",
    );

    let mut home = Store::new(
        StoreId::new("4"),
        "Home Improvement Center",
        "help@homeimprovementcenter.com",
        "101 Builder Lane, Chicago, IL",
    );
    home.rate(rating("user-1", 5, 2023, 10, 5));

    let mut pets = Store::new(
        StoreId::new("5"),
        "Pets Paradise",
        "care@petsparadise.com",
        "202 Animal Avenue, Seattle, WA",
    );
    pets.rate(rating("admin-1", 4, 2023, 9, 12));

    vec![grocery, tech, fashion, home, pets]
}

fn rating(user: &str, value: u8, year: i32, month: u32, day: u32) -> Rating {
    Rating::new(
        UserId::new(user),
        RatingValue::clamped(value),
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    )
}
