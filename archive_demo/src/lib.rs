//! Fixtures shared by the tests of all crates.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use uuid::{uuid, Uuid};

pub mod contact;
pub mod user;

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");

pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap());
