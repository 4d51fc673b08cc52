#![cfg(test)]
use carebook_core::clock::FixedClock;
use carebook_core::hospital::HospitalService;
use carebook_core::registry::Registry;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
}

/// A fresh hospital whose clock is pinned to [`today`].
pub fn hospital() -> HospitalService {
    HospitalService::new(Registry::new(), Box::new(FixedClock(today())))
}
