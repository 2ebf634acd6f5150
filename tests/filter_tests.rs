#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use slot_checker::config::{Config, TelegramTarget};
use slot_checker::models::Slot;
use slot_checker::services::filter::matches;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// June 2022: the 14th is a Tuesday, the 18th a Saturday.
fn config() -> Config {
    Config {
        from_date: Some(date(2022, 6, 1)),
        to_date: date(2022, 6, 30),
        from_time: Some(time(6, 0)),
        to_time: Some(time(21, 0)),
        days: BTreeSet::from([1, 2, 3, 4, 5]),
        person_number: 1,
        refresh: 30,
        telegram: TelegramTarget {
            token: "t".to_owned(),
            chat_id: 42,
        },
    }
}

fn slot(d: NaiveDate, t: NaiveTime, places: u32) -> Slot {
    Slot {
        location: "Mairie du 12e".to_owned(),
        address: "130 avenue Daumesnil".to_owned(),
        date: d,
        time: t,
        places,
    }
}

#[test]
fn a_weekday_slot_inside_both_windows_matches() {
    assert!(matches(&slot(date(2022, 6, 14), time(10, 20), 1), &config()));
}

#[test]
fn date_bounds_are_inclusive() {
    let config = config();
    // 1st is a Wednesday, 30th a Thursday
    assert!(matches(&slot(date(2022, 6, 1), time(10, 0), 1), &config));
    assert!(matches(&slot(date(2022, 6, 30), time(10, 0), 1), &config));
}

#[test]
fn one_day_outside_the_date_window_does_not_match() {
    let config = config();
    // 31/05 is a Tuesday, 01/07 a Friday; only the date disqualifies them
    assert!(!matches(&slot(date(2022, 5, 31), time(10, 0), 1), &config));
    assert!(!matches(&slot(date(2022, 7, 1), time(10, 0), 1), &config));
}

#[test]
fn time_bounds_are_inclusive() {
    let config = config();
    assert!(matches(&slot(date(2022, 6, 14), time(6, 0), 1), &config));
    assert!(matches(&slot(date(2022, 6, 14), time(21, 0), 1), &config));
}

#[test]
fn one_minute_outside_the_time_window_does_not_match() {
    let config = config();
    assert!(!matches(&slot(date(2022, 6, 14), time(5, 59), 1), &config));
    assert!(!matches(&slot(date(2022, 6, 14), time(21, 1), 1), &config));
}

#[test]
fn weekday_outside_the_day_set_does_not_match() {
    // Saturday the 18th, inside both windows otherwise
    assert!(!matches(&slot(date(2022, 6, 18), time(10, 0), 1), &config()));
}

#[test]
fn sunday_matches_when_configured() {
    let mut config = config();
    config.days = BTreeSet::from([6, 7]);
    // the 19th is a Sunday
    assert!(matches(&slot(date(2022, 6, 19), time(10, 0), 1), &config));
    assert!(!matches(&slot(date(2022, 6, 14), time(10, 0), 1), &config));
}

#[test]
fn capacity_below_person_number_does_not_match() {
    let mut config = config();
    config.person_number = 2;
    assert!(!matches(&slot(date(2022, 6, 14), time(10, 0), 1), &config));
    assert!(matches(&slot(date(2022, 6, 14), time(10, 0), 2), &config));
    assert!(matches(&slot(date(2022, 6, 14), time(10, 0), 3), &config));
}

#[test]
fn open_bounds_do_not_constrain() {
    let mut config = config();
    config.from_date = None;
    config.from_time = None;
    config.to_time = None;

    // far in the past, late at night: still fine with the bounds open
    assert!(matches(&slot(date(2022, 6, 2), time(23, 30), 1), &config));
    assert!(matches(&slot(date(2021, 1, 4), time(0, 0), 1), &config));
    // the upper date bound still applies
    assert!(!matches(&slot(date(2022, 7, 4), time(10, 0), 1), &config));
}

#[test]
fn each_predicate_is_independent() {
    let config = config();
    let good = slot(date(2022, 6, 14), time(10, 0), 1);
    assert!(matches(&good, &config));

    let mut wrong_date = good.clone();
    wrong_date.date = date(2022, 7, 5);
    assert!(!matches(&wrong_date, &config));

    let mut wrong_time = good.clone();
    wrong_time.time = time(22, 0);
    assert!(!matches(&wrong_time, &config));

    let mut wrong_places = good;
    wrong_places.places = 0;
    assert!(!matches(&wrong_places, &config));
}
