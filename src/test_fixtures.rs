//! Shared test fixtures: small city tables and record builders.

use chrono::NaiveDateTime;

use crate::dataset::{Dataset, Schema, TripRecord, parse_csv};
use crate::filter::City;

/// Eight Chicago-style rows spanning January, February, March and June.
///
/// Month mode is March; Monday and Friday tie at four trips each with a Monday
/// first; four trips start at 17:00-17:59.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Canal St,Clark St,Subscriber,Male,1985.0
1,2017-01-06 17:20:00,2017-01-06 17:25:00,300,Canal St,Lake St,Subscriber,Female,1990.0
2,2017-03-03 17:45:00,2017-03-03 17:47:00,120,Clark St,Canal St,Customer,,
3,2017-03-06 08:30:00,2017-03-06 08:45:00,900,Canal St,Clark St,Subscriber,Male,1985.0
4,2017-03-06 17:10:00,2017-03-06 17:17:30,450,Lake St,Clark St,Customer,,
5,2017-06-23 17:00:00,2017-06-23 17:01:00,60,Canal St,Clark St,Subscriber,Female,1972.0
6,2017-06-26 23:59:00,2017-06-27 00:24:00,1500,Lake St,Canal St,Subscriber,Male,2001.0
7,2017-02-03 00:15:00,2017-02-03 00:16:15,75,Clark St,Lake St,Customer,Female,1990.0
";

/// Washington-style rows: no gender or birth year columns, fractional durations.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 07:57:00,2017-03-06 08:05:09,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
1,2017-03-07 12:00:00,2017-03-07 12:06:42,402.549,Lincoln Memorial,Jefferson Memorial,Customer
2,2017-06-26 12:30:00,2017-06-26 12:50:00,1200.5,Lincoln Memorial,Jefferson Memorial,Customer
";

pub fn chicago() -> Dataset {
    parse_csv(City::Chicago, CHICAGO_CSV.as_bytes(), || {}).unwrap()
}

pub fn washington() -> Dataset {
    parse_csv(City::Washington, WASHINGTON_CSV.as_bytes(), || {}).unwrap()
}

/// A subscriber trip between two fixed stations.
pub fn trip(row: usize, start: &str, duration: f64) -> TripRecord {
    TripRecord {
        row,
        start_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
        trip_duration: duration,
        start_station: "A".to_string(),
        end_station: "B".to_string(),
        user_type: Some("Subscriber".to_string()),
        gender: None,
        birth_year: None,
    }
}

/// `count` trips on consecutive days of March 2017 at noon, 60 s apart in duration.
pub fn march_trips(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            trip(
                i,
                &format!("2017-03-{:02} 12:00:00", i % 28 + 1),
                60.0 * (i as f64 + 1.0),
            )
        })
        .collect();
    Dataset::new(City::Chicago, Schema::default(), records)
}
