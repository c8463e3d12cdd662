use std::{
    fmt::Display,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Clock time with minute resolution, stored as minutes since midnight.
/// Values past 24h are allowed so that a late departure can arrive "the next
/// day" without wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0 - rhs.0)
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0
    }
}

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.num_seconds_from_midnight() / 60)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// Rounds up to the next multiple of the given interval.
    /// A time already on the interval is returned unchanged.
    pub const fn ceil_to(&self, interval: Duration) -> Self {
        if interval.0 == 0 {
            return *self;
        }
        Self(self.0.div_ceil(interval.0) * interval.0)
    }

    pub fn to_hm_string(&self) -> String {
        let h = (self.0 / 60) % 24;
        let m = self.0 % 60;
        format!("{:02}:{:02}", h, m)
    }

    pub fn from_hm(time: &str) -> Option<Self> {
        const HOUR_TO_MIN: u32 = 60;
        let mut split = time.split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() || minutes >= 60 {
            return None;
        }
        Some(Self(hours * HOUR_TO_MIN + minutes))
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "09:05";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "12:30";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn valid_time_test_1() {
    let time = "00:30";
    assert_eq!(Time::from_hm(time).unwrap().as_minutes(), 30);
}

#[test]
fn valid_time_test_2() {
    let time = "01:30";
    assert_eq!(Time::from_hm(time).unwrap().as_minutes(), 90);
}

#[test]
fn invalid_time_test_1() {
    let time = "00:3a";
    assert!(Time::from_hm(time).is_none())
}

#[test]
fn invalid_time_test_2() {
    let time = "00:00:00";
    assert!(Time::from_hm(time).is_none())
}

#[test]
fn invalid_time_test_3() {
    let time = "10:75";
    assert!(Time::from_hm(time).is_none())
}

#[test]
fn ceil_to_test() {
    let time = Time::from_hm("09:10").unwrap();
    assert_eq!(
        time.ceil_to(Duration::from_minutes(15)),
        Time::from_hm("09:15").unwrap()
    );
    let on_boundary = Time::from_hm("09:30").unwrap();
    assert_eq!(on_boundary.ceil_to(Duration::from_minutes(15)), on_boundary);
}

/// A span of time in whole minutes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        if hours > 0 {
            f.write_fmt(format_args!("{}h {}m", hours, minutes))
        } else {
            f.write_fmt(format_args!("{}m", minutes))
        }
    }
}

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * 60)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

#[test]
fn duration_display_test() {
    assert_eq!(Duration::from_minutes(135).to_string(), "2h 15m");
    assert_eq!(Duration::from_minutes(45).to_string(), "45m");
}
