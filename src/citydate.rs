use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

const DAYS_PER_MONTH: i32 = 25;
const MONTHS_PER_YEAR: i32 = 12;
const DAYS_PER_YEAR: i32 = DAYS_PER_MONTH * MONTHS_PER_YEAR;

/// A date on the in-game calendar
///
/// The simulation runs on a simplified calendar where every month lasts 25
/// days, so a year is 300 days long. Saves store the year the city was
/// founded and the number of days elapsed since then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CityDate {
    year: u16,
    month: u8,
    day: u8,
}

impl PartialOrd for CityDate {
    fn partial_cmp(&self, other: &CityDate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CityDate {
    fn cmp(&self, other: &CityDate) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl CityDate {
    /// Create a new date from year, month, and day parts
    ///
    /// Will return `None` if the date does not exist
    ///
    /// ```
    /// use sc2ksave::CityDate;
    /// assert_eq!(CityDate::new(1900, 1, 1), CityDate::parse_from_str("1900.1.1"));
    /// assert!(CityDate::new(0, 1, 1).is_none());
    /// assert!(CityDate::new(1900, 0, 3).is_none());
    /// assert!(CityDate::new(1900, 1, 0).is_none());
    /// assert!(CityDate::new(1900, 13, 1).is_none());
    /// assert!(CityDate::new(1900, 2, 26).is_none());
    /// ```
    pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        let month_ok = (1..=MONTHS_PER_YEAR).contains(&i32::from(month));
        let day_ok = (1..=DAYS_PER_MONTH).contains(&i32::from(day));
        if year != 0 && month_ok && day_ok {
            Some(CityDate { year, month, day })
        } else {
            None
        }
    }

    /// The date reached after `days_elapsed` days in a city founded at the
    /// start of `founded`
    ///
    /// ```
    /// use sc2ksave::CityDate;
    /// let date = CityDate::from_elapsed(1900, 326).unwrap();
    /// assert_eq!(date.sc2k_fmt(), "1901.2.2");
    /// ```
    pub fn from_elapsed(founded: i32, days_elapsed: i32) -> Option<Self> {
        if days_elapsed < 0 {
            return None;
        }

        let start = CityDate::new(u16::try_from(founded).ok()?, 1, 1)?;
        start.checked_add_days(days_elapsed)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Parses a string in the `Y.M.D` form
    ///
    /// ```
    /// use sc2ksave::CityDate;
    /// let date = CityDate::parse_from_str("2050.12.25").expect("to parse date");
    /// assert_eq!(date.year(), 2050);
    /// assert_eq!(date.month(), 12);
    /// assert_eq!(date.day(), 25);
    /// assert!(CityDate::parse_from_str("2050.12").is_none());
    /// assert!(CityDate::parse_from_str("2050.-1.3").is_none());
    /// ```
    pub fn parse_from_str<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut parts = s.as_ref().split('.');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        CityDate::new(year, month, day)
    }

    /// Days since the first day of year zero
    pub fn days(&self) -> i32 {
        i32::from(self.year) * DAYS_PER_YEAR
            + (i32::from(self.month) - 1) * DAYS_PER_MONTH
            + (i32::from(self.day) - 1)
    }

    pub fn days_until(&self, other: &CityDate) -> i32 {
        other.days() - self.days()
    }

    /// Returns `None` when the result would fall outside the representable
    /// years
    pub fn checked_add_days(&self, days: i32) -> Option<CityDate> {
        let total = self.days().checked_add(days)?;
        if total < 0 {
            return None;
        }

        let year = u16::try_from(total / DAYS_PER_YEAR).ok()?;
        let in_year = total % DAYS_PER_YEAR;
        let month = (in_year / DAYS_PER_MONTH + 1) as u8;
        let day = (in_year % DAYS_PER_MONTH + 1) as u8;
        CityDate::new(year, month, day)
    }

    /// Formats the date in the ISO 8601 format: YYYY-MM-DD
    ///
    /// ```
    /// use sc2ksave::CityDate;
    /// let date = CityDate::parse_from_str("1900.1.2").expect("to parse date");
    /// assert_eq!(date.iso_8601(), String::from("1900-01-02"));
    /// ```
    pub fn iso_8601(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Formats the date as Y.M.D
    pub fn sc2k_fmt(&self) -> String {
        format!("{}.{}.{}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CityDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_8601())
    }
}

impl Serialize for CityDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.iso_8601().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_roundtrip() {
        let date = CityDate::parse_from_str("1900.1.2").unwrap();
        assert_eq!(date.iso_8601(), String::from("1900-01-02"));
    }

    #[test]
    fn test_sc2k_fmt() {
        let test_cases = ["1900.1.1", "1950.3.25", "2000.12.1", "2050.6.13"];

        for case in &test_cases {
            let date = CityDate::parse_from_str(case).unwrap();
            assert_eq!(date.sc2k_fmt(), case.to_string());
        }
    }

    #[test]
    fn test_from_elapsed() {
        assert_eq!(
            CityDate::from_elapsed(1900, 0),
            CityDate::parse_from_str("1900.1.1")
        );
        assert_eq!(
            CityDate::from_elapsed(1900, 24),
            CityDate::parse_from_str("1900.1.25")
        );
        assert_eq!(
            CityDate::from_elapsed(1900, 25),
            CityDate::parse_from_str("1900.2.1")
        );
        assert_eq!(
            CityDate::from_elapsed(1900, 299),
            CityDate::parse_from_str("1900.12.25")
        );
        assert_eq!(
            CityDate::from_elapsed(1900, 300),
            CityDate::parse_from_str("1901.1.1")
        );
    }

    #[test]
    fn test_from_elapsed_out_of_range() {
        assert_eq!(CityDate::from_elapsed(1900, -1), None);
        assert_eq!(CityDate::from_elapsed(-5, 10), None);
        assert_eq!(CityDate::from_elapsed(0, 0), None);
        assert_eq!(CityDate::from_elapsed(1900, i32::MAX), None);
    }

    #[test]
    fn test_days_until() {
        let date = CityDate::parse_from_str("1900.1.2").unwrap();
        let date2 = CityDate::parse_from_str("1901.1.2").unwrap();
        assert_eq!(300, date.days_until(&date2));
        assert_eq!(-300, date2.days_until(&date));
    }

    #[test]
    fn test_subtract_days() {
        let date = CityDate::parse_from_str("1901.1.1").unwrap();
        assert_eq!(date.checked_add_days(-1), CityDate::parse_from_str("1900.12.25"));
        assert_eq!(date.checked_add_days(-1901 * 300), None);
    }

    #[test]
    fn test_all_days() {
        let start = CityDate::parse_from_str("1990.1.1").unwrap();
        for i in 0..DAYS_PER_YEAR {
            let next = start.checked_add_days(i).unwrap();
            assert_eq!(start.days_until(&next), i);
            assert_eq!(next.year(), 1990);
        }
    }

    #[test]
    fn test_cmp() {
        let date = CityDate::parse_from_str("1957.3.5").unwrap();
        let date2 = CityDate::parse_from_str("1957.3.4").unwrap();
        assert!(date2 < date);
    }

    #[test]
    fn test_serialize() {
        let date = CityDate::new(1900, 4, 9).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"1900-04-09\"");
    }
}
