use std::fmt;

use chrono::Utc;
use serde::Serialize;

/// Password shared by every generated user
pub const PASSWORD: &str = "Password123!";

/// Column names, in the order the fields of [`UserRecord`] are serialized
pub const HEADER: [&str; 4] = ["firstName", "lastName", "email", "password"];

const LATIN_NAMES: &[&str] = &["aa", "bb", "cc", "dd", "ee", "ff", "gg", "hh", "ii", "jj"];

const ARABIC_FIRST_NAMES: &[&str] = &[
    "أحمد", "محمد", "علي", "حسن", "خالد", "فاطمة", "سارة", "مريم", "نور", "ياسمين",
];

const ARABIC_LAST_NAMES: &[&str] = &[
    "محمد", "علي", "حسن", "أحمد", "خالد", "إبراهيم", "عمر", "عثمان",
];

/// One row of the registration data set
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: String,
    pub password: &'static str,
}

/// The fixed pair of name lists rows are drawn from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameSet {
    /// Two-letter ASCII placeholders, `aa` through `jj`
    #[default]
    Latin,
    Arabic,
}

/// How the email column is derived from the row index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailFormat {
    /// `user{i}@test.com`
    #[default]
    Plain,
    /// `user{i}_{timestamp}@test.com`, `timestamp` in Unix seconds
    Stamped { timestamp: i64 },
}

impl NameSet {
    #[must_use]
    pub fn first_names(self) -> &'static [&'static str] {
        match self {
            NameSet::Latin => LATIN_NAMES,
            NameSet::Arabic => ARABIC_FIRST_NAMES,
        }
    }

    #[must_use]
    pub fn last_names(self) -> &'static [&'static str] {
        match self {
            NameSet::Latin => LATIN_NAMES,
            NameSet::Arabic => ARABIC_LAST_NAMES,
        }
    }

    /// `(first, last)` for the given index. Both lists wrap around independently.
    #[must_use]
    pub fn pick(self, index: u64) -> (&'static str, &'static str) {
        (cycle(self.first_names(), index), cycle(self.last_names(), index))
    }
}

// name lists are short constants, the remainder always fits in a usize
#[allow(clippy::cast_possible_truncation)]
fn cycle(names: &'static [&'static str], index: u64) -> &'static str {
    names[(index % names.len() as u64) as usize]
}

impl EmailFormat {
    /// Reads the clock once. Every row formatted with the result shares the same suffix.
    #[must_use]
    pub fn stamped_now() -> Self {
        EmailFormat::Stamped {
            timestamp: Utc::now().timestamp(),
        }
    }

    #[must_use]
    pub fn email(self, index: u64) -> String {
        match self {
            EmailFormat::Plain => format!("user{index}@test.com"),
            EmailFormat::Stamped { timestamp } => format!("user{index}_{timestamp}@test.com"),
        }
    }
}

impl fmt::Display for NameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSet::Latin => write!(f, "latin"),
            NameSet::Arabic => write!(f, "arabic"),
        }
    }
}

impl UserRecord {
    #[must_use]
    pub fn new(index: u64, names: NameSet, email_format: EmailFormat) -> Self {
        let (first_name, last_name) = names.pick(index);
        UserRecord {
            first_name,
            last_name,
            email: email_format.email(index),
            password: PASSWORD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_names_cycle() {
        assert_eq!(NameSet::Latin.pick(1), ("bb", "bb"));
        assert_eq!(NameSet::Latin.pick(9), ("jj", "jj"));
        assert_eq!(NameSet::Latin.pick(10), ("aa", "aa"));
        assert_eq!(NameSet::Latin.pick(23), ("dd", "dd"));
    }

    #[test]
    fn test_arabic_lists_wrap_independently() {
        let first_len = NameSet::Arabic.first_names().len() as u64;
        let last_len = NameSet::Arabic.last_names().len() as u64;
        assert_eq!(first_len, 10);
        assert_eq!(last_len, 8);

        assert_eq!(NameSet::Arabic.pick(1), ("محمد", "علي"));
        // last names have already wrapped, first names haven't
        assert_eq!(NameSet::Arabic.pick(8), ("نور", "محمد"));
        assert_eq!(NameSet::Arabic.pick(10), ("أحمد", "حسن"));
        for i in 1..=100 {
            let (first, last) = NameSet::Arabic.pick(i);
            assert_eq!(first, ARABIC_FIRST_NAMES[(i % first_len) as usize]);
            assert_eq!(last, ARABIC_LAST_NAMES[(i % last_len) as usize]);
        }
    }

    #[test]
    fn test_email_formats() {
        assert_eq!(EmailFormat::Plain.email(1), "user1@test.com");
        assert_eq!(EmailFormat::Plain.email(1000), "user1000@test.com");

        let stamped = EmailFormat::Stamped {
            timestamp: 1_700_000_000,
        };
        assert_eq!(stamped.email(7), "user7_1700000000@test.com");
    }

    #[test]
    fn test_stamped_now_uses_current_time() {
        let before = Utc::now().timestamp();
        let format = EmailFormat::stamped_now();
        let after = Utc::now().timestamp();
        match format {
            EmailFormat::Stamped { timestamp } => {
                assert!(before <= timestamp && timestamp <= after);
            }
            EmailFormat::Plain => panic!("expected a stamped format"),
        }
    }

    #[test]
    fn test_user_record_new() {
        let record = UserRecord::new(3, NameSet::Latin, EmailFormat::Plain);
        assert_eq!(
            record,
            UserRecord {
                first_name: "dd",
                last_name: "dd",
                email: "user3@test.com".to_string(),
                password: "Password123!",
            }
        );
    }
}
