use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Label shown for the sentinel filter that selects every course.
pub const ALL_COURSES_LABEL: &str = "All";

//
// ─── COURSE ID ─────────────────────────────────────────────────────────────────
//

/// Opaque grouping key attached to a question.
///
/// Question files usually use integers (`"course": 3`) or names
/// (`"course": "payroll"`). Any other JSON value is kept as its compact JSON
/// text in `Json`, so courses still group by equality. Numeric courses sort
/// first, then names, then the rest.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Name(String),
    Json(String),
}

impl CourseId {
    #[must_use]
    pub fn number(value: i64) -> Self {
        Self::Number(value)
    }

    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    #[must_use]
    pub fn json(text: impl Into<String>) -> Self {
        Self::Json(text.into())
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Name(_) => 1,
            Self::Json(_) => 2,
        }
    }
}

/// Questions without a `course` field belong to course `1`.
impl Default for CourseId {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl Ord for CourseId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Name(a), Self::Name(b)) | (Self::Json(a), Self::Json(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CourseId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "CourseId({n})"),
            Self::Name(name) => write!(f, "CourseId({name:?})"),
            Self::Json(text) => write!(f, "CourseId(<{text}>)"),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) | Self::Json(name) => f.write_str(name),
        }
    }
}

//
// ─── COURSE FILTER ─────────────────────────────────────────────────────────────
//

/// Which part of the question bank a session draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CourseFilter {
    #[default]
    All,
    Course(CourseId),
}

impl CourseFilter {
    #[must_use]
    pub fn matches(&self, course: &CourseId) -> bool {
        match self {
            Self::All => true,
            Self::Course(wanted) => wanted == course,
        }
    }
}

impl From<CourseId> for CourseFilter {
    fn from(course: CourseId) -> Self {
        Self::Course(course)
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_COURSES_LABEL),
            Self::Course(course) => write!(f, "{course}"),
        }
    }
}

/// Parses a typed filter. `all` and `tous` (any case) are the sentinel,
/// integers become numeric courses and anything else a named course. The
/// sidebar does not go through this; it looks filters up by option position.
impl FromStr for CourseFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("tous") {
            return Ok(Self::All);
        }
        let course = trimmed
            .parse::<i64>()
            .map_or_else(|_| CourseId::name(trimmed), CourseId::number);
        Ok(Self::Course(course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sort_before_names() {
        let mut courses = vec![
            CourseId::name("payroll"),
            CourseId::number(10),
            CourseId::json("true"),
            CourseId::name("hiring"),
            CourseId::number(2),
        ];
        courses.sort();
        assert_eq!(
            courses,
            vec![
                CourseId::number(2),
                CourseId::number(10),
                CourseId::name("hiring"),
                CourseId::name("payroll"),
                CourseId::json("true"),
            ]
        );
    }

    #[test]
    fn missing_course_defaults_to_one() {
        assert_eq!(CourseId::default(), CourseId::number(1));
    }

    #[test]
    fn filter_parses_sentinel_in_both_languages() {
        assert_eq!("All".parse::<CourseFilter>().unwrap(), CourseFilter::All);
        assert_eq!("Tous".parse::<CourseFilter>().unwrap(), CourseFilter::All);
        assert_eq!(
            "3".parse::<CourseFilter>().unwrap(),
            CourseFilter::Course(CourseId::number(3))
        );
        assert_eq!(
            "payroll".parse::<CourseFilter>().unwrap(),
            CourseFilter::Course(CourseId::name("payroll"))
        );
    }

    #[test]
    fn filter_display_matches_selector_values() {
        assert_eq!(CourseFilter::All.to_string(), "All");
        assert_eq!(CourseFilter::from(CourseId::number(4)).to_string(), "4");
    }

    #[test]
    fn all_filter_matches_every_course() {
        assert!(CourseFilter::All.matches(&CourseId::name("x")));
        assert!(CourseFilter::from(CourseId::number(2)).matches(&CourseId::number(2)));
        assert!(!CourseFilter::from(CourseId::number(2)).matches(&CourseId::number(1)));
    }
}
