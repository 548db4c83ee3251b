//! Letter grades and the mark-to-grade scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade, best first. Each grade carries a fixed point value used
/// in GPA computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Lower bound (inclusive) of each passing bucket, best first.
const THRESHOLDS: [(f64, Grade); 6] = [
    (90.0, Grade::S),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (60.0, Grade::C),
    (50.0, Grade::D),
    (40.0, Grade::E),
];

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 7] = [
        Grade::S,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
    ];

    /// Convert a numeric mark to a grade.
    ///
    /// The first threshold the mark reaches wins, so a boundary value like
    /// `90.0` belongs to the higher bucket. Anything below 40 (negative
    /// marks and NaN included) is an `F`.
    pub fn from_marks(mark: f64) -> Grade {
        THRESHOLDS
            .iter()
            .find(|(min, _)| mark >= *min)
            .map(|&(_, grade)| grade)
            .unwrap_or(Grade::F)
    }

    /// Grade point value.
    pub const fn points(self) -> u32 {
        match self {
            Grade::S => 10,
            Grade::A => 9,
            Grade::B => 8,
            Grade::C => 7,
            Grade::D => 6,
            Grade::E => 5,
            Grade::F => 0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.to_string() == s)
            .ok_or_else(|| format!("unknown grade: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_higher_bucket() {
        let expected = [
            (90.0, Grade::S),
            (80.0, Grade::A),
            (70.0, Grade::B),
            (60.0, Grade::C),
            (50.0, Grade::D),
            (40.0, Grade::E),
        ];
        for (mark, grade) in expected {
            assert_eq!(Grade::from_marks(mark), grade, "mark {mark}");
        }
    }

    #[test]
    fn just_below_boundary_drops_a_bucket() {
        assert_eq!(Grade::from_marks(89.99), Grade::A);
        assert_eq!(Grade::from_marks(39.99), Grade::F);
    }

    #[test]
    fn out_of_range_marks() {
        assert_eq!(Grade::from_marks(100.0), Grade::S);
        assert_eq!(Grade::from_marks(250.0), Grade::S);
        assert_eq!(Grade::from_marks(0.0), Grade::F);
        assert_eq!(Grade::from_marks(-15.0), Grade::F);
        assert_eq!(Grade::from_marks(f64::NAN), Grade::F);
    }

    #[test]
    fn monotonic_as_mark_decreases() {
        let mut previous = Grade::from_marks(110.0);
        let mut mark = 110.0;
        while mark > -10.0 {
            let current = Grade::from_marks(mark);
            // Higher enum ordinal means a worse grade.
            assert!(current >= previous, "{current} better than {previous} at {mark}");
            previous = current;
            mark -= 0.25;
        }
    }

    #[test]
    fn point_values() {
        let points: Vec<u32> = Grade::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![10, 9, 8, 7, 6, 5, 0]);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Grade::S.to_string(), "S");
        assert_eq!("B".parse::<Grade>().unwrap(), Grade::B);
        assert!("b".parse::<Grade>().is_err());
        assert!("Z".parse::<Grade>().is_err());
    }
}
