//! Pipe-delimited interchange format for bulk import and export.
//!
//! One entity per line, fields separated by `|`, with a single header line
//! first. The header is documentary only and is never checked on import.
//! There is no quoting or escaping, so field values must not contain `|`.
//!
//! Imports append into any [`Extend`] sink as they go. When a line fails to
//! parse, everything before it has already reached the sink and stays
//! there.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::InterchangeError;
use crate::model::{Course, Semester, Student};

/// Field separator.
pub const DELIMITER: char = '|';

/// Header written before student rows.
pub const STUDENT_HEADER: &str = "id|regNo|name|email";

/// Header written before course rows.
pub const COURSE_HEADER: &str = "code|title|credits|semester|department";

const STUDENT_COLUMNS: usize = 4;
const COURSE_COLUMNS: usize = 5;

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

/// Read student rows (`id|regNo|name|email`) into `sink`.
///
/// Returns the number of students read. Imported students are active and
/// have no enrollments.
pub fn read_students<R, E>(reader: R, sink: &mut E) -> Result<usize, InterchangeError>
where
    R: BufRead,
    E: Extend<Student>,
{
    read_records(reader, STUDENT_COLUMNS, parse_student, sink)
}

/// Write the student header and one row per student, in the given order.
pub fn write_students<'a, W: Write>(
    out: W,
    students: impl IntoIterator<Item = &'a Student>,
) -> Result<usize, InterchangeError> {
    let lines = render_students(students)?;
    write_lines(out, STUDENT_HEADER, &lines)
}

/// Import students from a file into `sink`.
pub fn import_students<E: Extend<Student>>(
    path: &Path,
    sink: &mut E,
) -> Result<usize, InterchangeError> {
    let file = File::open(path)?;
    let count = read_students(BufReader::new(file), sink)?;
    tracing::debug!("imported {count} students from {}", path.display());
    Ok(count)
}

/// Export students to a file, replacing whatever was there.
///
/// Nothing is written if any field would break the line layout.
pub fn export_students<'a>(
    path: &Path,
    students: impl IntoIterator<Item = &'a Student>,
) -> Result<usize, InterchangeError> {
    let lines = render_students(students)?;
    let count = write_lines(BufWriter::new(File::create(path)?), STUDENT_HEADER, &lines)?;
    tracing::debug!("exported {count} students to {}", path.display());
    Ok(count)
}

fn parse_student(fields: &[&str]) -> Result<Student, String> {
    Ok(Student::new(fields[0], fields[1], fields[2], fields[3]))
}

fn render_students<'a>(
    students: impl IntoIterator<Item = &'a Student>,
) -> Result<Vec<String>, InterchangeError> {
    students
        .into_iter()
        .map(|s| {
            join_fields(&[
                ("id", s.id()),
                ("regNo", s.reg_no()),
                ("name", s.full_name()),
                ("email", s.email()),
            ])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

/// Read course rows (`code|title|credits|semester|department`) into `sink`.
///
/// Credits must be an unsigned integer and the semester must exactly match
/// one of `SPRING`, `SUMMER`, `FALL`.
pub fn read_courses<R, E>(reader: R, sink: &mut E) -> Result<usize, InterchangeError>
where
    R: BufRead,
    E: Extend<Course>,
{
    read_records(reader, COURSE_COLUMNS, parse_course, sink)
}

/// Write the course header and one row per course, in the given order.
pub fn write_courses<'a, W: Write>(
    out: W,
    courses: impl IntoIterator<Item = &'a Course>,
) -> Result<usize, InterchangeError> {
    let lines = render_courses(courses)?;
    write_lines(out, COURSE_HEADER, &lines)
}

/// Import courses from a file into `sink`.
pub fn import_courses<E: Extend<Course>>(
    path: &Path,
    sink: &mut E,
) -> Result<usize, InterchangeError> {
    let file = File::open(path)?;
    let count = read_courses(BufReader::new(file), sink)?;
    tracing::debug!("imported {count} courses from {}", path.display());
    Ok(count)
}

/// Load every course in a file, failing on the first bad line.
pub fn load_courses(path: &Path) -> Result<Vec<Course>, InterchangeError> {
    let mut courses = Vec::new();
    import_courses(path, &mut courses)?;
    Ok(courses)
}

/// Export courses to a file, replacing whatever was there.
///
/// The instructor reference is not part of the format and is not written.
pub fn export_courses<'a>(
    path: &Path,
    courses: impl IntoIterator<Item = &'a Course>,
) -> Result<usize, InterchangeError> {
    let lines = render_courses(courses)?;
    let count = write_lines(BufWriter::new(File::create(path)?), COURSE_HEADER, &lines)?;
    tracing::debug!("exported {count} courses to {}", path.display());
    Ok(count)
}

fn parse_course(fields: &[&str]) -> Result<Course, String> {
    let credits: u32 = fields[2]
        .parse()
        .map_err(|e| format!("invalid credits {:?}: {e}", fields[2]))?;
    let semester: Semester = fields[3].parse()?;

    Course::builder()
        .code(fields[0])
        .title(fields[1])
        .credits(credits)
        .semester(semester)
        .department(fields[4])
        .build()
        .map_err(|e| e.to_string())
}

fn render_courses<'a>(
    courses: impl IntoIterator<Item = &'a Course>,
) -> Result<Vec<String>, InterchangeError> {
    courses
        .into_iter()
        .map(|c| {
            let credits = c.credits().to_string();
            let semester = c.semester().to_string();
            join_fields(&[
                ("code", c.code()),
                ("title", c.title()),
                ("credits", credits.as_str()),
                ("semester", semester.as_str()),
                ("department", c.department()),
            ])
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Shared line handling
// ---------------------------------------------------------------------------

fn read_records<R, T, E>(
    reader: R,
    columns: usize,
    parse: fn(&[&str]) -> Result<T, String>,
    sink: &mut E,
) -> Result<usize, InterchangeError>
where
    R: BufRead,
    E: Extend<T>,
{
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // First line is the header; blank lines carry no record.
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != columns {
            return Err(InterchangeError::Parse {
                line: line_no,
                message: format!("expected {columns} fields, found {}", fields.len()),
            });
        }

        let record = parse(&fields).map_err(|message| InterchangeError::Parse {
            line: line_no,
            message,
        })?;
        sink.extend(std::iter::once(record));
        count += 1;
    }
    Ok(count)
}

fn join_fields(fields: &[(&'static str, &str)]) -> Result<String, InterchangeError> {
    for &(name, value) in fields {
        if value.contains(DELIMITER) || value.contains(['\n', '\r']) {
            return Err(InterchangeError::DelimiterInField {
                field: name,
                value: value.to_string(),
            });
        }
    }
    let values: Vec<&str> = fields.iter().map(|(_, v)| *v).collect();
    Ok(values.join("|"))
}

fn write_lines<W: Write>(
    mut out: W,
    header: &str,
    lines: &[String],
) -> Result<usize, InterchangeError> {
    writeln!(out, "{header}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn course(code: &str, semester: Semester) -> Course {
        Course::builder()
            .code(code)
            .title(format!("Title of {code}"))
            .credits(3)
            .semester(semester)
            .department("CSE")
            .build()
            .unwrap()
    }

    #[test]
    fn course_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.csv");

        let courses = vec![
            course("CS101", Semester::Spring),
            course("CS102", Semester::Summer),
            Course::builder()
                .code("MA201")
                .title("Linear Algebra")
                .credits(4)
                .semester(Semester::Fall)
                .department("")
                .build()
                .unwrap(),
        ];

        assert_eq!(export_courses(&path, &courses).unwrap(), 3);
        let loaded = load_courses(&path).unwrap();
        assert_eq!(loaded, courses);
    }

    #[test]
    fn export_writes_header_then_rows_in_order() {
        let mut out = Vec::new();
        write_courses(
            &mut out,
            &[course("B2", Semester::Fall), course("A1", Semester::Spring)],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "code|title|credits|semester|department\n\
             B2|Title of B2|3|FALL|CSE\n\
             A1|Title of A1|3|SPRING|CSE\n"
        );
    }

    #[test]
    fn unknown_semester_keeps_earlier_rows() {
        let input = "code|title|credits|semester|department\n\
                     CS101|Intro|3|FALL|CSE\n\
                     CS102|Data|4|SPRING|CSE\n\
                     CS103|Broken|4|WINTER|CSE\n\
                     CS104|Never|4|FALL|CSE\n";
        let mut sink: Vec<Course> = Vec::new();
        let err = read_courses(Cursor::new(input), &mut sink).unwrap_err();

        assert!(err.is_parse());
        match err {
            InterchangeError::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("WINTER"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        let codes: Vec<&str> = sink.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["CS101", "CS102"]);
    }

    #[test]
    fn semester_must_match_exactly() {
        let input = "h\nCS101|Intro|3|fall|CSE\n";
        let mut sink: Vec<Course> = Vec::new();
        assert!(read_courses(Cursor::new(input), &mut sink).unwrap_err().is_parse());
    }

    #[test]
    fn bad_credits_is_parse_error() {
        for credits in ["three", "-1", " 3", ""] {
            let input = format!("h\nCS101|Intro|{credits}|FALL|CSE\n");
            let mut sink: Vec<Course> = Vec::new();
            let err = read_courses(Cursor::new(input), &mut sink).unwrap_err();
            assert!(err.is_parse(), "credits {credits:?}");
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn wrong_field_count_is_parse_error() {
        let mut sink: Vec<Course> = Vec::new();
        let err = read_courses(Cursor::new("h\nCS101|Intro|3|FALL\n"), &mut sink).unwrap_err();
        assert!(err.to_string().contains("expected 5 fields, found 4"));

        let err = read_courses(Cursor::new("h\nA|B|1|FALL|CSE|extra\n"), &mut sink).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn missing_title_is_parse_error() {
        let mut sink: Vec<Course> = Vec::new();
        let err = read_courses(Cursor::new("h\nCS101||3|FALL|CSE\n"), &mut sink).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn header_is_not_validated_and_blank_lines_are_skipped() {
        let input = "whatever goes here\n\nCS101|Intro|3|FALL|CSE\n   \n";
        let mut sink: Vec<Course> = Vec::new();
        assert_eq!(read_courses(Cursor::new(input), &mut sink).unwrap(), 1);
        assert_eq!(sink[0].title(), "Intro");
    }

    #[test]
    fn empty_input_imports_nothing() {
        let mut sink: Vec<Student> = Vec::new();
        assert_eq!(read_students(Cursor::new(""), &mut sink).unwrap(), 0);
        assert_eq!(read_students(Cursor::new("id|regNo|name|email\n"), &mut sink).unwrap(), 0);
    }

    #[test]
    fn crlf_lines_are_accepted() {
        let input = "id|regNo|name|email\r\n1|R-1|Ada Lovelace|ada@example.edu\r\n";
        let mut sink: Vec<Student> = Vec::new();
        read_students(Cursor::new(input), &mut sink).unwrap();
        assert_eq!(sink[0].email(), "ada@example.edu");
    }

    #[test]
    fn student_columns_map_to_fields() {
        let input = "id|regNo|name|email\n42|R-42|Alan Turing|alan@example.edu\n";
        let mut sink: Vec<Student> = Vec::new();
        read_students(Cursor::new(input), &mut sink).unwrap();
        let s = &sink[0];
        assert_eq!(s.id(), "42");
        assert_eq!(s.reg_no(), "R-42");
        assert_eq!(s.full_name(), "Alan Turing");
        assert_eq!(s.email(), "alan@example.edu");
        assert!(s.is_active());
    }

    #[test]
    fn student_export_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        let students = vec![
            Student::new("1", "R-1", "Ada Lovelace", "ada@example.edu"),
            Student::new("2", "R-2", "Alan Turing", "alan@example.edu"),
        ];
        export_students(&path, &students).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("id|regNo|name|email\n1|R-1|Ada Lovelace|ada@example.edu\n"));

        let mut back: Vec<Student> = Vec::new();
        assert_eq!(import_students(&path, &mut back).unwrap(), 2);
        let regs: Vec<&str> = back.iter().map(|s| s.reg_no()).collect();
        assert_eq!(regs, vec!["R-1", "R-2"]);
    }

    #[test]
    fn write_students_to_buffer() {
        let students = [Student::new("7", "R-7", "Grace Hopper", "grace@example.edu")];
        let mut out = Vec::new();
        assert_eq!(write_students(&mut out, &students).unwrap(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id|regNo|name|email\n7|R-7|Grace Hopper|grace@example.edu\n"
        );
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.csv");
        let stale = "stale content that is much longer than the export\n".repeat(20);
        std::fs::write(&path, stale).unwrap();

        export_courses(&path, &[course("CS1", Semester::Fall)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "code|title|credits|semester|department\nCS1|Title of CS1|3|FALL|CSE\n");
    }

    #[test]
    fn delimiter_in_field_refuses_export_without_touching_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(&path, "previous\n").unwrap();

        let students = vec![
            Student::new("1", "R-1", "Fine", "fine@example.edu"),
            Student::new("2", "R-2", "Pipe|Name", "p@example.edu"),
        ];
        let err = export_students(&path, &students).unwrap_err();
        assert!(matches!(
            err,
            InterchangeError::DelimiterInField { field: "name", .. }
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous\n");
    }

    #[test]
    fn missing_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink: Vec<Course> = Vec::new();
        let err = import_courses(&dir.path().join("nope.csv"), &mut sink).unwrap_err();
        assert!(matches!(err, InterchangeError::Io(_)));
    }
}
