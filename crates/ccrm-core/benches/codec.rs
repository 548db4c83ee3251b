use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ccrm_core::codec::{read_courses, read_students, write_courses, COURSE_HEADER, STUDENT_HEADER};
use ccrm_core::model::{Course, Semester};

fn course_file(rows: usize) -> String {
    let mut text = format!("{COURSE_HEADER}\n");
    for i in 0..rows {
        let semester = Semester::ALL[i % 3];
        text.push_str(&format!("C{i:05}|Course number {i}|{}|{semester}|DEPT{}\n", i % 6, i % 9));
    }
    text
}

fn student_file(rows: usize) -> String {
    let mut text = format!("{STUDENT_HEADER}\n");
    for i in 0..rows {
        text.push_str(&format!("{i}|R-{i:06}|Student {i}|s{i}@example.edu\n"));
    }
    text
}

fn bench_import(c: &mut Criterion) {
    let courses = course_file(5_000);
    let students = student_file(5_000);

    let mut group = c.benchmark_group("import");

    group.bench_function("courses/5000", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            read_courses(Cursor::new(black_box(courses.as_bytes())), &mut sink).unwrap();
            sink
        })
    });

    group.bench_function("students/5000", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            read_students(Cursor::new(black_box(students.as_bytes())), &mut sink).unwrap();
            sink
        })
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut parsed: Vec<Course> = Vec::new();
    read_courses(Cursor::new(course_file(5_000)), &mut parsed).unwrap();

    c.bench_function("export/courses/5000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(256 * 1024);
            write_courses(&mut out, black_box(&parsed)).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_import, bench_export);
criterion_main!(benches);
