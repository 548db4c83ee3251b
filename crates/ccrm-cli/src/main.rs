//! ccrm command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "ccrm", version, about = "Course and record manager")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data folder holding the registry (overrides config and CCRM_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter ccrm.toml
    Init,

    /// Register a student
    AddStudent {
        /// Registration number (lookup key)
        #[arg(long)]
        reg_no: String,

        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Student id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Register an instructor
    AddInstructor {
        /// Instructor id
        #[arg(long)]
        id: String,

        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Employee id
        #[arg(long)]
        emp_id: String,

        /// Department
        #[arg(long)]
        department: String,
    },

    /// Add a course to the catalog
    AddCourse {
        /// Course code
        #[arg(long)]
        code: String,

        /// Course title
        #[arg(long)]
        title: String,

        /// Credit count
        #[arg(long)]
        credits: u32,

        /// Semester: SPRING, SUMMER or FALL
        #[arg(long, default_value = "FALL")]
        semester: String,

        /// Department
        #[arg(long, default_value = "CSE")]
        department: String,

        /// Instructor id
        #[arg(long)]
        instructor: Option<String>,
    },

    /// Activate or deactivate a student
    SetActive {
        /// Registration number
        #[arg(long)]
        reg_no: String,

        /// New active flag
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },

    /// Enroll a student in a course, optionally grading it right away
    Enroll {
        /// Registration number
        #[arg(long)]
        reg_no: String,

        /// Course code
        #[arg(long)]
        code: String,

        /// Marks (0-100) to grade the new enrollment with
        #[arg(long, allow_negative_numbers = true)]
        marks: Option<f64>,
    },

    /// Record marks for an existing enrollment
    Grade {
        /// Registration number
        #[arg(long)]
        reg_no: String,

        /// Course code
        #[arg(long)]
        code: String,

        /// Marks (0-100)
        #[arg(long, allow_negative_numbers = true)]
        marks: f64,
    },

    /// Print transcripts
    Transcript {
        /// Only this student
        #[arg(long)]
        reg_no: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List students, courses or instructors
    List {
        /// students, courses or instructors
        kind: String,
    },

    /// Import pipe-delimited student and/or course files
    Import {
        /// Students file (id|regNo|name|email)
        #[arg(long)]
        students: Option<PathBuf>,

        /// Courses file (code|title|credits|semester|department)
        #[arg(long)]
        courses: Option<PathBuf>,
    },

    /// Export students and courses as pipe-delimited files
    Export {
        /// Students file (defaults to config students_export)
        #[arg(long)]
        students: Option<PathBuf>,

        /// Courses file (defaults to config courses_export)
        #[arg(long)]
        courses: Option<PathBuf>,
    },

    /// Copy a directory into a timestamped backup folder
    Backup {
        /// Directory to back up
        #[arg(long, default_value = ".")]
        source: PathBuf,
    },

    /// GPA distribution and top students
    Report {
        /// How many top students to list (defaults to config top_students)
        #[arg(long)]
        top: Option<usize>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ccrm=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = Context::load(cli.config.as_deref(), cli.data_dir)
        .and_then(|ctx| run(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(ctx: &Context, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::execute(ctx),
        Commands::AddStudent {
            reg_no,
            name,
            email,
            id,
        } => commands::records::add_student(ctx, reg_no, name, email, id),
        Commands::AddInstructor {
            id,
            name,
            email,
            emp_id,
            department,
        } => commands::records::add_instructor(ctx, id, name, email, emp_id, department),
        Commands::AddCourse {
            code,
            title,
            credits,
            semester,
            department,
            instructor,
        } => commands::records::add_course(
            ctx, code, title, credits, semester, department, instructor,
        ),
        Commands::SetActive { reg_no, active } => {
            commands::records::set_active(ctx, reg_no, active)
        }
        Commands::Enroll {
            reg_no,
            code,
            marks,
        } => commands::enroll::enroll(ctx, reg_no, code, marks),
        Commands::Grade {
            reg_no,
            code,
            marks,
        } => commands::enroll::grade(ctx, reg_no, code, marks),
        Commands::Transcript { reg_no, format } => {
            commands::transcript::execute(ctx, reg_no, format)
        }
        Commands::List { kind } => commands::records::list(ctx, kind),
        Commands::Import { students, courses } => {
            commands::interchange::import(ctx, students, courses)
        }
        Commands::Export { students, courses } => {
            commands::interchange::export(ctx, students, courses)
        }
        Commands::Backup { source } => commands::backup::execute(ctx, source),
        Commands::Report { top, format } => commands::report::execute(ctx, top, format),
    }
}
