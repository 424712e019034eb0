// backend/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use jobtrack::commands::{jobs, reports, reset, shifts, staffs};
use jobtrack::config::{self, Config};
use jobtrack::models::{JobStatus, ShiftType, StaffRole, StaffStatus};
use jobtrack::output::{self, format_or_json, OutputFormat};
use jobtrack::production::ledger::SHORTFALL_REASONS;
use jobtrack::production::ShiftLogFilter;
use jobtrack::AppState;

#[derive(Parser)]
#[command(name = "jobtrack", version, about = "Production job tracking and shift output")]
struct Cli {
    /// Directory holding the JSON store (overrides JOBTRACK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Production jobs
    #[command(subcommand)]
    Job(JobCommand),
    /// Staff directory
    #[command(subcommand)]
    Staff(StaffCommand),
    /// Shift entry and saved shifts
    #[command(subcommand)]
    Shift(ShiftCommand),
    /// Shift log and dashboard
    #[command(subcommand)]
    Report(ReportCommand),
    /// Empty every store file and drop any open shift
    Reset,
}

#[derive(Subcommand)]
enum JobCommand {
    Add {
        job_number: String,
        #[arg(long)]
        customer: String,
        #[arg(long)]
        product: String,
        #[arg(long)]
        stock: String,
        #[arg(long)]
        quantity: String,
    },
    List,
    Show { job_number: String },
    Status { job_number: String, status: JobStatus },
    Delete { job_number: String },
    /// Output so far against the job target
    Progress { job_number: String },
}

#[derive(Subcommand)]
enum StaffCommand {
    Add {
        name: String,
        #[arg(long, default_value_t = StaffRole::TeamLeader)]
        role: StaffRole,
        #[arg(long, default_value_t = ShiftType::Morning)]
        shift_type: ShiftType,
        #[arg(long, default_value_t = StaffStatus::Active)]
        status: StaffStatus,
    },
    List {
        /// Only names of active staff
        #[arg(long)]
        active: bool,
    },
    Activate { staff_id: String },
    Deactivate { staff_id: String },
    Delete { staff_id: String },
}

#[derive(Subcommand)]
enum ShiftCommand {
    /// Lay out the hours of a new shift
    Start(StartArgs),
    /// Record output for the next pending hour, or a given one
    Record {
        quantity: String,
        #[arg(long)]
        hour: Option<String>,
        /// Shortfall reason; required when under target
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Drop an hour from the open shift
    Remove { hour: String },
    Show,
    /// Save the open shift
    Finalize,
    Discard,
    List,
    /// Known shortfall reasons
    Reasons,
}

#[derive(Args)]
struct StartArgs {
    job_number: String,
    staff_name: String,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    start: Option<String>,
    #[arg(long)]
    end: Option<String>,
    #[arg(long, default_value_t = ShiftType::Morning)]
    shift_type: ShiftType,
    /// Discard an already open shift
    #[arg(long)]
    replace: bool,
}

#[derive(Subcommand)]
enum ReportCommand {
    Log {
        #[arg(long)]
        job: Option<String>,
        #[arg(long)]
        staff: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    Dashboard,
}

fn main() -> ExitCode {
    // Load environment from .env if present
    dotenvy::dotenv().ok();
    config::init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = Config::from_env(cli.data_dir);
    let state = AppState::open(&cfg.data_dir)?;
    let fmt = cli.output;

    match cli.command {
        Command::Job(cmd) => run_job(&state, fmt, cmd),
        Command::Staff(cmd) => run_staff(&state, fmt, cmd),
        Command::Shift(cmd) => run_shift(&state, fmt, cmd),
        Command::Report(cmd) => run_report(&state, fmt, cmd),
        Command::Reset => {
            let summary = reset::reset_all(&state)?;
            format_or_json(fmt, &summary, |s| format!("Cleared: {}", s.cleared.join(", ")))
        }
    }
}

fn run_job(state: &AppState, fmt: OutputFormat, cmd: JobCommand) -> anyhow::Result<()> {
    match cmd {
        JobCommand::Add { job_number, customer, product, stock, quantity } => {
            let job = jobs::create_job(
                state,
                jobs::CreateJobBody {
                    job_number,
                    customer_name: customer,
                    product,
                    stock_name: stock,
                    stock_quantity: quantity,
                },
            )?;
            format_or_json(fmt, &job, |j| format!("Job {} created", j.job_number))
        }
        JobCommand::List => format_or_json(fmt, &jobs::list_jobs(state), |j| output::jobs_text(j)),
        JobCommand::Show { job_number } => {
            let job = jobs::get_job(state, &job_number)?;
            format_or_json(fmt, &job, |j| output::jobs_text(std::slice::from_ref(j)))
        }
        JobCommand::Status { job_number, status } => {
            let job = jobs::set_job_status(state, &job_number, status)?;
            format_or_json(fmt, &job, |j| format!("Job {} is {}", j.job_number, j.status))
        }
        JobCommand::Delete { job_number } => {
            let deleted = jobs::delete_job(state, &job_number)?;
            format_or_json(fmt, &deleted, |_| format!("Job {job_number} deleted"))
        }
        JobCommand::Progress { job_number } => {
            let p = reports::job_progress(state, &job_number)?;
            format_or_json(fmt, &p, |p| output::progress_text(p))
        }
    }
}

fn run_staff(state: &AppState, fmt: OutputFormat, cmd: StaffCommand) -> anyhow::Result<()> {
    match cmd {
        StaffCommand::Add { name, role, shift_type, status } => {
            let staff = staffs::create_staff(
                state,
                staffs::CreateStaffBody { name, role, shift_type, status },
            )?;
            format_or_json(fmt, &staff, |s| format!("{} added as {}", s.name, s.staff_id))
        }
        StaffCommand::List { active: true } => {
            format_or_json(fmt, &staffs::active_staff_names(state), |names| names.join("\n"))
        }
        StaffCommand::List { active: false } => {
            format_or_json(fmt, &staffs::list_staff(state), |s| output::staff_text(s))
        }
        StaffCommand::Activate { staff_id } => {
            let staff = staffs::set_staff_status(state, &staff_id, StaffStatus::Active)?;
            format_or_json(fmt, &staff, |s| format!("{} is {}", s.name, s.status))
        }
        StaffCommand::Deactivate { staff_id } => {
            let staff = staffs::set_staff_status(state, &staff_id, StaffStatus::Inactive)?;
            format_or_json(fmt, &staff, |s| format!("{} is {}", s.name, s.status))
        }
        StaffCommand::Delete { staff_id } => {
            let deleted = staffs::delete_staff(state, &staff_id)?;
            format_or_json(fmt, &deleted, |_| format!("Staff {staff_id} deleted"))
        }
    }
}

fn run_shift(state: &AppState, fmt: OutputFormat, cmd: ShiftCommand) -> anyhow::Result<()> {
    match cmd {
        ShiftCommand::Start(a) => {
            shifts::start_shift(
                state,
                shifts::StartShiftBody {
                    job_number: a.job_number,
                    staff_name: a.staff_name,
                    shift_date: a.date,
                    start_time: a.start,
                    end_time: a.end,
                    shift_type: a.shift_type,
                    replace: a.replace,
                },
            )?;
            format_or_json(fmt, &shifts::show_shift(state)?, |v| output::draft_text(v))
        }
        ShiftCommand::Record { quantity, hour, comment } => {
            let slot = match hour {
                Some(h) => shifts::record_hour(state, &h, &quantity, &comment)?,
                None => shifts::record_next(state, &quantity, &comment)?,
            };
            format_or_json(fmt, &slot, |s| {
                format!("{}: {} / {} {}", s.hour_label, s.quantity, s.target, s.comment)
                    .trim_end()
                    .to_string()
            })
        }
        ShiftCommand::Remove { hour } => {
            let removed = shifts::remove_hour(state, &hour)?;
            format_or_json(fmt, &removed, |s| format!("Removed {}", s.hour_label))
        }
        ShiftCommand::Show => {
            format_or_json(fmt, &shifts::show_shift(state)?, |v| output::draft_text(v))
        }
        ShiftCommand::Finalize => {
            let record = shifts::finalize_shift(state)?;
            format_or_json(fmt, &record, |r| {
                format!("Shift {} saved: {} units", r.shift_id, r.total_output)
            })
        }
        ShiftCommand::Discard => {
            let deleted = shifts::discard_shift(state)?;
            format_or_json(fmt, &deleted, |d| {
                if d.deleted { "Shift discarded".to_string() } else { "No open shift".to_string() }
            })
        }
        ShiftCommand::List => {
            format_or_json(fmt, &shifts::list_shifts(state), |s| output::shifts_text(s))
        }
        ShiftCommand::Reasons => format_or_json(fmt, &SHORTFALL_REASONS, |r| r.join("\n")),
    }
}

fn run_report(state: &AppState, fmt: OutputFormat, cmd: ReportCommand) -> anyhow::Result<()> {
    match cmd {
        ReportCommand::Log { job, staff, date } => {
            let filter = ShiftLogFilter { job_number: job, staff_name: staff, shift_date: date };
            let log = reports::shift_log_report(state, &filter);
            format_or_json(fmt, &log, |l| output::shift_log_text(l))
        }
        ReportCommand::Dashboard => {
            format_or_json(fmt, &reports::dashboard(state), |d| output::dashboard_text(d))
        }
    }
}
