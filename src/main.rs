//! StudyBuddy CLI
//!
//! Command-line front end for StudyBuddy:
//! - Sit an exam or a practice run against the clock
//! - Check study material and simulate its upload
//! - Log in, register and log out
//! - Browse subjects and leaderboards
//! - Run the fixture server

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studybuddy::api::{ApiBase, StudyBuddyClient};
use studybuddy::auth::{resolve_auth, AuthForm, AuthMode, Submission, TokenStore, UserType};
use studybuddy::config::{generate_default_config, Config};
use studybuddy::mock;
use studybuddy::models::question::option_letter;
use studybuddy::models::{board_rows, podium, shows_own_position, DocumentSummary};
use studybuddy::runner;
use studybuddy::server::{self, AppState};
use studybuddy::session::{
    CheckOutcome, ExamEvent, ExamSession, PracticeSession, PracticeTick, TIME_UP_MESSAGE,
};
use studybuddy::upload::{mime_for_path, FileCandidate, UploadQueue, ACCEPTED_EXTENSIONS};

#[derive(Parser)]
#[command(name = "studybuddy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Study companion: exams, practice, uploads and leaderboards")]
#[command(long_about = "StudyBuddy helps you study smarter.\nSit timed exams, practice with hints, upload study material and see how you rank.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available exams
    Exams,

    /// Sit an exam against the clock (Ctrl+C ends it early)
    Exam {
        /// Exam id, see `studybuddy exams`
        id: u32,
    },

    /// Answer the practice question set
    Practice,

    /// Check study material and simulate its upload
    Validate {
        /// Files to stage
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Stop after validation
        #[arg(long)]
        dry_run: bool,
    },

    /// Log in and keep the token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account and keep the token
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Account type (student, teacher)
        #[arg(short = 't', long, default_value = "student")]
        user_type: String,
        /// Accept the terms of service
        #[arg(long)]
        accept_terms: bool,
    },

    /// Forget the stored token
    Logout,

    /// List subjects and your progress
    Subjects,

    /// Show the leaderboard of a subject
    Leaderboard {
        /// Subject id, see `studybuddy subjects`
        subject: String,
    },

    /// Run the fixture server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
        /// Built UI to serve alongside the API
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.url = ApiBase::new(url);
    }

    init_tracing(&config);

    match cli.command {
        Commands::Exams => {
            println!("{:<4} {:<36} {}", "ID", "Title", "Duration");
            println!("{}", "-".repeat(52));
            for exam in mock::exams() {
                println!("{:<4} {:<36} {} minutes", exam.id, exam.title, exam.duration);
            }
        }

        Commands::Exam { id } => run_exam(id).await?,

        Commands::Practice => run_practice().await?,

        Commands::Validate { files, dry_run } => run_upload(&files, dry_run).await?,

        Commands::Login { email, password } => {
            let mut form = AuthForm::new(AuthMode::Login);
            form.email = email;
            form.password = password;
            authenticate(&config, &form).await?;
        }

        Commands::Register {
            name,
            email,
            password,
            user_type,
            accept_terms,
        } => {
            let mut form = AuthForm::new(AuthMode::Signup);
            form.full_name = name;
            form.email = email;
            form.password = password;
            form.user_type = user_type.parse::<UserType>()?;
            form.accept_terms = accept_terms;
            authenticate(&config, &form).await?;
        }

        Commands::Logout => {
            let store = config.token_store()?;
            store.clear()?;
            println!("Logged out");
        }

        Commands::Subjects => {
            let client = client(&config)?;
            let subjects = match client.subjects().await {
                Ok(subjects) => subjects,
                Err(e) => {
                    eprintln!("Cannot fetch subjects from {}", config.api.url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the backend is running, or start the fixture server:");
                    eprintln!("  studybuddy serve");
                    std::process::exit(1);
                }
            };

            if subjects.is_empty() {
                println!("No subjects available yet.");
            } else {
                println!("{:<20} {:<28} {:>8}", "ID", "Name", "Progress");
                println!("{}", "-".repeat(58));
                for subject in subjects {
                    println!(
                        "{:<20} {:<28} {:>7}%",
                        subject.id,
                        subject.name,
                        subject.progress_percent()
                    );
                }
            }
        }

        Commands::Leaderboard { subject } => show_leaderboard(&config, &subject).await?,

        Commands::Serve { port, static_dir } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if static_dir.is_some() {
                config.server.static_dir = static_dir;
            }
            server::serve(AppState::new(config.server_config())).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &content)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Config written to {:?}", path);
            } else {
                println!("{}", content);
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter_directive().into());

    // Interactive commands own stdout, so logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn client(config: &Config) -> anyhow::Result<StudyBuddyClient> {
    let store = config.token_store()?;
    let client = StudyBuddyClient::new(config.api.url.clone(), config.api.timeout_ms)?;
    Ok(client.with_token(store.load()))
}

async fn run_exam(id: u32) -> anyhow::Result<()> {
    let mut session = ExamSession::new(mock::exams());
    let exam = match session.find(id).cloned() {
        Some(exam) => exam,
        None => {
            eprintln!("No exam with id {}. Available exams:", id);
            for exam in session.exams() {
                eprintln!("  {} - {}", exam.id, exam.title);
            }
            std::process::exit(1);
        }
    };

    println!("{} ({} minutes)", exam.title, exam.duration);
    println!("Press Ctrl+C to end the exam.");
    session.start(exam);
    println!("Time remaining: {}", session.clock());

    let mut ticker = runner::ticker();
    loop {
        tokio::select! {
            _ = ticker.tick() => match session.tick() {
                ExamEvent::Running(left) => {
                    if left % 60 == 0 {
                        println!("Time remaining: {}", session.clock());
                    }
                }
                ExamEvent::TimeUp(_) => {
                    println!("{}", TIME_UP_MESSAGE);
                    break;
                }
                ExamEvent::Idle => break,
            },
            _ = tokio::signal::ctrl_c() => {
                let remaining = session.clock();
                if let Some(exam) = session.end() {
                    println!();
                    println!("{} ended with {} remaining.", exam.title, remaining);
                }
                break;
            }
        }
    }

    Ok(())
}

async fn run_practice() -> anyhow::Result<()> {
    let mut session = PracticeSession::new(mock::practice_questions());
    session.start();

    println!(
        "Practice: {} questions, {} to answer them.",
        session.questions().len(),
        session.clock()
    );
    println!("Answer with a letter. 'h' toggles the hint, 't' shows the time, 'q' quits.");
    print_practice_question(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = runner::ticker();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if matches!(session.tick(), PracticeTick::TimeUp) {
                    println!();
                    println!("Time's up!");
                    break;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim().to_lowercase().as_str() {
                    "" => continue,
                    "q" => break,
                    "t" => println!("Time left: {}", session.clock()),
                    "h" => {
                        session.toggle_hint();
                        if session.hint_visible() {
                            let hint = session
                                .current_question()
                                .and_then(|q| q.hint.as_deref())
                                .unwrap_or("No hint for this question.");
                            println!("Hint: {}", hint);
                        }
                    }
                    input => {
                        let option_count = session.current_question().map_or(0, |q| q.options.len());
                        let Some(option) = parse_option(input, option_count) else {
                            eprintln!("Answer with a letter between A and {}", option_letter(option_count.saturating_sub(1)));
                            continue;
                        };

                        session.select(option);
                        match session.check()? {
                            CheckOutcome::Correct => println!("Correct!"),
                            CheckOutcome::Incorrect { correct_answer } => {
                                println!("Incorrect. The correct answer is {}.", option_letter(correct_answer))
                            }
                        }
                        if let Some(explanation) = session.current_question().and_then(|q| q.explanation.as_deref()) {
                            println!("{}", explanation);
                        }

                        session.next();
                        if session.is_completed() {
                            break;
                        }
                        print_practice_question(&session);
                    }
                }
            }
        }
    }

    println!();
    println!(
        "Score: {}/{} ({}%)",
        session.score(),
        session.questions().len(),
        session.percentage()
    );
    println!("{}", session.grade().message());
    Ok(())
}

fn print_practice_question(session: &PracticeSession) {
    let Some(question) = session.current_question() else {
        return;
    };

    println!();
    println!(
        "Question {} of {} [{}]  ({} left)",
        session.current_index() + 1,
        session.questions().len(),
        question.category,
        session.clock()
    );
    println!("{}", question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", option_letter(i), option);
    }
}

/// `"b"` → `Some(1)` when there are at least two options
fn parse_option(input: &str, option_count: usize) -> Option<usize> {
    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }
    let index = (letter as u8 - b'A') as usize;
    (index < option_count).then_some(index)
}

async fn run_upload(paths: &[PathBuf], dry_run: bool) -> anyhow::Result<()> {
    let mut candidates = Vec::with_capacity(paths.len());
    for path in paths {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mime = mime_for_path(path).unwrap_or("application/octet-stream");
        candidates.push(FileCandidate::new(file_name(path), mime, metadata.len()));
    }

    let mut queue = UploadQueue::new();
    for error in queue.stage(candidates) {
        eprintln!("Rejected: {}", error);
    }

    if queue.is_empty() {
        eprintln!("Nothing to upload. Accepted formats: {}", ACCEPTED_EXTENSIONS.split(',').collect::<Vec<_>>().join(", "));
        std::process::exit(1);
    }

    println!("{:<32} {:<14} {:>10}", "File", "Type", "Size");
    println!("{}", "-".repeat(58));
    for file in queue.files() {
        println!(
            "{:<32} {:<14} {:>10}",
            file.name,
            format!("{} {:?}", file.kind().icon(), file.kind()),
            file.display_size()
        );
    }

    if dry_run {
        return Ok(());
    }

    println!();
    runner::play_upload(&mut queue, |file| {
        if file.progress % 50 == 0 {
            println!("  {:<32} {:>3}%", file.name, file.progress);
        }
    })
    .await?;

    println!("Upload complete. Generating summary...");
    runner::summary_delay().await;
    print_summary(&mock::document_summary());
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_summary(summary: &DocumentSummary) {
    println!();
    println!("{}", summary.title);
    println!(
        "{} pages, {} words, last modified {}",
        summary.page_count, summary.word_count, summary.last_modified
    );
    println!();
    println!("{}", summary.summary);

    for topic in &summary.main_topics {
        println!();
        println!("## {}", topic.title);
        for subtopic in &topic.subtopics {
            println!("  - {}", subtopic);
        }
        for point in &topic.key_points {
            println!("  * {}", point);
        }
    }

    println!();
    println!("Key terms:");
    for term in &summary.key_terms {
        println!("  {:<24} {}", term.term, term.definition);
    }
}

async fn authenticate(config: &Config, form: &AuthForm) -> anyhow::Result<()> {
    let submission = form.submission()?;
    let client = client(config)?;

    let result = match &submission {
        Submission::Login(body) => client.login(body).await,
        Submission::Register(body) => client.register(body).await,
    };
    let token = resolve_auth(result)?;

    let store = config.token_store()?;
    store.save(&token)?;
    tracing::info!(path = ?store.path(), "Token saved");

    match form.mode() {
        AuthMode::Login => println!("Logged in"),
        AuthMode::Signup => println!("Account created, you are logged in"),
    }
    Ok(())
}

async fn show_leaderboard(config: &Config, subject_id: &str) -> anyhow::Result<()> {
    let client = client(config)?;

    let subject = client.subject(subject_id).await?;
    let entries = client.leaderboard(subject_id).await?;

    // Own position is optional: without a login the board still shows
    let me = client.profile().await.ok();
    let rank = client.user_rank(subject_id).await.map(|r| r.rank).ok();

    println!("{} Leaderboard", subject.name);
    println!();

    if entries.is_empty() {
        println!("No scores yet.");
        return Ok(());
    }

    for (place, entry) in podium(&entries) {
        println!("  #{} {:<28} {:>6}", place, entry.user.name, entry.score);
    }
    println!();

    let my_id = me.as_ref().map(|u| u.id.as_str());
    for (place, entry) in board_rows(&entries) {
        let marker = if Some(entry.user.id.as_str()) == my_id { ">" } else { " " };
        println!("{} {:>3}  {:<28} {:>6} pts", marker, place, entry.user.name, entry.score);
    }

    if let (Some(me), Some(rank)) = (me, rank) {
        if shows_own_position(rank) {
            println!();
            println!("Your Position");
            println!("  {:>3}  {:<28} {:>6} pts", rank, me.name, me.score);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option("a", 4), Some(0));
        assert_eq!(parse_option("D", 4), Some(3));
        assert_eq!(parse_option("e", 4), None);
        assert_eq!(parse_option("ab", 4), None);
        assert_eq!(parse_option("1", 4), None);
    }

    #[test]
    fn test_cli_parses_register() {
        let cli = Cli::parse_from([
            "studybuddy",
            "register",
            "--name",
            "Jamie Chen",
            "--email",
            "jamie@example.com",
            "--password",
            "secret",
            "--accept-terms",
        ]);
        match cli.command {
            Commands::Register {
                user_type,
                accept_terms,
                ..
            } => {
                assert_eq!(user_type, "student");
                assert!(accept_terms);
            }
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/tmp/notes.pdf")), "notes.pdf");
    }
}
