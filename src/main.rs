#![allow(clippy::print_stderr, clippy::print_stdout)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Display;
use std::io::Write;
use std::path::PathBuf;
use utilkit::collections::{self, Nested};
use utilkit::config::Config;
use utilkit::datetime::{self, DEFAULT_FORMAT};
use utilkit::logging::{self, LogConfig, LogFormat};
use utilkit::lock::{self, FileLock};
use utilkit::math::{self, Calculator};
use utilkit::store::UserStore;
use utilkit::timer::{self, time_scope};
use utilkit::{fsio, id, security, stats, text, validate};

#[derive(Parser)]
#[command(name = "utilkit", version, about = "Small utilities and scoped-resource helpers")]
struct Cli {
    /// Emit results as pretty JSON.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Log filter directive; RUST_LOG is used only if this does not parse.
    #[arg(long, global = true, env = "UTILKIT_LOG", default_value = logging::DEFAULT_LEVEL)]
    log_level: String,
    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Random identifiers.
    Id {
        #[command(subcommand)]
        command: IdCommands,
    },
    /// Advisory lock markers.
    Lock {
        #[command(subcommand)]
        command: LockCommands,
    },
    /// Area of a circle.
    CircleArea {
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
    },
    /// First N Fibonacci numbers.
    Fib {
        #[arg(long)]
        count: usize,
    },
    /// Mean/min/max/count of the given numbers.
    Stats {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// String helpers.
    Text {
        #[command(subcommand)]
        command: TextCommands,
    },
    /// Temperature conversion.
    Temp {
        #[command(subcommand)]
        command: TempCommands,
    },
    /// Salted SHA-256 password hash.
    Hash {
        #[arg(long)]
        password: String,
        #[arg(long)]
        salt: Option<String>,
    },
    /// JSON file helpers.
    Json {
        #[command(subcommand)]
        command: JsonCommands,
    },
    /// JSON config files.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Date helpers.
    Dates {
        #[command(subcommand)]
        command: DatesCommands,
    },
    /// In-memory user store.
    Users {
        #[command(subcommand)]
        command: UsersCommands,
    },
    /// Run every helper once on sample data.
    Demo,
}

#[derive(Subcommand)]
enum UsersCommands {
    /// Add, look up, and delete sample users.
    Demo,
}

#[derive(Subcommand)]
enum IdCommands {
    /// Generate an 8-character ASCII id (hex).
    Id8,
    /// Generate a lowercase hex id of length 2*bytes.
    Hex {
        #[arg(long)]
        bytes: usize,
    },
}

#[derive(Subcommand)]
enum LockCommands {
    /// Create the marker and print its owner token.
    Acquire {
        #[arg(long)]
        path: PathBuf,
    },
    /// Remove the marker if it names `owner`.
    Release {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        owner: String,
    },
}

#[derive(Subcommand)]
enum TextCommands {
    Reverse {
        text: String,
    },
    Words {
        text: String,
    },
    Sanitize {
        name: String,
    },
    Truncate {
        text: String,
        #[arg(long)]
        max_len: usize,
        #[arg(long, default_value = "...")]
        suffix: String,
    },
    Numbers {
        text: String,
    },
    Email {
        address: String,
    },
}

#[derive(Subcommand)]
enum TempCommands {
    /// Celsius to Fahrenheit.
    C2f {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Fahrenheit to Celsius.
    F2c {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

#[derive(Subcommand)]
enum JsonCommands {
    /// Re-indent a JSON file.
    Format {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    Get {
        #[arg(long)]
        file: PathBuf,
        key: String,
    },
    Set {
        #[arg(long)]
        file: PathBuf,
        key: String,
        value: String,
        /// Parse VALUE as JSON instead of storing it as a string.
        #[arg(long)]
        value_json: bool,
    },
}

#[derive(Subcommand)]
enum DatesCommands {
    /// Every day from START to END inclusive.
    Range {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long, default_value = DEFAULT_FORMAT)]
        format: String,
    },
}

#[derive(Debug, Serialize)]
struct OkResult {
    ok: bool,
}

#[derive(Debug, Serialize)]
struct LockResult {
    path: String,
    owner: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&LogConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    });

    match cli.command {
        Commands::Id { command } => {
            let out = match command {
                IdCommands::Id8 => id::random_id8()?,
                IdCommands::Hex { bytes } => id::random_hex_id(bytes)?,
            };
            write_value(cli.json, &out, &out)?;
        }

        Commands::Lock { command } => match command {
            LockCommands::Acquire { path } => {
                let guard = FileLock::acquire(&path)
                    .with_context(|| format!("acquire lock {}", path.display()))?;
                let (path, owner) = guard.detach();
                let res = LockResult {
                    path: path.to_string_lossy().to_string(),
                    owner,
                };
                write_value(cli.json, &res, &res.owner)?;
            }
            LockCommands::Release { path, owner } => {
                lock::release_owned(&path, owner)
                    .with_context(|| format!("release lock {}", path.display()))?;
                write_ok(cli.json)?;
            }
        },

        Commands::CircleArea { radius } => {
            let area = math::circle_area(radius)?;
            write_value(cli.json, &area, format!("{area:.2}"))?;
        }

        Commands::Fib { count } => {
            write_result(cli.json, &math::fibonacci(count)?)?;
        }

        Commands::Stats { values } => {
            write_result(cli.json, &stats::calculate_statistics(&values))?;
        }

        Commands::Text { command } => match command {
            TextCommands::Reverse { text } => {
                let out = text::reverse_string(&text);
                write_value(cli.json, &out, &out)?;
            }
            TextCommands::Words { text } => {
                let n = text::count_words(&text);
                write_value(cli.json, &n, n)?;
            }
            TextCommands::Sanitize { name } => {
                let out = text::sanitize_filename(&name);
                write_value(cli.json, &out, &out)?;
            }
            TextCommands::Truncate {
                text,
                max_len,
                suffix,
            } => {
                let out = text::truncate_string(&text, max_len, &suffix);
                write_value(cli.json, &out, &out)?;
            }
            TextCommands::Numbers { text } => {
                write_result(cli.json, &text::extract_numbers(&text))?;
            }
            TextCommands::Email { address } => {
                let valid = text::validate_email(&address);
                write_value(cli.json, &valid, valid)?;
            }
        },

        Commands::Temp { command } => {
            let out = match command {
                TempCommands::C2f { value } => text::celsius_to_fahrenheit(value),
                TempCommands::F2c { value } => text::fahrenheit_to_celsius(value),
            };
            write_value(cli.json, &out, out)?;
        }

        Commands::Hash { password, salt } => {
            let out = security::hash_password(&password, salt.as_deref())?;
            write_value(cli.json, &out, &out)?;
        }

        Commands::Json { command } => match command {
            JsonCommands::Format { file } => {
                let value = fsio::read_json_file(&file)
                    .ok_or_else(|| anyhow::anyhow!("could not load JSON from {}", file.display()))?;
                println!("{}", text::format_json_output(&value).context("format JSON")?);
            }
        },

        Commands::Config { command } => match command {
            ConfigCommands::Get { file, key } => {
                let mut cfg = Config::new();
                if !cfg.load_from_file(&file) {
                    return Err(anyhow::anyhow!("no config loaded from {}", file.display()));
                }
                let value = cfg
                    .get(&key)
                    .ok_or_else(|| anyhow::anyhow!("key not found: {key}"))?;
                write_result(cli.json, value)?;
            }
            ConfigCommands::Set {
                file,
                key,
                value,
                value_json,
            } => {
                let value = if value_json {
                    serde_json::from_str(&value).context("parse VALUE as JSON")?
                } else {
                    Value::String(value)
                };
                // Only a missing file starts a fresh config; unreadable content is kept.
                let mut cfg = Config::open(&file)
                    .with_context(|| format!("refusing to overwrite {}", file.display()))?;
                cfg.set(key, value);
                if !cfg.save_to_file(&file) {
                    return Err(anyhow::anyhow!("could not save config {}", file.display()));
                }
                write_ok(cli.json)?;
            }
        },

        Commands::Dates { command } => match command {
            DatesCommands::Range { start, end, format } => {
                let start = datetime::try_parse_datetime(&start, &format).context("parse --start")?;
                let end = datetime::try_parse_datetime(&end, &format).context("parse --end")?;
                let days = datetime::date_range(start, end)
                    .into_iter()
                    .map(|d| datetime::format_datetime(d, &format))
                    .collect::<Result<Vec<_>, _>>()?;
                write_result(cli.json, &days)?;
            }
        },

        Commands::Users {
            command: UsersCommands::Demo,
        } => {
            write_result(cli.json, &users_demo())?;
        }

        Commands::Demo => {
            let report = time_scope("demo", run_demo).value?;
            write_result(cli.json, &report)?;
        }
    }

    Ok(())
}

fn users_demo() -> Value {
    let mut users = UserStore::new();
    let alice = users.add("Alice", "alice@example.com", 25).id;
    let bob = users.add("Bob", "bob@example.com", 30).id;
    let found = users.get(alice).map(|u| u.name.clone());
    let deleted = users.delete(bob);
    let third = users.add("Charlie", "charlie@example.com", 55).id;
    json!({
        "found": found,
        "deleted_bob": deleted,
        "bob_after_delete": users.get(bob),
        "next_added_id": third,
        "all": users.list_all(),
    })
}

fn run_demo() -> anyhow::Result<Value> {
    let mut calc = Calculator::new();
    calc.add(10.0, 5.0);
    calc.multiply(10.0, 3.0);

    let dups = collections::find_duplicates(&["a", "b", "c", "a", "d", "b", "e"]);
    let flat = collections::flatten(Nested::List(vec![
        Nested::List(vec![Nested::Item(1), Nested::Item(2)]),
        Nested::List(vec![
            Nested::Item(3),
            Nested::List(vec![Nested::Item(4), Nested::Item(5)]),
        ]),
        Nested::Item(6),
    ]));
    let grouped = collections::groups_to_json(collections::group_by_key(
        &[
            json!({"category": "A", "value": 1}),
            json!({"category": "B", "value": 2}),
            json!({"category": "A", "value": 3}),
        ],
        "category",
    ));

    let mut cfg = Config::new();
    cfg.set("app_name", "TestApp");
    cfg.set("debug", true);

    let sample_user = json!({"name": "Alice", "email": "alice@example.com", "age": 25});
    let fib = timer::timed("fibonacci", || math::fibonacci(10))?;

    Ok(json!({
        "circle_area_r5": format!("{:.2}", math::circle_area(5.0)?),
        "fibonacci": fib,
        "age_groups": stats::count_age_groups([Some(25), Some(30), Some(55), Some(20)]),
        "valid_email": text::validate_email("test@example.com"),
        "calculator_history": calc.history(),
        "duplicates": dups,
        "flattened": flat,
        "grouped": grouped,
        "valid_user": validate::validate_user(&sample_user),
        "users": users_demo(),
        "config": cfg.as_map(),
    }))
}

fn write_ok(json: bool) -> anyhow::Result<()> {
    if json {
        write_json(&OkResult { ok: true })
    } else {
        println!("ok");
        Ok(())
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let raw = serde_json::to_string_pretty(value).context("serialize JSON")?;
    stdout.write_all(raw.as_bytes()).context("write stdout")?;
    stdout.write_all(b"\n").context("write stdout newline")?;
    Ok(())
}

fn write_result<T: Serialize + ?Sized>(json: bool, value: &T) -> anyhow::Result<()> {
    if json {
        write_json(value)
    } else {
        // human output: best-effort JSON on one line.
        println!("{}", serde_json::to_string(value).context("serialize")?);
        Ok(())
    }
}

fn write_value<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    human: impl Display,
) -> anyhow::Result<()> {
    if json {
        write_json(value)
    } else {
        println!("{human}");
        Ok(())
    }
}
