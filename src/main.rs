use clap::Parser;
use introgen::config::Config;
use introgen::intro::IntroStyle;
use introgen::pos::LexiconTagger;
use introgen::profile::StudentProfile;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "introgen",
    about = "Student introduction generator - render casual and professional intros"
)]
struct Cli {
    /// Profile JSON file
    profile: Option<PathBuf>,

    /// Intro style: casual, professional, both (default: both)
    #[arg(short, long)]
    style: Option<String>,

    /// Format hobby phrases directly instead of rendering a profile
    #[arg(long = "hobby")]
    hobbies: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["introgen.config.json", "config/introgen.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    let tagger = LexiconTagger::new(&config);

    // Hobby-only mode: format the given phrases and print the joined list
    if !cli.hobbies.is_empty() {
        let result = introgen::format_list(&cli.hobbies, &tagger, &config);
        write_output(&cli.output, &result, "hobby list");
        return;
    }

    let profile_path = match cli.profile {
        Some(ref p) => p,
        None => die("no profile file given (or use --hobby to format phrases)"),
    };

    let styles: Vec<IntroStyle> = match cli.style.as_deref() {
        Some("casual") => vec![IntroStyle::Casual],
        Some("professional") => vec![IntroStyle::Professional],
        Some("both") | None => vec![IntroStyle::Casual, IntroStyle::Professional],
        Some(other) => die(&format!("invalid style: {}", other)),
    };

    let text = fs::read_to_string(profile_path)
        .unwrap_or_else(|e| die(&format!("cannot read {}: {}", profile_path.display(), e)));
    let mut profile: StudentProfile = serde_json::from_str(&text)
        .unwrap_or_else(|e| die(&format!("invalid profile JSON: {}", e)));

    profile.normalize(&tagger);

    let missing = profile.missing_fields();
    if !missing.is_empty() {
        die(&format!("profile is incomplete, missing: {}", missing.join(", ")));
    }

    let rendered: Vec<String> = styles
        .iter()
        .map(|&style| introgen::render_intro(&profile, style, &tagger, &config))
        .collect();
    let result = rendered.join("\n\n---\n\n");

    write_output(&cli.output, &result, &format!("{} intro(s)", styles.len()));
}

fn write_output(output: &Option<PathBuf>, result: &str, what: &str) {
    if let Some(output_path) = output {
        let mut text = result.to_string();
        text.push('\n');
        fs::write(output_path, &text)
            .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
        eprintln!("rendered {} -> {}", what, output_path.display());
    } else {
        println!("{}", result);
    }
}
