use std::path::PathBuf;

use clap::Parser;

use quiz_slide_gen::{Overrides, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "quiz-slides")]
#[command(about = "Generate a shuffled Slidev quiz deck from quiz.json")]
pub struct Cli {
    #[arg(long, help = "Project root; relative paths resolve against it", default_value = ".")]
    pub root: PathBuf,

    #[arg(long, env = "QUIZ_JSON", help = "Quiz pool file [default: quiz.json]")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Generated deck [default: pages/quiz.generated.md]")]
    pub output: Option<PathBuf>,

    #[arg(long, env = "QUIZ_COUNT", help = "Number of items to pick (overrides quiz.json)")]
    pub count: Option<String>,

    #[arg(
        long,
        env = "QUIZ_SEED",
        help = "Seed for a reproducible selection (overrides quiz.json; empty disables)"
    )]
    pub seed: Option<String>,

    #[arg(long, help = "Print the answer key as JSON after generating", default_value_t = false)]
    pub answer_key: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        let mut opts = RunOptions::new(self.root.clone()).with_overrides(Overrides {
            count: self.count.clone(),
            seed: self.seed.clone(),
        });
        if let Some(input) = &self.input {
            opts = opts.with_input(input);
        }
        if let Some(output) = &self.output {
            opts = opts.with_output(output);
        }
        opts
    }
}
