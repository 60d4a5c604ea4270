use crate::demo::{run_demo, run_questions, run_score, QuestionsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindshift::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MindShift",
    about = "Score the MindShift personality quiz and serve it over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the question bank in presentation order
    Questions(QuestionsArgs),
    /// Score a set of answers exported from the quiz
    Score(ScoreArgs),
    /// Score built-in sample respondents and explain the result
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions(args) => {
            run_questions(args);
            Ok(())
        }
        Command::Score(args) => run_score(args),
        Command::Demo => run_demo(),
    }
}
