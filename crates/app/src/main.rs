use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuizLoopService};
use storage::{QuestionFileRepository, QuestionRepository};
use tracing::info;
use ui::{App, UiApp, build_app_context};

mod check;
mod cli;
mod telemetry;

use cli::{Cli, Command};

struct DesktopApp {
    source: String,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn question_source(&self) -> String {
        self.source.clone()
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let repository = QuestionFileRepository::new(&cli.questions);

    match cli.command() {
        Command::Check => {
            let questions = repository.load_questions().await?;
            print!("{}", check::render_report(&repository.describe(), &questions));
            Ok(())
        }
        Command::Ui => {
            // The bank is parsed before any window opens; a malformed file never reaches the UI.
            let services = AppServices::from_env(&repository).await?;
            let quiz_loop = services.quiz_loop();
            if !quiz_loop.explanations_enabled() {
                info!("explanations disabled: no API key in the environment");
            }

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                source: services.source().to_string(),
                quiz_loop,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
