use crate::render::TranscriptRenderer;
use anyhow::Context;
use application::chat_session::{ChatSession, TurnOutcome};
use application::faq_service::FaqService;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::messages::APP_TITLE;
use domain::Speaker;
use infrastructure::config::{parse_threshold, Config};
use infrastructure::faq_loader::load_knowledge_base;
use shared::types::Result;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;

/// Answers questions about the company from a fixed FAQ set.
#[derive(Parser, Debug)]
#[command(name = "faq_chatbot")]
#[command(about = "IT company FAQ chatbot matching questions by TF-IDF similarity", long_about = None)]
pub struct Cli {
    /// Load FAQ entries from a JSON file instead of the built-in set
    #[arg(long, value_name = "FILE")]
    pub faq: Option<PathBuf>,

    /// Similarity a stored question must exceed to be answered (0.0 to 1.0)
    #[arg(long, value_parser = threshold_arg)]
    pub threshold: Option<f64>,

    /// Show the closest stored question and its score after each answer
    #[arg(long, action = ArgAction::SetTrue)]
    pub scores: bool,

    /// Log matching details to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default)
    Chat,
    /// Answer a single question and exit
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Print the stored questions
    List,
}

fn threshold_arg(raw: &str) -> std::result::Result<f64, String> {
    parse_threshold(raw).map_err(|e| e.to_string())
}

pub struct CliApp {
    config: Config,
    service: FaqService,
    renderer: TranscriptRenderer,
    show_scores: bool,
}

impl CliApp {
    /// Resolves configuration (`.env`, environment, then flags) and fits the
    /// matcher once for the rest of the process.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load()
            .context("Invalid configuration")?
            .with_faq_path(cli.faq.clone())
            .with_threshold(cli.threshold)?;

        let knowledge_base = load_knowledge_base(config.faq_path.as_deref())
            .context("Failed to load the FAQ set")?;
        let service = FaqService::with_threshold(knowledge_base, config.similarity_threshold)
            .context("Failed to build the question matcher")?;

        info!(
            entries = service.knowledge_base().len(),
            threshold = config.similarity_threshold,
            "matcher ready"
        );

        let renderer = TranscriptRenderer::for_terminal(io::stdout().is_terminal());
        Ok(Self::from_parts(config, service, renderer, cli.scores))
    }

    pub fn from_parts(
        config: Config,
        service: FaqService,
        renderer: TranscriptRenderer,
        show_scores: bool,
    ) -> Self {
        Self {
            config,
            service,
            renderer,
            show_scores,
        }
    }

    pub fn run(&self, command: Option<Command>) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match command.unwrap_or(Command::Chat) {
            Command::Chat => self.handle_chat(&mut out),
            Command::Ask { question } => self.handle_ask(&question.join(" "), &mut out),
            Command::List => self.handle_list(&mut out),
        }
    }

    fn handle_chat<W: Write>(&self, out: &mut W) -> Result<()> {
        if io::stdin().is_terminal() {
            let theme = ColorfulTheme::default();
            self.converse(
                || {
                    let line: String = Input::with_theme(&theme)
                        .with_prompt("You")
                        .allow_empty(true)
                        .report(false)
                        .interact_text()?;
                    Ok(Some(line))
                },
                out,
            )
        } else {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            self.converse(|| Ok(lines.next().transpose()?), out)
        }
    }

    /// Runs the chat loop until a farewell or until `next_line` runs dry.
    pub fn converse<F, W>(&self, mut next_line: F, out: &mut W) -> Result<()>
    where
        F: FnMut() -> Result<Option<String>>,
        W: Write,
    {
        let mut session = ChatSession::new(&self.service);
        self.renderer.banner(out, APP_TITLE)?;
        for message in session.transcript().messages() {
            self.renderer.message(out, message.speaker, &message.content)?;
        }
        out.flush()?;

        while let Some(line) = next_line()? {
            let outcome = session.submit(&line);
            if outcome == TurnOutcome::Ignored {
                continue;
            }
            self.renderer.message(out, Speaker::User, line.trim())?;
            match outcome {
                TurnOutcome::Reply(answer) => {
                    self.renderer.message(out, Speaker::Bot, &answer)?;
                    if self.show_scores {
                        self.print_best_match(out, line.trim())?;
                    }
                    out.flush()?;
                }
                TurnOutcome::Farewell(farewell) => {
                    self.renderer.message(out, Speaker::Bot, &farewell)?;
                    out.flush()?;
                    std::thread::sleep(self.config.exit_delay);
                    break;
                }
                TurnOutcome::Ignored => {}
            }
        }
        info!(turns = session.transcript().len(), "chat ended");
        Ok(())
    }

    fn handle_ask<W: Write>(&self, question: &str, out: &mut W) -> Result<()> {
        let answer = self.service.get_response(question);
        writeln!(out, "{answer}")?;
        if self.show_scores {
            self.print_best_match(out, question)?;
        }
        Ok(())
    }

    fn handle_list<W: Write>(&self, out: &mut W) -> Result<()> {
        for (i, question) in self.service.knowledge_base().questions().enumerate() {
            let number = format!("[{}]", i + 1);
            if self.renderer.use_color() {
                writeln!(out, "  {} {}", number.blue(), question)?;
            } else {
                writeln!(out, "  {number} {question}")?;
            }
        }
        Ok(())
    }

    fn print_best_match<W: Write>(&self, out: &mut W, query: &str) -> Result<()> {
        if let Some(best) = self.service.best_match(query) {
            let verdict = if best.score > self.service.threshold() {
                "matched"
            } else {
                "below threshold"
            };
            self.renderer.note(
                out,
                &format!(
                    "  closest: {:?} (score {:.3}, {})",
                    best.question, best.score, verdict
                ),
            )?;
            writeln!(out)?;
        }
        Ok(())
    }
}
