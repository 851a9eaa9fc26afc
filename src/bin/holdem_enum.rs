use clap::Parser;
use holdem_enum::cards::Card;
use holdem_enum::deck::Deck;
use holdem_enum::hand::{Board, HoleCards};
use holdem_enum::problem::{HoldemProblem, ProblemError};
use holdem_enum::search::{enumerate, par_solutions};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

/// Print every way to finish a Hold'em board that makes a pair or better
#[derive(Parser, Debug)]
#[command(name = "holdem-enum", version, about, long_about = None)]
struct Cli {
    /// Two hole cards, e.g. "02h 03d"
    #[arg(long, default_value = "02h 03d")]
    hole: String,

    /// Zero to five board cards, e.g. "Kih 04c 05h"
    #[arg(long, default_value = "Kih 04c 05h")]
    board: String,

    /// Deal the hole and board cards from a deck shuffled with this seed instead
    #[arg(long)]
    seed: Option<u64>,

    /// Board cards to deal when using --seed
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=5))]
    deal_board: u8,

    /// Split the search across threads
    #[arg(long)]
    parallel: bool,

    /// Only print how many completions were found
    #[arg(long)]
    count: bool,

    /// Do not print the hand category next to each completion
    #[arg(long)]
    no_category: bool,
}

fn build_problem(cli: &Cli) -> Result<HoldemProblem, ProblemError> {
    let (hole, board) = match cli.seed {
        Some(seed) => {
            let mut deck = Deck::standard();
            deck.shuffle_seeded(seed);
            log::info!("dealing from deck shuffled with seed {seed}");
            let hole = HoleCards::from_slice(&deck.draw_n(2))?;
            (hole, Board::try_new(deck.draw_n(cli.deal_board as usize))?)
        }
        None => (cli.hole.parse::<HoleCards>()?, cli.board.parse::<Board>()?),
    };
    Ok(HoldemProblem::from_cards(hole, board)?)
}

fn format_path(path: &[Card]) -> String {
    let tokens: Vec<String> = path.iter().map(Card::to_string).collect();
    format!("[{}]", tokens.join(", "))
}

fn report(problem: &HoldemProblem, path: &[Card], cli: &Cli, out: &mut impl Write) -> io::Result<()> {
    if cli.no_category {
        return writeln!(out, "{}", format_path(path));
    }
    match problem.classify(path) {
        Some(category) => writeln!(out, "{} {}", format_path(path), category),
        None => writeln!(out, "{}", format_path(path)),
    }
}

fn run(cli: &Cli, problem: &HoldemProblem) -> io::Result<u64> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.parallel {
        let found = par_solutions(problem);
        if !cli.count {
            for path in &found {
                report(problem, path, cli, &mut out)?;
            }
        }
        out.flush()?;
        return Ok(found.len() as u64);
    }

    let mut write_result: io::Result<()> = Ok(());
    let stats = enumerate(problem, |path| {
        if cli.count || write_result.is_err() {
            return;
        }
        write_result = report(problem, path, cli, &mut out);
    });
    write_result?;
    out.flush()?;
    Ok(stats.solutions)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let problem = match build_problem(&cli) {
        Ok(problem) => problem,
        Err(e) => {
            log::error!("invalid input: {e}");
            return ExitCode::from(2);
        }
    };
    log::info!(
        "hole {} {}, board {}, dealing {} more",
        problem.hole().first(),
        problem.hole().second(),
        format_path(problem.board().as_slice()),
        problem.remaining()
    );

    match run(&cli, &problem) {
        Ok(total) => {
            if cli.count {
                println!("{total}");
            }
            log::info!("{total} completions with a pair or better");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
