use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use quizship::data::{self, GameData};
use quizship::{
    cell_status, logging, probe, render_layout, render_play_view, render_positions_markdown,
    render_scoreboard, resolve, store, Coord, GameEvent, GameState, GridDims, LogRelay, PieceKind,
    PresentationRelay, ProbeOutcome, Question, TeamId, Verdict,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-team trivia battleship host tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Generate a board layout and write it out as game data files.
    Generate {
        #[arg(long, default_value_t = 10)]
        width: usize,
        #[arg(long, default_value_t = 10)]
        height: usize,
        /// Ship lengths, e.g. 4,3,3,2,2,2,1,1,1,1
        #[arg(long, value_delimiter = ',', default_value = "4,3,3,2,2,2,1,1,1,1")]
        ships: Vec<usize>,
        #[arg(long, default_value_t = 3)]
        bombs: usize,
        /// Existing game data directory; its ships and bombs keep their
        /// identity and questions and only get fresh coordinates.
        #[arg(long)]
        data: Option<PathBuf>,
        /// Where ships.json, bombs.json and positions.md are written.
        #[arg(long, default_value = "generated")]
        out: PathBuf,
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
    /// Host a game on the console.
    Play {
        /// Game data directory with questions.json, ships.json, bombs.json.
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value = "quizship-save.json")]
        save: PathBuf,
        #[arg(long, default_value_t = 10)]
        width: usize,
        #[arg(long, default_value_t = 10)]
        height: usize,
        #[arg(long)]
        team1: Option<String>,
        #[arg(long)]
        team2: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            ships,
            bombs,
            data,
            out,
            seed,
        } => generate(width, height, &ships, bombs, data.as_deref(), &out, seed),
        Commands::Play {
            data,
            save,
            width,
            height,
            team1,
            team2,
        } => play(&data, &save, width, height, team1, team2),
    }
}

fn game_dims(width: usize, height: usize) -> anyhow::Result<GridDims> {
    if !(5..=20).contains(&width) || !(5..=20).contains(&height) {
        bail!(
            "grid dimensions must be between 5 and 20, got {}x{}",
            width,
            height
        );
    }
    Ok(GridDims::new(width, height)?)
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn generate(
    width: usize,
    height: usize,
    ships: &[usize],
    bombs: usize,
    data: Option<&Path>,
    out: &Path,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let dims = game_dims(width, height)?;
    let mut rng = seeded_rng(seed);
    if let Some(s) = seed {
        println!("Using fixed seed: {} (layout will be reproducible)", s);
    }

    let (board, questions) = match data {
        Some(dir) => {
            let old = data::load_board(dir)
                .with_context(|| format!("loading board from {}", dir.display()))?;
            let questions = data::load_questions(dir).unwrap_or_default();
            let board = quizship::regenerate_board(dims, &old, &mut rng)
                .context("board generation failed")?;
            (board, questions)
        }
        None => {
            let board = quizship::generate_board(dims, ships, bombs, &mut rng)
                .context("board generation failed")?;
            (board, Vec::new())
        }
    };

    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;
    data::save_board(out, &board)?;
    let report = render_positions_markdown(dims, &board, &questions, Utc::now());
    let report_path = out.join("positions.md");
    std::fs::write(&report_path, report)
        .with_context(|| format!("writing {}", report_path.display()))?;

    println!("{}", render_layout(dims, &board));
    println!(
        "Placed {} ships and {} bombs on a {}x{} grid.",
        board.ships.len(),
        board.bombs.len(),
        dims.width(),
        dims.height()
    );
    println!("Artifacts written to {}", out.display());
    Ok(())
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_team_name(label: &str, preset: Option<String>) -> anyhow::Result<String> {
    if let Some(name) = preset {
        return Ok(name);
    }
    loop {
        let name = prompt(label)?;
        if !name.is_empty() {
            return Ok(name);
        }
        println!("Team name cannot be empty.");
    }
}

fn play(
    data_dir: &Path,
    save_path: &Path,
    width: usize,
    height: usize,
    team1: Option<String>,
    team2: Option<String>,
) -> anyhow::Result<()> {
    let dims = game_dims(width, height)?;
    let mut game = data::load_game_data(data_dir, dims)
        .with_context(|| format!("loading game data from {}", data_dir.display()))?;
    let relay = LogRelay;

    let mut state = GameState::new();
    let resumed = match store::load(save_path) {
        Ok(Some(saved)) if saved.game_started => {
            let answer = prompt("Found a saved game. Resume it? [y/N] ")?;
            if answer.eq_ignore_ascii_case("y") {
                state.load_saved(saved);
                true
            } else {
                false
            }
        }
        Ok(_) => false,
        Err(err) => {
            // A corrupt save file only costs the resume offer.
            eprintln!("Ignoring unreadable save file: {}", err);
            false
        }
    };
    if !resumed {
        let name1 = prompt_team_name("Team 1 name: ", team1)?;
        let name2 = prompt_team_name("Team 2 name: ", team2)?;
        state.start_game(&name1, &name2);
        store::save(save_path, &state)?;
        relay.publish_game_status(true);
    }

    println!("\nCommands: a coordinate (e.g. C7), view, edit, set <coord> <question-id>,");
    println!("reset, quit.\n");

    loop {
        println!("{}", render_scoreboard(&state));
        println!("{}", render_play_view(dims, &game.board, &state));
        if state.is_completed(&game.board) {
            announce_victory(&state);
            break;
        }

        let input = prompt(&format!("{}> ", state.current_team().name))?;
        let mut words = input.split_whitespace();
        match words.next() {
            None => continue,
            Some("quit") | Some("q") => break,
            Some("view") => state.toggle_view_mode(),
            Some("edit") => {
                state.toggle_edit_mode();
                if state.edit_mode {
                    println!("Edit mode: set <coord> <question-id> reassigns a cell's question.");
                }
            }
            Some("set") if state.edit_mode => {
                let (coord, qid) = match (words.next(), words.next()) {
                    (Some(c), Some(q)) => (c, q),
                    _ => {
                        println!("Usage: set <coord> <question-id>");
                        continue;
                    }
                };
                match coord.parse::<Coord>() {
                    Ok(coord) => match game.board.assign_question(coord, qid) {
                        Ok(()) => {
                            data::save_board(data_dir, &game.board)?;
                            println!("Question at {} is now {}.", coord, qid);
                        }
                        Err(err) => println!("{}", err),
                    },
                    Err(err) => println!("{}", err),
                }
                continue;
            }
            Some("reset") => {
                let answer = prompt("Really reset the game? [y/N] ")?;
                if answer.eq_ignore_ascii_case("y") {
                    state.reset();
                    store::clear(save_path)?;
                    relay.publish_game_status(false);
                    let name1 = prompt_team_name("Team 1 name: ", None)?;
                    let name2 = prompt_team_name("Team 2 name: ", None)?;
                    state.start_game(&name1, &name2);
                }
            }
            Some(word) => {
                let coord = match word.parse::<Coord>() {
                    Ok(coord) => coord,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                if !dims.contains(coord) {
                    println!("{} is outside the board.", coord);
                    continue;
                }
                let status = cell_status(coord, &game.board, &state.probed_cells, state.view_mode);
                if !status.is_probeable() || state.probed_cells.contains(&coord) {
                    println!("{} has already been played.", coord);
                    continue;
                }
                run_probe(&mut state, &mut game, coord, &relay)?;
            }
        }
        store::save(save_path, &state)?;
    }
    store::save(save_path, &state)?;
    Ok(())
}

fn run_probe(
    state: &mut GameState,
    game: &mut GameData,
    coord: Coord,
    relay: &dyn PresentationRelay,
) -> anyhow::Result<()> {
    match probe(state, &game.board, coord) {
        ProbeOutcome::Miss => {
            println!(
                "\n  {} - miss. Turn passes to {}.\n",
                coord,
                state.current_team().name
            );
            relay.publish_event(GameEvent::Miss);
        }
        ProbeOutcome::Question { kind, question_id } => {
            relay.publish_event(GameEvent::Hit);
            let question = match game.question(&question_id) {
                Some(q) => q.clone(),
                None => {
                    // A board referencing an unknown question is a data bug;
                    // treat the cell like a skip so play can continue.
                    println!("No question with id {} - cell skipped.", question_id);
                    state.revert_probe(coord);
                    return Ok(());
                }
            };
            match kind {
                PieceKind::Ship => println!("\n  {} - HIT! A ship cell.", coord),
                PieceKind::Bomb => println!(
                    "\n  {} - BOMB! Answer it, but the turn passes either way.",
                    coord
                ),
            }
            show_question(&question);
            relay.publish_question(&question);

            loop {
                let verdict = match prompt(
                    "Verdict [c]orrect / [w]rong / [s]kip / [t]ransfer / steal [1|2]: ",
                )?
                .to_ascii_lowercase()
                .as_str()
                {
                    "c" => Verdict::Correct,
                    "w" => Verdict::Wrong,
                    "s" => Verdict::Skipped,
                    "t" => Verdict::Transferred,
                    "1" => Verdict::StolenBy(TeamId::One),
                    "2" => Verdict::StolenBy(TeamId::Two),
                    other => {
                        println!("Unrecognised verdict '{}'.", other);
                        continue;
                    }
                };
                let events = resolve(state, &game.board, coord, &question, verdict);
                for event in &events {
                    relay.publish_event(*event);
                    match event {
                        GameEvent::Correct => println!("  Answer: {}", question.answer),
                        GameEvent::Wrong => println!("  The answer was: {}", question.answer),
                        _ => {}
                    }
                }
                if verdict == Verdict::Transferred {
                    println!("  Question transferred to {}.", state.current_team().name);
                    continue;
                }
                relay.clear_question();
                break;
            }
        }
    }
    Ok(())
}

fn show_question(question: &Question) {
    println!("\n  ┌──────────────────────────────────────────────┐");
    println!(
        "    {} {} | {} {} | {} | {} points",
        quizship::category_icon(&question.category),
        question.category,
        question.kind.icon(),
        question.kind.label(),
        question.difficulty.label(),
        question.points
    );
    println!("    {}", question.question);
    if let Some(media) = &question.media_path {
        println!("    [media: {}]", media);
    }
    println!("  └──────────────────────────────────────────────┘");
}

fn announce_victory(state: &GameState) {
    println!("\n  All ships and bombs have been found!");
    match state.leader() {
        Some(id) => println!(
            "  🎉 {} wins with {} points! 🎉\n",
            state.team(id).name,
            state.team(id).score
        ),
        None => println!("  It's a tie at {} points each!\n", state.team1.score),
    }
}
