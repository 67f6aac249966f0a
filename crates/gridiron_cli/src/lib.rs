//! Gridiron CLI Library
//!
//! Terminal UI adapter: picks plays, drives the simulator and prints what
//! changed. All rules live in `gridiron_core`.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use gridiron_core::engine::rng::uniform_int;
use gridiron_core::{
    DriveSimulator, FieldVariant, GameState, PlayOutcome, PlayRng, PlayType, SeededRng, SimConfig,
};

/// Width of the text field strip, one cell per 5 yards plus both goal lines
const STRIP_CELLS: usize = 21;

/// Config precedence: `--config` file, then `GRIDIRON_CONFIG_PATH`, then the
/// preset for `variant` (flat when unset). An explicit `variant` always wins.
pub fn load_config(path: Option<&Path>, variant: Option<FieldVariant>) -> Result<SimConfig> {
    let mut config = match path {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => SimConfig::from_env()
            .context("Failed to load config from GRIDIRON_CONFIG_PATH")?
            .unwrap_or_default(),
    };

    if let Some(variant) = variant {
        config.variant = variant;
    }
    Ok(config)
}

/// Parses `"run-left, pass-deep 3"` style lists (comma or whitespace separated)
pub fn parse_play_list(input: &str) -> Result<Vec<PlayType>> {
    let plays = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<PlayType>())
        .collect::<Result<Vec<_>, _>>()?;

    if plays.is_empty() {
        bail!("No plays given");
    }
    Ok(plays)
}

/// Uniformly random play calls for autoplay
pub fn random_play_calls<R: PlayRng>(rng: &mut R, count: usize) -> Vec<PlayType> {
    let last = PlayType::ALL.len() as i32 - 1;
    (0..count).map(|_| PlayType::ALL[uniform_int(rng, 0, last) as usize]).collect()
}

pub fn scoreboard(state: &GameState) -> String {
    format!(
        "Home {} - {} Away | Q{} | {} ball | {} at the {}",
        state.home_score,
        state.away_score,
        state.quarter,
        state.possession,
        state.down_text(),
        state.ball.yard_line()
    )
}

/// One-line field strip in the offense's direction of travel.
/// `O` marks the ball; hex fields show their end zones as `##`.
pub fn render_field(state: &GameState) -> String {
    let mut strip = vec!['-'; STRIP_CELLS];
    for cell in (0..STRIP_CELLS).step_by(2) {
        strip[cell] = '|';
    }
    let yard_line = state.ball.yard_line().clamp(0, 100) as usize;
    strip[yard_line * (STRIP_CELLS - 1) / 100] = 'O';

    let field: String = strip.into_iter().collect();
    let end_zone = if state.variant() == FieldVariant::Hex { "##" } else { "" };
    format!("{} > {end_zone}{field}{end_zone}", state.possession)
}

pub fn describe_outcome(outcome: &PlayOutcome) -> String {
    let mut lines = vec![format!("{} ({} yards)", outcome.play.label(), outcome.result.yards)];
    lines.extend(outcome.events.iter().map(|event| format!("  {}", event.message)));
    lines.join("\n")
}

/// Runs `plays` in order, printing each outcome
pub fn run_script<R: PlayRng, W: Write>(
    sim: &mut DriveSimulator<R>,
    plays: &[PlayType],
    out: &mut W,
) -> Result<Vec<PlayOutcome>> {
    let mut outcomes = Vec::with_capacity(plays.len());
    for &play in plays {
        sim.select_play(play);
        let outcome = sim.execute_play().context("play selection was lost")?;
        writeln!(out, "{}", describe_outcome(&outcome))?;
        writeln!(out, "{}", render_field(&outcome.state))?;
        outcomes.push(outcome);
    }
    writeln!(out, "{}", scoreboard(sim.state()))?;
    Ok(outcomes)
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    for (i, play) in PlayType::ALL.iter().enumerate() {
        write!(out, "[{}] {}  ", i + 1, play.label())?;
    }
    writeln!(out)?;
    writeln!(out, "[new] New game  [log] Show log  [quit] Exit")?;
    Ok(())
}

/// Interactive loop: reads one command per line until `quit` or end of input
pub fn play_interactive<R: PlayRng, I: BufRead, W: Write>(
    sim: &mut DriveSimulator<R>,
    input: I,
    out: &mut W,
) -> Result<()> {
    if let Some(welcome) = sim.log().latest() {
        writeln!(out, "{welcome}")?;
    }
    writeln!(out, "{}", scoreboard(sim.state()))?;
    writeln!(out, "{}", render_field(sim.state()))?;
    print_menu(out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" => {
                sim.reset();
                writeln!(out, "New game.")?;
            }
            "log" => {
                for entry in sim.log().entries() {
                    writeln!(out, "  {entry}")?;
                }
                continue;
            }
            _ => match command.parse::<PlayType>() {
                Ok(play) => {
                    sim.select_play(play);
                    if let Some(outcome) = sim.execute_play() {
                        writeln!(out, "{}", describe_outcome(&outcome))?;
                    }
                }
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            },
        }
        writeln!(out, "{}", scoreboard(sim.state()))?;
        writeln!(out, "{}", render_field(sim.state()))?;
    }
    Ok(())
}

/// Simulator seeded from `seed`, or from OS entropy when absent
pub fn build_simulator(config: SimConfig, seed: Option<u64>) -> Result<DriveSimulator<SeededRng>> {
    let rng = match seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    };
    Ok(DriveSimulator::new(config, rng)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiron_core::{FieldPosition, HexCoord, ScriptedRng};
    use std::io::Cursor;

    #[test]
    fn test_parse_play_list() {
        let plays = parse_play_list("run-left, pass_deep 3,,6").unwrap();
        assert_eq!(
            plays,
            vec![PlayType::RunLeft, PlayType::PassDeep, PlayType::RunRight, PlayType::PassDeep]
        );
        assert!(parse_play_list("run-left, punt").is_err());
        assert!(parse_play_list(" , ").is_err());
    }

    #[test]
    fn test_scoreboard_and_field() {
        let state = GameState::default();
        assert_eq!(scoreboard(&state), "Home 0 - 0 Away | Q1 | Home ball | 1st & 10 at the 20");
        assert_eq!(render_field(&state), "Home > |-|-O-|-|-|-|-|-|-|-|");

        let hex = GameState {
            ball: FieldPosition::Hex(HexCoord::new(0, 110)),
            ..GameState::new(FieldVariant::Hex)
        };
        assert!(render_field(&hex).ends_with("|-|-|-|-|-|-|-|-|-|-O##"));
    }

    #[test]
    fn test_random_play_calls_cover_menu() {
        let mut rng = SeededRng::from_seed(11);
        let calls = random_play_calls(&mut rng, 600);
        assert_eq!(calls.len(), 600);
        for play in PlayType::ALL {
            assert!(calls.contains(&play), "{play} never called");
        }
    }

    #[test]
    fn test_run_script_prints_each_play() {
        let rng = ScriptedRng::new([0.5, ScriptedRng::unit_for(4, -2, 8), 0.1]);
        let mut sim = DriveSimulator::new(SimConfig::flat(), rng).unwrap();
        let mut out = Vec::new();

        let outcomes =
            run_script(&mut sim, &[PlayType::RunMiddle, PlayType::PassShort], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(text.contains("Gained 4 yards. 2nd & 6"));
        assert!(text.contains("No gain. 3rd & 6"));
        assert!(text.ends_with("Home 0 - 0 Away | Q1 | Home ball | 3rd & 6 at the 24\n"));
    }

    #[test]
    fn test_interactive_session() {
        let rng = ScriptedRng::new([0.5, ScriptedRng::unit_for(8, -2, 8)]);
        let mut sim = DriveSimulator::new(SimConfig::flat(), rng).unwrap();
        let input = Cursor::new("2\npunt\nlog\nnew\nquit\n4\n");
        let mut out = Vec::new();

        play_interactive(&mut sim, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Welcome to Gridiron Strategy!"));
        assert!(text.contains("Run Middle (8 yards)"));
        assert!(text.contains("Invalid play: punt"));
        assert!(text.contains("  Gained 8 yards. 2nd & 2"));
        assert!(text.contains("New game."));
        // quit stops before the trailing "4"
        assert_eq!(sim.state(), &GameState::default());
    }

    #[test]
    fn test_load_config_file_and_variant_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, r#"{"variant":"hex","log_capacity":5}"#).unwrap();

        let config = load_config(Some(&path), None).unwrap();
        assert_eq!(config.variant, FieldVariant::Hex);
        assert_eq!(config.log_capacity, 5);

        let config = load_config(Some(&path), Some(FieldVariant::Flat)).unwrap();
        assert_eq!(config.variant, FieldVariant::Flat);
        assert_eq!(config.log_capacity, 5);
    }

    #[test]
    fn test_load_config_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "variant: [").unwrap();

        let err = load_config(Some(&path), None).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config file"));
    }
}
