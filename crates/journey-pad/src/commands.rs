//! REPL command parsing and execution.
//!
//! Each edit command clones the current map, mutates the clone, and hands
//! it back to the history store, so every command is one undo step.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use journey_pad_core::{Comment, JourneyMap, Persona, Sticker};
use journey_pad_mod_history::HistoryStore;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `stage <title>`: append a stage column.
    AddStage(String),
    /// `lane <title>`: append a lane row.
    AddLane(String),
    /// `cell <stage#> <lane#> <text>`: set cell text by display index.
    SetCell(usize, usize, String),
    /// `comment <stage#> <lane#> <author> <body>`.
    AddComment(usize, usize, String, String),
    /// `sticker <stage#> <lane#> <name>`.
    PlaceSticker(usize, usize, Sticker),
    /// `persona <name> <role>`.
    SetPersona(String, String),
    Undo,
    Redo,
    /// `show`: print the current map.
    Show,
    /// `save [path]`: write the current map to disk.
    Save(Option<PathBuf>),
    Quit,
}

impl Command {
    /// Parses one input line. Empty lines and `#` comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the expected form when the line does
    /// not parse.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let rest = || line[verb.len()..].trim().to_string();

        let cmd = match verb {
            "stage" => {
                let title = rest();
                if title.is_empty() {
                    bail!("usage: stage <title>");
                }
                Self::AddStage(title)
            }
            "lane" => {
                let title = rest();
                if title.is_empty() {
                    bail!("usage: lane <title>");
                }
                Self::AddLane(title)
            }
            "cell" => {
                let stage = parse_index(parts.next(), "cell <stage#> <lane#> <text>")?;
                let lane = parse_index(parts.next(), "cell <stage#> <lane#> <text>")?;
                let text: String = parts.collect::<Vec<_>>().join(" ");
                Self::SetCell(stage, lane, text)
            }
            "comment" => {
                let stage = parse_index(parts.next(), "comment <stage#> <lane#> <author> <body>")?;
                let lane = parse_index(parts.next(), "comment <stage#> <lane#> <author> <body>")?;
                let author = parts
                    .next()
                    .context("usage: comment <stage#> <lane#> <author> <body>")?
                    .to_string();
                let body = parts.collect::<Vec<_>>().join(" ");
                if body.is_empty() {
                    bail!("usage: comment <stage#> <lane#> <author> <body>");
                }
                Self::AddComment(stage, lane, author, body)
            }
            "sticker" => {
                let stage = parse_index(parts.next(), "sticker <stage#> <lane#> <name>")?;
                let lane = parse_index(parts.next(), "sticker <stage#> <lane#> <name>")?;
                let name = parts.next().context("usage: sticker <stage#> <lane#> <name>")?;
                let sticker = Sticker::parse(name)
                    .with_context(|| format!("unknown sticker: {name}"))?;
                Self::PlaceSticker(stage, lane, sticker)
            }
            "persona" => {
                let name = parts.next().context("usage: persona <name> <role>")?.to_string();
                let role = parts.collect::<Vec<_>>().join(" ");
                if role.is_empty() {
                    bail!("usage: persona <name> <role>");
                }
                Self::SetPersona(name, role)
            }
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "show" => Self::Show,
            "save" => Self::Save(parts.next().map(PathBuf::from)),
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command: {other}"),
        };
        Ok(Some(cmd))
    }
}

fn parse_index(part: Option<&str>, usage: &str) -> Result<usize> {
    part.with_context(|| format!("usage: {usage}"))?
        .parse::<usize>()
        .with_context(|| format!("usage: {usage}"))
}

/// Outcome of running one command, for the REPL loop.
pub enum Outcome {
    Continue,
    Quit,
}

/// Runs a command against the store.
///
/// # Errors
///
/// Returns an error for out-of-range indices or failed saves; the store
/// is left unchanged in that case.
pub fn run(
    cmd: Command,
    store: &mut HistoryStore<JourneyMap>,
    default_path: Option<&PathBuf>,
) -> Result<Outcome> {
    match cmd {
        Command::AddStage(title) => apply(store, |map| {
            map.add_stage(title);
            Ok(())
        })?,
        Command::AddLane(title) => apply(store, |map| {
            map.add_lane(title);
            Ok(())
        })?,
        Command::SetCell(stage, lane, text) => apply(store, |map| {
            let (stage_id, lane_id) = resolve(map, stage, lane)?;
            map.set_cell_text(&stage_id, &lane_id, text);
            Ok(())
        })?,
        Command::AddComment(stage, lane, author, body) => apply(store, |map| {
            let (stage_id, lane_id) = resolve(map, stage, lane)?;
            map.add_comment(&stage_id, &lane_id, Comment::new(author, body));
            Ok(())
        })?,
        Command::PlaceSticker(stage, lane, sticker) => apply(store, |map| {
            let (stage_id, lane_id) = resolve(map, stage, lane)?;
            map.place_sticker(&stage_id, &lane_id, sticker);
            Ok(())
        })?,
        Command::SetPersona(name, role) => apply(store, |map| {
            map.set_persona(Some(Persona::new(name, role)));
            Ok(())
        })?,
        Command::Undo => {
            if store.can_undo() {
                store.undo();
            } else {
                println!("nothing to undo");
            }
        }
        Command::Redo => {
            if store.can_redo() {
                store.redo();
            } else {
                println!("nothing to redo");
            }
        }
        Command::Show => {
            let map = store.get().context("no map loaded")?;
            println!("{}", render(map));
        }
        Command::Save(path) => {
            let map = store.get().context("no map loaded")?;
            let path = path
                .as_ref()
                .or(default_path)
                .context("no save path; use: save <path>")?;
            map.save(path)?;
            println!("saved {}", path.display());
        }
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}

/// Clone-mutate-set: the edit becomes one history entry. Errors from the
/// mutation leave the store untouched.
fn apply(
    store: &mut HistoryStore<JourneyMap>,
    f: impl FnOnce(&mut JourneyMap) -> Result<()>,
) -> Result<()> {
    let mut next = store.get().context("no map loaded")?.clone();
    f(&mut next)?;
    store.set(next);
    Ok(())
}

/// Resolves 1-based display indices to stage/lane ids.
fn resolve(map: &JourneyMap, stage: usize, lane: usize) -> Result<(String, String)> {
    let stage_id = stage
        .checked_sub(1)
        .and_then(|i| map.stages.get(i))
        .with_context(|| format!("no stage #{stage}"))?
        .id
        .clone();
    let lane_id = lane
        .checked_sub(1)
        .and_then(|i| map.lanes.get(i))
        .with_context(|| format!("no lane #{lane}"))?
        .id
        .clone();
    Ok((stage_id, lane_id))
}

/// Plain-text rendering of the grid for `show`.
fn render(map: &JourneyMap) -> String {
    let mut out = String::new();
    out.push_str(&format!("map: {}\n", map.title));
    if let Some(p) = &map.persona {
        out.push_str(&format!("persona: {} ({})\n", p.name, p.role));
    }
    for (li, lane) in map.lanes.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", li + 1, lane.title));
        for (si, stage) in map.stages.iter().enumerate() {
            let cell = map.cell(&stage.id, &lane.id);
            let text = cell.map(|c| c.text.as_str()).unwrap_or("-");
            let badges = cell.map(|c| c.stickers.len()).unwrap_or(0);
            let notes = cell.map(|c| c.comments.len()).unwrap_or(0);
            out.push_str(&format!(
                "    [{}] {}: {text} ({badges} stickers, {notes} comments)\n",
                si + 1,
                stage.title
            ));
        }
    }
    out
}
