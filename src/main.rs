//! Bitwayz entry point
//!
//! The browser build is driven through `platform::web`. Natively this runs a
//! headless drop: a demo layout is placed, play is entered, and every
//! requested motion is completed immediately.

#[cfg(not(target_arch = "wasm32"))]
use bitwayz::{BoardConfig, PieceKind, Session, SessionEvent};

/// Upper bound on completed motions, a board can route the ball forever
#[cfg(not(target_arch = "wasm32"))]
const MAX_MOTIONS: usize = 10_000;

#[cfg(not(target_arch = "wasm32"))]
const DEMO_LAYOUT: [(i32, i32, PieceKind); 6] = [
    (0, 0, PieceKind::OuterRight),
    (1, 1, PieceKind::OuterRight),
    (2, 2, PieceKind::OuterRight),
    (3, 3, PieceKind::OuterLeft),
    (4, 2, PieceKind::OuterBoth),
    (0, 2, PieceKind::BistableLeft),
];

#[cfg(not(target_arch = "wasm32"))]
fn load_config(path: &str) -> Result<BoardConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(BoardConfig::from_json(&json)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn run(config: BoardConfig) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Config: {}", config.to_json()?);
    let mut session = Session::new(config)?;
    for (row, col, kind) in DEMO_LAYOUT {
        if session.board().contains(row, col) {
            session.set_piece(row, col, kind)?;
        } else {
            log::warn!("Demo piece ({row}, {col}) does not fit this board");
        }
    }
    session.drain_events();

    println!("Board:\n{}", session.board());
    session.toggle_mode()?;

    let mut motions = 0;
    while let Some(ticket) = session.pending_motion() {
        if motions == MAX_MOTIONS {
            log::warn!("Stopping after {MAX_MOTIONS} motions");
            session.toggle_mode()?;
            break;
        }
        session.motion_finished(ticket)?;
        motions += 1;

        for event in session.drain_events() {
            match event {
                SessionEvent::ColumnCompleted { label } => println!("Column complete: {label}"),
                SessionEvent::PassEnded { reason } => println!("Pass ended: {reason:?}"),
                _ => {}
            }
        }
    }

    println!("{motions} motions, labels: [{}]", session.labels().join(", "));
    println!("Board after pass:\n{}", session.board());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bitwayz (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => BoardConfig::default(),
    };

    if let Err(err) = run(config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
