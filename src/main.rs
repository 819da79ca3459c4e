//! `cubeview` command-line entry point: open a window on a cube state.

use std::path::Path;

use cubeview::{CubeState, FaceletState, Viewer};

/// Interpret the STATE argument: a `.json` file, or a 54-char facelet
/// string.
fn resolve_state(input: &str) -> Result<CubeState, String> {
    let path = Path::new(input);
    if path.exists() {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {input}: {e}"))?;
        let (state, diagnostics) = CubeState::from_json(&json)
            .map_err(|e| format!("{input}: {e}"))?;
        for diagnostic in &diagnostics {
            diagnostic.log();
        }
        return Ok(state);
    }

    if input.chars().filter(|c| !c.is_whitespace()).count() == 54 {
        let (state, diagnostics) = FaceletState::from_facelet_string(input);
        for diagnostic in &diagnostics {
            diagnostic.log();
        }
        return Ok(state.into());
    }

    Err(format!(
        "Not a state file and not a 54-facelet string: {input}"
    ))
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let state = match args.next() {
        Some(arg) => match resolve_state(&arg) {
            Ok(state) => state,
            Err(e) => {
                log::error!("{e}");
                log::error!("Usage: cubeview [STATE] [MOVES]");
                std::process::exit(1);
            }
        },
        None => FaceletState::solved().into(),
    };
    let moves = args.collect::<Vec<_>>().join(" ");

    if let Err(e) = Viewer::builder()
        .with_state(state)
        .with_moves(moves)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
