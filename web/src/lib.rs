use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod service;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Options come from the URL fragment, e.g. `#--backend=http://localhost:8000&-vv`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("game2048").chain(args))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).unwrap_or_else(|err| {
        gloo::console::warn!(format!("ignoring fragment options: {}", err));
        Args::parse_from(["game2048"])
    });
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {}", err));
        }
    }

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.timeout_ms, 10_000);
        assert_eq!(args.game.suggest_timeout_ms, 60_000);
        assert_eq!(args.game.suggest_depth, 2);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn fragment_options_are_split_on_ampersand() {
        let args =
            Args::from_location_hash("#--backend=http://localhost:8000&--timeout-ms=500&-vv&")
                .unwrap();

        assert_eq!(args.game.backend, "http://localhost:8000");
        assert_eq!(args.game.timeout_ms, 500);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn zero_suggest_depth_is_rejected() {
        assert!(Args::from_location_hash("#--suggest-depth=0").is_err());

        let args = Args::from_location_hash("#--suggest-depth=3&--suggest-timeout-ms=0").unwrap();
        assert_eq!(args.game.suggest_depth, 3);
        assert_eq!(args.game.suggest_timeout_ms, 0);
    }

    #[test]
    fn unknown_fragment_option_is_an_error() {
        assert!(Args::from_location_hash("#--seed=42").is_err());
    }
}
