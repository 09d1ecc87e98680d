use std::future::Future;
use std::rc::Rc;

use clap::Args;
use game2048_core::{
    Controller, DEFAULT_SUGGEST_DEPTH, Direction, Outcome, SessionView, key_direction, tile_label,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::service::HttpService;

fn default_backend() -> String {
    option_env!("GAME2048_BACKEND_URL")
        .unwrap_or_default()
        .to_string()
}

/// Tile values with a dedicated colour; everything else shares one.
const COLOURED_TILES: [u32; 11] = [0, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024];

fn tile_class(value: u32) -> String {
    if COLOURED_TILES.contains(&value) {
        format!("tile-{}", value)
    } else {
        "tile-super".to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Restart,
    Move(Direction),
    Suggest,
    EditCell { row: usize, col: usize, text: String },
    Refresh,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    value: u32,
    callback: Callback<String>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { value, callback } = props.clone();

    let class = classes!("cell", "tile", tile_class(value));
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        callback.emit(input.value());
    });

    html! {
        <td>
            <input {class} data-val={value.to_string()} value={tile_label(value)} {oninput}/>
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Origin of the game engine API, empty for the page's own origin
    #[arg(short, long, default_value_t = default_backend())]
    pub backend: String,

    /// Restart and move timeout in milliseconds, 0 waits forever
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u32,

    /// Suggestion timeout in milliseconds, 0 waits forever
    #[arg(long, default_value_t = 60_000)]
    pub suggest_timeout_ms: u32,

    /// Lookahead depth sent with suggestion requests
    #[arg(long, default_value_t = DEFAULT_SUGGEST_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub suggest_depth: u32,
}

pub(crate) struct GameView {
    controller: Rc<Controller<HttpService>>,
    _keydown: EventListener,
}

impl GameView {
    fn create_keydown_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new_with_options(
            &gloo::utils::window(),
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if let Some(direction) = key_direction(&event.key()) {
                    event.prevent_default();
                    log::trace!("key {:?}", direction);
                    link.send_message(Msg::Move(direction));
                }
            },
        )
    }

    /// Runs one controller operation on the event loop. The store change
    /// callback takes care of re-rendering.
    fn run<Fut>(&self, operation: impl FnOnce(Rc<Controller<HttpService>>) -> Fut)
    where
        Fut: Future<Output = Outcome> + 'static,
    {
        let future = operation(self.controller.clone());
        spawn_local(async move {
            let outcome = future.await;
            log::trace!("outcome: {:?}", outcome);
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps {
            backend,
            timeout_ms,
            suggest_timeout_ms,
            suggest_depth,
        } = ctx.props().clone();
        log::debug!(
            "backend: {:?}, timeout: {} ms, suggest timeout: {} ms",
            backend,
            timeout_ms,
            suggest_timeout_ms
        );

        let link = ctx.link().clone();
        let service = HttpService::new(backend, timeout_ms).with_suggest_timeout(suggest_timeout_ms);
        let controller = Controller::new(service)
            .with_suggest_depth(suggest_depth)
            .on_change(move || link.send_message(Msg::Refresh));

        ctx.link().send_message(Msg::Restart);

        Self {
            controller: Rc::new(controller),
            _keydown: GameView::create_keydown_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => {
                self.run(|controller| async move { controller.restart().await });
                false
            }
            Move(direction) => {
                self.run(move |controller| async move { controller.perform_move(direction).await });
                false
            }
            Suggest => {
                self.run(|controller| async move { controller.suggest().await });
                false
            }
            EditCell { row, col, text } => {
                if let Err(err) = self.controller.edit_cell(row, col, &text) {
                    log::error!("edit ({}, {}) failed: {}", row, col, err);
                }
                false
            }
            Refresh => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let SessionView {
            board,
            status,
            suggestion,
            error,
            busy,
            accepts_moves,
        } = self.controller.view();

        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let cb_suggest = ctx.link().callback(|_: MouseEvent| Suggest);

        html! {
            <div class="game2048">
                <h1>{"2048 Game"}</h1>
                <table class={classes!("board", busy.then_some("busy"))}>
                    {
                        for board.rows().iter().enumerate().map(|(row, cells)| html! {
                            <tr>
                                {
                                    for cells.iter().enumerate().map(|(col, &value)| {
                                        let callback = ctx
                                            .link()
                                            .callback(move |text: String| EditCell { row, col, text });
                                        html! {
                                            <CellView {value} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <nav class="controls">
                    <button onclick={cb_restart} disabled={busy}>{"Restart"}</button>
                    <button onclick={cb_suggest} disabled={!accepts_moves}>{"Suggest Move"}</button>
                </nav>
                {
                    for error.map(|error| html! {
                        <section class="error card">
                            <header><strong>{"Something went wrong"}</strong></header>
                            <p>{error}</p>
                        </section>
                    })
                }
                {
                    for status.map(|banner| html! {
                        <section class="state card">
                            <header>
                                <strong>{"Game State"}</strong>
                                <span class={classes!("badge", banner.badge_class())}>{banner.label()}</span>
                            </header>
                            <p>{banner.message()}</p>
                        </section>
                    })
                }
                {
                    for suggestion.map(|suggestion| html! {
                        <section class="agent-result card">
                            <h3>{"Agent Suggestion"}</h3>
                            <pre>{suggestion}</pre>
                        </section>
                    })
                }
            </div>
        }
    }
}
