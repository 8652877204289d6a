use clap::Args;
use jeopardito_core as game;
use jeopardito_protocol as protocol;
use game::ToFlatIndex;
use rand::prelude::*;
use yew::prelude::*;

use crate::provider::JServiceProvider;
use crate::utils::js_random_seed;

const GAME_OVER_TEXT: &str = "Game Over!!! Press button to restart.";

fn header_label(category: &game::Category) -> String {
    category.title().to_uppercase()
}

fn cell_label(clue: &game::Clue) -> String {
    match clue.showing() {
        game::Showing::Hidden => "?".to_string(),
        _ => clue.question().to_uppercase(),
    }
}

/// The button reads "Restart!" from the first click on, whether or not that load succeeded.
fn start_label(attempted: bool) -> &'static str {
    if attempted { "Restart!" } else { "Start!" }
}

#[derive(Debug, PartialEq)]
enum BoardContent<'a> {
    Empty,
    LoadFailed(String),
    GameOver,
    Playing(&'a game::Board),
}

fn board_content<'a>(controller: &'a game::Controller, load_error: Option<&str>) -> BoardContent<'a> {
    match (controller.board(), load_error) {
        (Some(board), _) if board.is_finished() => BoardContent::GameOver,
        (Some(board), _) => BoardContent::Playing(board),
        (None, Some(err)) if !controller.is_loading() => {
            BoardContent::LoadFailed(format!("Could not load the board: {}", err))
        }
        (None, _) => BoardContent::Empty,
    }
}

/// Hands a finished load to the controller, returning the error to display if it failed.
fn apply_loaded(
    controller: &mut game::Controller,
    result: game::Result<game::Board>,
) -> Option<String> {
    controller.finish_loading(result).err().map(|err| err.to_string())
}

pub(crate) enum Msg {
    Start,
    Loaded(game::Result<game::Board>),
    Reveal(usize),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    label: String,
    visible: bool,
    callback: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        label,
        visible,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("clue {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td class="clue" hidden={!visible} {onclick}>{label}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the jService compatible trivia API
    #[arg(long, default_value = protocol::DEFAULT_API_BASE)]
    pub api_base: String,

    /// How many random categories to probe before giving up
    #[arg(long, default_value_t = game::ControllerConfig::DEFAULT_MAX_SAMPLE_ATTEMPTS)]
    pub max_sample_attempts: usize,
}

#[derive(Debug)]
pub(crate) struct BoardView {
    controller: game::Controller,
    rng: SmallRng,
    load_error: Option<String>,
    attempted: bool,
}

impl BoardView {
    fn start(&mut self, ctx: &Context<Self>) -> bool {
        if let Err(err) = self.controller.begin_loading() {
            log::warn!("start ignored: {}", err);
            return false;
        }
        self.load_error = None;
        self.attempted = true;

        let provider = JServiceProvider::new(ctx.props().api_base.clone(), self.rng.random());
        let board_seed: u64 = self.rng.random();
        let config = self.controller.config();
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let mut rng = SmallRng::seed_from_u64(board_seed);
            let result = game::load_board(&provider, &mut rng, config).await;
            link.send_message(Msg::Loaded(result));
        });
        true
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let board = match board_content(&self.controller, self.load_error.as_deref()) {
            BoardContent::Empty => return html! {},
            BoardContent::LoadFailed(text) => return html! { <p class="error">{text}</p> },
            BoardContent::GameOver => return html! { <div id="jeopardy">{GAME_OVER_TEXT}</div> },
            BoardContent::Playing(board) => board,
        };

        let callback = ctx.link().callback(Msg::Reveal);
        let answer_visible = board.answer_slot().is_visible();
        let answer = board.answer_text().unwrap_or("?").to_string();

        html! {
            <div id="jeopardy">
                <table>
                    <thead>
                        <tr>
                            {
                                for board.categories().iter().enumerate().map(|(position, category)| html! {
                                    <td hidden={!board.is_header_visible(position)}>{header_label(category)}</td>
                                })
                            }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for (0..game::CLUES_PER_CATEGORY).map(|slot| html! {
                                <tr>
                                    {
                                        for (0..game::CATEGORY_COUNT).map(|position| {
                                            let index = (position, slot).to_flat_index();
                                            let label = cell_label(&board[index]);
                                            let visible = board.can_interact_at(index);
                                            let callback = callback.clone();
                                            html! {
                                                <CellView {index} {label} {visible} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                    <tfoot hidden={!answer_visible}>
                        <tr><td colspan={game::CATEGORY_COUNT.to_string()}>{answer}</td></tr>
                    </tfoot>
                </table>
            </div>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            controller: game::Controller::new(game::ControllerConfig {
                max_sample_attempts: props.max_sample_attempts,
            }),
            rng: SmallRng::seed_from_u64(seed),
            load_error: None,
            attempted: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start(ctx),
            Loaded(result) => {
                self.load_error = apply_loaded(&mut self.controller, result);
                true
            }
            Reveal(index) => match self.controller.handle_reveal(index) {
                Ok(outcome) => {
                    log::debug!("clue {}: {:?}", index, outcome);
                    outcome.has_update()
                }
                Err(err) => {
                    log::error!("reveal failed: {}", err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let loading = state.is_loading();
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        html! {
            <div class="jeopardito">
                <button id="start" hidden={loading} {onclick}>{start_label(self.attempted)}</button>
                <div id="spin-container" hidden={!loading}><div class="spinner"/></div>
                { self.view_board(ctx) }
            </div>
        }
    }
}
