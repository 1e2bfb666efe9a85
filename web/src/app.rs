use crate::{board::Board, help::Help};
use build_time::build_time_utc;
use gloo::timers::callback::Interval;
use lifegrid_lib::{
    Coord, Session, DEATH_THRESHOLD_STEP, MAX_DEATH_THRESHOLD, MIN_DEATH_THRESHOLD,
};
use log::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, InputEvent};
use yew::{html, Component, Context, Html};

const BUILD_TIME: &str = build_time_utc!("%Y-%m-%d %H:%M:%S UTC");

pub struct App {
    session: Session,
    interval: Option<Interval>,
}

#[derive(Debug)]
pub enum Msg {
    Tick,
    Start,
    Stop,
    Clear,
    Randomize,
    SetDeathThreshold(f64),
    Toggle(Coord),
}

impl App {
    fn start_job(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let handle = Interval::new(self.session.config().interval_ms, move || {
            link.send_message(Msg::Tick)
        });
        self.interval = Some(handle);
    }

    /// Dropping the interval cancels it, so no tick is scheduled after this.
    fn stop_job(&mut self) {
        self.interval.take();
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        App {
            session: Session::default(),
            interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => return self.session.tick(),
            Msg::Start => {
                self.session.start();
                self.start_job(ctx);
            }
            Msg::Stop => {
                self.stop_job();
                self.session.stop();
            }
            Msg::Clear => {
                if let Err(e) = self.session.clear() {
                    error!("Unable to clear the grid: {}", e);
                    return false;
                }
            }
            Msg::Randomize => {
                if let Err(e) = self.session.randomize() {
                    error!("Unable to randomize the grid: {}", e);
                    return false;
                }
            }
            Msg::SetDeathThreshold(death_threshold) => {
                if let Err(e) = self.session.set_death_threshold(death_threshold) {
                    error!("Unable to set the death threshold: {}", e);
                    return false;
                }
            }
            Msg::Toggle((row, col)) => {
                if let Err(e) = self.session.toggle(row, col) {
                    error!("Unable to toggle the cell: {}", e);
                    return false;
                }
            }
        }
        debug!("Population: {}", self.session.population());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let grid = self.session.grid();
        html! {
            <div id="app">
                <div class="text">
                    <h1>{ "Conway's Game of Life" }</h1>
                    <p>{ format!("The grid is {} × {}.", grid.rows(), grid.cols()) }</p>
                </div>
                { self.buttons(ctx) }
                <div class="population">
                    <p>{ format!("Population: {}", self.session.population()) }</p>
                    <p>{ format!("Generation: {}", self.session.generation()) }</p>
                </div>
                <Board grid={grid.clone()} ontoggle={ctx.link().callback(Msg::Toggle)}/>
                <Help/>
                <footer>{ format!("Built at {}.", BUILD_TIME) }</footer>
            </div>
        }
    }
}

impl App {
    fn buttons(&self, ctx: &Context<Self>) -> Html {
        let start_stop = if self.session.is_running() {
            html! {
                <button onclick={ctx.link().callback(|_| Msg::Stop)}>
                    { "Stop" }
                </button>
            }
        } else {
            html! {
                <button onclick={ctx.link().callback(|_| Msg::Start)}>
                    { "Start" }
                </button>
            }
        };
        html! {
            <div class="buttons">
                { start_stop }
                <button onclick={ctx.link().callback(|_| Msg::Clear)}>
                    { "Clear" }
                </button>
                <button onclick={ctx.link().callback(|_| Msg::Randomize)}>
                    { "Randomize" }
                </button>
                { self.set_death_threshold(ctx) }
            </div>
        }
    }

    fn set_death_threshold(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().batch_callback(|e: InputEvent| {
            let input = e.target()?.dyn_into::<HtmlInputElement>().ok()?;
            let value: f64 = input.value().parse().ok()?;
            // Range inputs report values like 0.30000000000000004.
            Some(Msg::SetDeathThreshold((value * 10.0).round() / 10.0))
        });
        let death_threshold = self.session.config().death_threshold;
        html! {
            <div class="slider">
                <label for="set_death_threshold">
                    <abbr title="Chance for each cell to start dead when randomizing.">
                        { "Death threshold" }
                    </abbr>
                    { format!(": {:.1}", death_threshold) }
                </label>
                <input id="set_death_threshold"
                    type="range"
                    min={MIN_DEATH_THRESHOLD.to_string()}
                    max={MAX_DEATH_THRESHOLD.to_string()}
                    step={DEATH_THRESHOLD_STEP.to_string()}
                    value={death_threshold.to_string()}
                    oninput={oninput}/>
            </div>
        }
    }
}
