use lifegrid_lib::{Coord, Grid, State};
use web_sys::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Side length of a cell, in pixels.
const CELL_SIZE: u32 = 20;

pub struct Board;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub grid: Grid,
    pub ontoggle: Callback<Coord>,
}

impl Component for Board {
    type Message = ();
    type Properties = Props;

    fn create(_: &Context<Self>) -> Self {
        Board
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let grid = &ctx.props().grid;
        let style = format!(
            "grid-template-columns: repeat({}, {}px);",
            grid.cols(),
            CELL_SIZE
        );
        let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
        for (row, states) in grid.iter_rows().enumerate() {
            for (col, &state) in states.iter().enumerate() {
                cells.push(self.cell(ctx, (row, col), state));
            }
        }
        html! {
            <div id="board" style={style}>
                { for cells }
            </div>
        }
    }
}

impl Board {
    fn cell(&self, ctx: &Context<Self>, coord: Coord, state: State) -> Html {
        let onclick = ctx.props().ontoggle.reform(move |_: MouseEvent| coord);
        html! {
            <div key={format!("{}-{}", coord.0, coord.1)}
                class={classes!("cell", state.is_alive().then(|| "alive"))}
                onclick={onclick}/>
        }
    }
}
