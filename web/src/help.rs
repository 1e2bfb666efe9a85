use gloo::utils::document;
use log::error;
use once_cell::sync::Lazy;
use pulldown_cmark::{html::push_html, Parser};
use web_sys::Node;
use yew::{Component, Context, Html};

const HELP_TEXT: &str = "
## How to play

Every cell of the grid is either **alive** (blue) or **dead**. \
In each generation:

* A living cell with fewer than two or more than three living neighbors dies;
* A dead cell with exactly three living neighbors becomes alive;
* Every other cell keeps its state.

The neighbors of a cell are the eight cells around it. \
Cells beyond the edges of the grid are always dead.

Click a cell to flip its state. Click `Start` to run the simulation, \
and `Stop` to pause it. `Clear` kills every cell.

`Randomize` fills the grid at random. The `Death threshold` is the chance \
for each cell to start dead, so a higher threshold gives a sparser grid.
";

static HELP_HTML: Lazy<String> = Lazy::new(|| {
    let mut html_output = String::new();
    push_html(&mut html_output, Parser::new(HELP_TEXT));
    html_output
});

pub struct Help;

impl Component for Help {
    type Message = ();
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Help
    }

    fn view(&self, _: &Context<Self>) -> Html {
        match document().create_element("div") {
            Ok(div) => {
                div.set_id("help");
                div.set_inner_html(&HELP_HTML);
                Html::VRef(Node::from(div))
            }
            Err(e) => {
                error!("Unable to render the help: {:?}", e);
                Html::default()
            }
        }
    }
}
