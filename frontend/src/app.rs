use yew::prelude::*;

use crate::tree;

/// Static placeholder page: a centered heading over a subtitle.
#[function_component(RootView)]
pub fn root_view() -> Html {
    tree::root().to_html()
}
