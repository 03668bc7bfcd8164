use helloview_frontend::RootView;

fn main() {
    crate::log!("mounting root view");
    yew::Renderer::<RootView>::new().render();
}

#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}
