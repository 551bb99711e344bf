#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
use medicheck_web::app::App;

#[cfg(target_arch = "wasm32")]
fn main() {
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
