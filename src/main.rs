mod config;
mod content;
mod footer;
mod forms;
mod genai;
mod header;
mod pages;
mod router;
mod sections;

fn main() {
    dioxus::launch(router::App);
}
