//! Terminal rendering of the display state.

use crate::normalize::NewsView;
use crate::state::{DisplayState, Source};

/// Render the current state to stdout.
pub fn render(state: &DisplayState) {
    match state {
        DisplayState::Idle => println!("nothing loaded yet, try `refresh`."),
        DisplayState::Loading => println!("loading..."),
        DisplayState::Loaded {
            entry,
            source,
            updated_at,
        } => match entry {
            Some(view) => print_entry(view, *source, updated_at),
            None => print_placeholder(updated_at),
        },
        DisplayState::Errored { message } => println!("error: {message}"),
    }
}

fn print_entry(view: &NewsView, source: Source, updated_at: &str) {
    println!();
    println!("  ================================================");
    println!("  {}", view.headline);
    println!("  ------------------------------------------------");
    println!("  {}", view.description);
    println!();
    if view.image_url.is_empty() {
        // a broken image never takes the text down with it
        println!("  image     [not available]");
    } else {
        println!("  image     {}", view.image_url);
    }
    println!("  source    {}", source.label());
    println!("  updated   {updated_at}");
    println!("  ================================================");
}

fn print_placeholder(updated_at: &str) {
    println!();
    println!("  nothing generated yet. The pipeline has not published an entry.");
    println!("  updated   {updated_at}");
}
