//! Mini-Pager CLI (for testing purposes only)
//! The main interface is through WASM bindings.
//!
//! Usage: mini-pager <total> [current] [limit] [intent...]
//! Intents: next, prev, first, last, or a page number.

use mini_pager::{NavigationIntent, PaginationState, Paginator, RawConfig};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(total) = args.first() else {
        print_usage();
        return;
    };

    let config = RawConfig::new(total.as_str())
        .with_current_page(args.get(1).map(String::as_str).unwrap_or(""))
        .with_range_limit(args.get(2).map(String::as_str).unwrap_or(""));
    let mut paginator = Paginator::with_config(config);
    println!("{}", render_strip(&paginator.state()));

    for arg in args.iter().skip(3) {
        let Some(intent) = parse_intent(arg) else {
            eprintln!("unknown intent: {}", arg);
            continue;
        };
        match paginator.navigate(intent) {
            Ok(Some(event)) => println!("{:<8} -> {}", arg, event.page_id),
            Ok(None) => println!("{:<8} -> (ignored)", arg),
            Err(err) => println!("{:<8} -> error: {}", arg, err),
        }
        println!("{}", render_strip(&paginator.state()));
    }
}

fn print_usage() {
    println!("Mini-Pager");
    println!("==========");
    println!();
    println!("Usage: mini-pager <total> [current] [limit] [intent...]");
    println!();
    println!("Intents: next, prev, first, last, or a page number");
    println!("Example: mini-pager 15 5 4 next next 12 first");
}

fn parse_intent(arg: &str) -> Option<NavigationIntent> {
    match arg {
        "next" | "n" => Some(NavigationIntent::Next),
        "prev" | "previous" | "p" => Some(NavigationIntent::Previous),
        "first" => Some(NavigationIntent::First),
        "last" => Some(NavigationIntent::Last),
        _ => arg.parse().ok().map(NavigationIntent::GoTo),
    }
}

/// Text rendering of the control strip, e.g. `< first ... [5] 6 7 8 ... last >`
fn render_strip(state: &PaginationState) -> String {
    if let Some(error) = &state.error_text {
        return error.clone();
    }

    let mut parts = vec![
        if state.previous_disabled { "-" } else { "<" }.to_string(),
        "first".to_string(),
    ];
    if state.has_previous {
        parts.push("...".to_string());
    }
    parts.extend(state.visible_window.iter().map(|page| {
        if page.is_selected {
            format!("[{}]", page.id)
        } else {
            page.id.to_string()
        }
    }));
    if state.has_next {
        parts.push("...".to_string());
    }
    parts.push("last".to_string());
    parts.push(if state.next_disabled { "-" } else { ">" }.to_string());
    parts.join(" ")
}
